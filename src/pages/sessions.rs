use leptos::prelude::*;
use serde_json::{Map, Number, Value};

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{label_for, session_status_tone, StatusBadge};
use crate::derive::{compose_datetime, date_part, duration_hours, format_session_datetime, time_part};
use crate::form::{FieldKind, FieldSpec, FormError, FormSpec, FormValues};
use crate::lookup::resolve_name;
use crate::models::{Collection, Group, Session, Teacher};
use crate::resource::ListResource;

pub const SESSION_STATUSES: &[(&str, &str)] = &[
    ("planificata", "Planificată"),
    ("realizata", "Realizată"),
    ("anulata", "Anulată"),
];

/// Split the stored start/end datetimes back into the date and time inputs.
fn seed_schedule(record: &Map<String, Value>, values: &mut FormValues) {
    let start = record.get("data_ora_start").and_then(Value::as_str);
    let end = record.get("data_ora_end").and_then(Value::as_str);
    if let Some(start) = start {
        values.insert("data".to_string(), date_part(start).to_string());
        values.insert("ora_start".to_string(), time_part(start));
    }
    if let Some(end) = end {
        values.insert("ora_end".to_string(), time_part(end));
    }
}

/// Both datetimes share the chosen day.
fn compose_schedule(values: &FormValues, payload: &mut Map<String, Value>) -> Result<(), FormError> {
    let get = |key: &str| values.get(key).map(String::as_str).unwrap_or_default();
    let day = get("data");
    if day.trim().is_empty() {
        return Err(FormError::Missing("Data"));
    }
    let start = compose_datetime(day, get("ora_start")).ok_or(FormError::Missing("Ora Început"))?;
    let end = compose_datetime(day, get("ora_end")).ok_or(FormError::Missing("Ora Sfârșit"))?;
    let hours = duration_hours(&start, &end);

    payload.insert("data_ora_start".to_string(), Value::String(start));
    payload.insert("data_ora_end".to_string(), Value::String(end));
    payload.insert(
        "durata_ore".to_string(),
        Number::from_f64(hours).map(Value::Number).unwrap_or(Value::Null),
    );
    payload.entry("note").or_insert_with(|| Value::String(String::new()));
    Ok(())
}

pub fn session_form() -> FormSpec {
    FormSpec::new(Collection::Sessions, "Programează Sesiune", "Editare Sesiune")
        .field(
            FieldSpec::new(
                "grupa_id",
                "Grupă",
                FieldKind::Reference { collection: Collection::Groups, none_label: None },
            )
            .required()
            .fills("profesor_id"),
        )
        .field(
            FieldSpec::new(
                "profesor_id",
                "Profesor",
                FieldKind::Reference { collection: Collection::Teachers, none_label: None },
            )
            .required(),
        )
        .field(FieldSpec::new("data", "Data", FieldKind::Date { optional: false }).required().transient())
        .field(FieldSpec::new("ora_start", "Ora Început", FieldKind::Time).default_value("14:00").transient())
        .field(FieldSpec::new("ora_end", "Ora Sfârșit", FieldKind::Time).default_value("16:00").transient())
        .field(FieldSpec::new("sala", "Sala", FieldKind::Text))
        .field(FieldSpec::new("tema_lectiei", "Tema Lecției", FieldKind::Text))
        .field(
            FieldSpec::new("status_sesiune", "Status", FieldKind::Choice(SESSION_STATUSES))
                .default_value("planificata"),
        )
        .seed(seed_schedule)
        .compose(compose_schedule)
}

#[component]
pub fn SessionsPage() -> impl IntoView {
    let sessions = ListResource::<Session>::load(Collection::Sessions);
    let groups = ListResource::<Group>::load(Collection::Groups);
    let teachers = ListResource::<Teacher>::load(Collection::Teachers);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| sessions.reload());

    let rows = move || {
        let group_list = groups.items.get();
        let teacher_list = teachers.items.get();
        sessions
            .items
            .get()
            .into_iter()
            .map(|s| {
                let id = s.id;
                let group = resolve_name(&group_list, s.grupa_id, "Grupă Ștearsă");
                let teacher = resolve_name(&teacher_list, s.profesor_id, "-");
                let prompt = format!("Ștergi sesiunea din {}?", format_session_datetime(&s.data_ora_start));
                let edit = DialogMode::edit(id, &s);
                let topic = s.tema_lectiei.clone().filter(|t| !t.is_empty()).unwrap_or_else(|| "-".to_string());
                view! {
                    <tr>
                        <td class="cell-strong">{format_session_datetime(&s.data_ora_start)}</td>
                        <td>{group}</td>
                        <td>{teacher}</td>
                        <td>{s.sala.clone().filter(|r| !r.is_empty()).unwrap_or_else(|| "-".to_string())}</td>
                        <td>
                            <div>{topic}</div>
                            <StatusBadge
                                label=label_for(SESSION_STATUSES, &s.status_sesiune)
                                tone=session_status_tone(&s.status_sesiune)
                            />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| sessions.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Sesiuni"
                noun="sesiuni"
                count=Signal::derive(move || sessions.count())
                add_label="+ Programează Sesiune"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Data & Ora", "Grupă", "Profesor", "Sala", "Temă / Status", ""]
                loading=sessions.loading
                error=sessions.error
                empty=Signal::derive(move || sessions.is_empty())
                empty_text="Nu există sesiuni programate."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=session_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_composes_datetimes() {
        let form = session_form();
        let mut values = form.initial_values(None);
        values.insert("grupa_id".to_string(), "3".to_string());
        values.insert("profesor_id".to_string(), "5".to_string());
        values.insert("data".to_string(), "2026-01-20".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["data_ora_start"], "2026-01-20T14:00:00");
        assert_eq!(payload["data_ora_end"], "2026-01-20T16:00:00");
        assert_eq!(payload["durata_ore"], 2.0);
        assert_eq!(payload["note"], "");
        assert!(!payload.contains_key("data"));
        assert!(!payload.contains_key("ora_start"));
    }

    #[test]
    fn test_edit_splits_schedule_and_keeps_note() {
        let form = session_form();
        let record = json!({
            "id": 2, "grupa_id": 1, "profesor_id": 4,
            "data_ora_start": "2026-02-03T09:30:00", "data_ora_end": "2026-02-03T11:00:00",
            "sala": "A1", "tema_lectiei": "Senzori", "status_sesiune": "realizata",
            "durata_ore": 1.5, "note": "Au lipsit doi"
        });
        let record = record.as_object().unwrap();
        let values = form.initial_values(Some(record));
        assert_eq!(values["data"], "2026-02-03");
        assert_eq!(values["ora_start"], "09:30");
        assert_eq!(values["ora_end"], "11:00");

        let payload = form.build_payload(&values, Some(record)).unwrap();
        assert_eq!(payload["note"], "Au lipsit doi");
        assert_eq!(payload["data_ora_end"], "2026-02-03T11:00:00");
    }

    #[test]
    fn test_missing_day_is_rejected() {
        let form = session_form();
        let mut values = form.initial_values(None);
        values.insert("grupa_id".to_string(), "3".to_string());
        values.insert("profesor_id".to_string(), "5".to_string());
        assert_eq!(form.build_payload(&values, None), Err(FormError::Missing("Data")));
    }
}
