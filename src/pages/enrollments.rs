use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{enrollment_status_tone, label_for, StatusBadge};
use crate::derive::{format_date, today};
use crate::form::{FieldKind, FieldSpec, FormError, FormSpec, FormValues};
use crate::lookup::resolve_name;
use crate::models::{Collection, Enrollment, Group, Student};
use crate::resource::ListResource;

pub const ENROLLMENT_STATUSES: &[(&str, &str)] = &[
    ("activ", "Activ"),
    ("in_asteptare", "În așteptare"),
    ("retras", "Retras"),
];

fn seed_enrollment(record: &Map<String, Value>, values: &mut FormValues) {
    if record.is_empty() {
        values.insert("data_inscriere".to_string(), today().format("%Y-%m-%d").to_string());
    }
}

fn compose_enrollment(_: &FormValues, payload: &mut Map<String, Value>) -> Result<(), FormError> {
    let unset = payload.get("tip_plata").map_or(true, Value::is_null);
    if unset {
        payload.insert("tip_plata".to_string(), Value::String("standard".to_string()));
    }
    Ok(())
}

pub fn enrollment_form() -> FormSpec {
    FormSpec::new(Collection::Enrollments, "Înscriere Nouă", "Editare Înscriere")
        .field(
            FieldSpec::new(
                "grupa_id",
                "Grupă",
                FieldKind::Reference { collection: Collection::Groups, none_label: None },
            )
            .required(),
        )
        .field(
            FieldSpec::new(
                "elev_id",
                "Elev",
                FieldKind::Reference { collection: Collection::Students, none_label: None },
            )
            .required(),
        )
        .field(
            FieldSpec::new("data_inscriere", "Data Înscrierii", FieldKind::Date { optional: false })
                .required(),
        )
        .field(
            FieldSpec::new("status_inscriere", "Status", FieldKind::Choice(ENROLLMENT_STATUSES))
                .default_value("activ"),
        )
        .field(FieldSpec::new("reducere_percent", "Reducere (%)", FieldKind::Decimal).default_value("0"))
        .field(FieldSpec::new("note", "Note", FieldKind::TextArea))
        .seed(seed_enrollment)
        .compose(compose_enrollment)
        .submit_label("Înscrie Elevul")
        .failure_message("Eroare! Posibil elevul este deja în această grupă.")
}

/// `-15%` when a discount applies, `-` otherwise.
pub fn discount_label(percent: f64) -> String {
    if percent > 0.0 {
        format!("-{}%", percent)
    } else {
        "-".to_string()
    }
}

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    let enrollments = ListResource::<Enrollment>::load(Collection::Enrollments);
    let students = ListResource::<Student>::load(Collection::Students);
    let groups = ListResource::<Group>::load(Collection::Groups);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| enrollments.reload());

    let rows = move || {
        let student_list = students.items.get();
        let group_list = groups.items.get();
        enrollments
            .items
            .get()
            .into_iter()
            .map(|i| {
                let id = i.id;
                let student = resolve_name(&student_list, i.elev_id, "Necunoscut");
                let group = resolve_name(&group_list, i.grupa_id, "Necunoscută");
                let prompt = format!("Retragi înscrierea lui {} din {}?", student, group);
                let edit = DialogMode::edit(id, &i);
                view! {
                    <tr>
                        <td class="cell-strong">{student}</td>
                        <td>{group}</td>
                        <td>{format_date(&i.data_inscriere)}</td>
                        <td>
                            <StatusBadge
                                label=label_for(ENROLLMENT_STATUSES, &i.status_inscriere)
                                tone=enrollment_status_tone(&i.status_inscriere)
                            />
                        </td>
                        <td class:cell-accent={i.reducere_percent > 0.0}>{discount_label(i.reducere_percent)}</td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| enrollments.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Înscrieri"
                noun="înscrieri"
                count=Signal::derive(move || enrollments.count())
                add_label="+ Înscrie Elev"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Elev", "Grupă", "Data", "Status", "Reducere", ""]
                loading=enrollments.loading
                error=enrollments.error
                empty=Signal::derive(move || enrollments.is_empty())
                empty_text="Nu există înscrieri."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=enrollment_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let form = enrollment_form();
        let values = form.initial_values(None);
        assert_eq!(values["status_inscriere"], "activ");
        assert_eq!(values["reducere_percent"], "0");
        assert_eq!(values["data_inscriere"].len(), 10);
    }

    #[test]
    fn test_payment_type_defaults_to_standard_but_is_kept_on_edit() {
        let form = enrollment_form();
        let mut values = form.initial_values(None);
        values.insert("grupa_id".to_string(), "2".to_string());
        values.insert("elev_id".to_string(), "7".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["tip_plata"], "standard");

        let record = json!({
            "id": 1, "elev_id": 7, "grupa_id": 2, "data_inscriere": "2025-09-01",
            "status_inscriere": "activ", "tip_plata": "bursa", "reducere_percent": 50.0, "note": null
        });
        let record = record.as_object().unwrap();
        let values = form.initial_values(Some(record));
        assert_eq!(values["data_inscriere"], "2025-09-01");
        let payload = form.build_payload(&values, Some(record)).unwrap();
        assert_eq!(payload["tip_plata"], "bursa");
        assert_eq!(payload["reducere_percent"], 50.0);
    }

    #[test]
    fn test_discount_label() {
        assert_eq!(discount_label(15.0), "-15%");
        assert_eq!(discount_label(0.0), "-");
    }
}
