use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{active_badge, label_for, StatusBadge};
use crate::form::{FieldKind, FieldSpec, FormError, FormSpec, FormValues};
use crate::models::{Collection, Teacher};
use crate::resource::ListResource;

pub const TEACHER_CONTRACTS: &[(&str, &str)] = &[
    ("cim", "CIM (Angajat)"),
    ("srl", "SRL (B2B)"),
    ("pfa", "PFA"),
    ("voluntariat", "Voluntariat"),
];

/// New teachers start active; an edit keeps the stored flag.
fn compose_teacher(_: &FormValues, payload: &mut Map<String, Value>) -> Result<(), FormError> {
    payload.entry("is_active").or_insert(Value::Bool(true));
    Ok(())
}

pub fn teacher_form() -> FormSpec {
    FormSpec::new(Collection::Teachers, "Profesor Nou", "Editare Profesor")
        .field(FieldSpec::new("nume_complet", "Nume Complet", FieldKind::Text).required())
        .field(FieldSpec::new("email", "Email", FieldKind::Email))
        .field(FieldSpec::new("telefon", "Telefon", FieldKind::Phone))
        .field(
            FieldSpec::new("tip_contract", "Tip Contract", FieldKind::Choice(TEACHER_CONTRACTS))
                .default_value("cim"),
        )
        .field(FieldSpec::new("tarif_orar_default", "Tarif Orar (RON)", FieldKind::Decimal))
        .field(FieldSpec::new("data_start", "Data Start", FieldKind::Date { optional: true }))
        .compose(compose_teacher)
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    let teachers = ListResource::<Teacher>::load(Collection::Teachers);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| teachers.reload());

    let rows = move || {
        teachers
            .items
            .get()
            .into_iter()
            .map(|t| {
                let id = t.id;
                let prompt = format!("Ștergi profesorul \"{}\"?", t.nume_complet);
                let edit = DialogMode::edit(id, &t);
                let (active_label, active_tone) = active_badge(t.is_active);
                let rate = t
                    .tarif_orar_default
                    .map(|r| format!("{} RON/h", r))
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <tr>
                        <td class="cell-strong">{t.nume_complet}</td>
                        <td>
                            <div>{t.email.unwrap_or_else(|| "-".to_string())}</div>
                            <div class="cell-muted">{t.telefon.unwrap_or_default()}</div>
                        </td>
                        <td>{label_for(TEACHER_CONTRACTS, &t.tip_contract)}</td>
                        <td>{rate}</td>
                        <td><StatusBadge label=active_label tone=active_tone /></td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| teachers.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Profesori"
                noun="profesori"
                count=Signal::derive(move || teachers.count())
                add_label="+ Profesor Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Nume", "Contact", "Contract", "Tarif", "Status", ""]
                loading=teachers.loading
                error=teachers.error
                empty=Signal::derive(move || teachers.is_empty())
                empty_text="Nu există profesori."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=teacher_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_teacher_is_active() {
        let form = teacher_form();
        let mut values = form.initial_values(None);
        values.insert("nume_complet".to_string(), "Ioana Marin".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["is_active"], true);
        assert_eq!(payload["tip_contract"], "cim");
    }

    #[test]
    fn test_edit_keeps_inactive_flag() {
        let form = teacher_form();
        let record = json!({
            "id": 3, "nume_complet": "Dan Pop", "email": null, "telefon": null,
            "tip_contract": "pfa", "tarif_orar_default": 60.0, "is_active": false,
            "data_start": null, "note": "Concediu"
        });
        let record = record.as_object().unwrap();
        let values = form.initial_values(Some(record));
        let payload = form.build_payload(&values, Some(record)).unwrap();
        assert_eq!(payload["is_active"], false);
        assert_eq!(payload["tarif_orar_default"], 60.0);
        assert_eq!(payload["note"], "Concediu");
    }
}
