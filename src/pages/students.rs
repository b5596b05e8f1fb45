use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{gdpr_badge, StatusBadge};
use crate::derive::{age_label, today};
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::models::{Collection, Student};
use crate::resource::ListResource;

pub fn student_form() -> FormSpec {
    FormSpec::new(Collection::Students, "Elev Nou", "Editare Elev")
        .field(FieldSpec::new("nume_complet", "Nume Elev", FieldKind::Text).required())
        .field(FieldSpec::new("data_nasterii", "Data Nașterii", FieldKind::Date { optional: true }))
        .field(FieldSpec::new("scoala_curenta", "Școala Curentă", FieldKind::Text))
        .field(FieldSpec::new("nume_parinte", "Nume Părinte", FieldKind::Text))
        .field(FieldSpec::new("telefon_parinte", "Telefon Părinte", FieldKind::Phone))
        .field(FieldSpec::new("email_parinte", "Email Părinte", FieldKind::Email))
        .field(FieldSpec::new("gdpr_accepted", "Acord GDPR", FieldKind::Checkbox))
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let students = ListResource::<Student>::load(Collection::Students);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| students.reload());

    let rows = move || {
        let now = today();
        students
            .items
            .get()
            .into_iter()
            .map(|s| {
                let id = s.id;
                let prompt = format!("Ștergi elevul \"{}\"?", s.nume_complet);
                let edit = DialogMode::edit(id, &s);
                let age = age_label(s.data_nasterii.as_deref(), now);
                let (gdpr_label, gdpr_tone) = gdpr_badge(s.gdpr_accepted);
                view! {
                    <tr>
                        <td>
                            <div class="cell-strong">{s.nume_complet}</div>
                            <div class="cell-muted">{s.scoala_curenta.unwrap_or_default()}</div>
                        </td>
                        <td>{age}</td>
                        <td>{s.nume_parinte.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{s.telefon_parinte.unwrap_or_else(|| "-".to_string())}</td>
                        <td><StatusBadge label=gdpr_label tone=gdpr_tone /></td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| students.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Elevi"
                noun="elevi"
                count=Signal::derive(move || students.count())
                add_label="+ Elev Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Elev", "Vârstă", "Părinte", "Telefon", "GDPR", ""]
                loading=students.loading
                error=students.error
                empty=Signal::derive(move || students.is_empty())
                empty_text="Nu există elevi înscriși."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=student_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_birth_date_sent_as_null() {
        let form = student_form();
        let mut values = form.initial_values(None);
        values.insert("nume_complet".to_string(), "Ana Pop".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert!(payload["data_nasterii"].is_null());
        assert_eq!(payload["gdpr_accepted"], false);
    }
}
