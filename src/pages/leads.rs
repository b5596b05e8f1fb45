use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{label_for, lead_status_tone, StatusBadge};
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::lookup::resolve_optional;
use crate::models::{Collection, Lead, Partner};
use crate::resource::ListResource;

pub const LEAD_STATUSES: &[(&str, &str)] = &[
    ("nou", "Nou"),
    ("contactat", "Contactat"),
    ("calificat", "Calificat"),
    ("ofertat", "Ofertat"),
    ("convertit", "Convertit"),
    ("pierdut", "Pierdut"),
];

pub const LEAD_SOURCES: &[(&str, &str)] = &[
    ("facebook", "Facebook Ads"),
    ("google", "Google Search"),
    ("recomandare", "Recomandare"),
    ("linkedin", "LinkedIn"),
    ("rece", "Apel la Rece"),
];

pub fn lead_form() -> FormSpec {
    FormSpec::new(Collection::Leads, "Lead Nou", "Editare Lead")
        .field(FieldSpec::new(
            "partener_id",
            "Partener (Instituție)",
            FieldKind::Reference { collection: Collection::Partners, none_label: None },
        ))
        .field(FieldSpec::new("nume_contact", "Nume Pers. Contact", FieldKind::Text).required())
        .field(
            FieldSpec::new("sursa_lead", "Sursă Lead", FieldKind::Choice(LEAD_SOURCES))
                .default_value("facebook"),
        )
        .field(FieldSpec::new("status", "Status", FieldKind::Choice(LEAD_STATUSES)).default_value("nou"))
        .field(FieldSpec::new("telefon_contact", "Telefon", FieldKind::Phone))
        .field(FieldSpec::new("email_contact", "Email", FieldKind::Email))
        .field(FieldSpec::new("note", "Note", FieldKind::TextArea))
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let leads = ListResource::<Lead>::load(Collection::Leads);
    let partners = ListResource::<Partner>::load(Collection::Partners);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| leads.reload());

    let rows = move || {
        let partner_list = partners.items.get();
        leads
            .items
            .get()
            .into_iter()
            .map(|l| {
                let id = l.id;
                let partner = resolve_optional(&partner_list, l.partener_id, "-", "Partener necunoscut");
                let name = l.nume_contact.clone().unwrap_or_else(|| "-".to_string());
                let prompt = format!("Ștergi lead-ul \"{}\"?", name);
                let edit = DialogMode::edit(id, &l);
                view! {
                    <tr>
                        <td class="cell-strong">{name}</td>
                        <td>{l.sursa_lead.as_deref().map(|s| label_for(LEAD_SOURCES, s)).unwrap_or_else(|| "-".to_string())}</td>
                        <td>{l.telefon_contact.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{partner}</td>
                        <td>
                            <StatusBadge label=label_for(LEAD_STATUSES, &l.status) tone=lead_status_tone(&l.status) />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| leads.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Leaduri"
                noun="leaduri"
                count=Signal::derive(move || leads.count())
                add_label="+ Lead Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Contact", "Sursă", "Telefon", "Partener", "Status", ""]
                loading=leads.loading
                error=leads.error
                empty=Signal::derive(move || leads.is_empty())
                empty_text="Nu există leaduri."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=lead_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_without_partner_sends_null() {
        let form = lead_form();
        let mut values = form.initial_values(None);
        values.insert("nume_contact".to_string(), "Ion Popescu".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert!(payload["partener_id"].is_null());
        assert_eq!(payload["sursa_lead"], "facebook");
    }
}
