use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{label_for, partner_status_tone, StatusBadge};
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::models::{Collection, Partner};
use crate::resource::ListResource;

pub const PARTNER_TYPES: &[(&str, &str)] = &[
    ("scoala_stat", "Școală de Stat"),
    ("scoala_privata", "Școală Privată"),
    ("gradinita", "Grădiniță"),
    ("hub_educational", "Hub Educațional"),
    ("after_school", "After School"),
];

pub const PARTNER_STATUSES: &[(&str, &str)] = &[
    ("potential", "Potențial"),
    ("activ", "Activ"),
    ("inactiv", "Inactiv"),
    ("blacklist", "Blacklist"),
];

pub fn partner_form() -> FormSpec {
    FormSpec::new(Collection::Partners, "Partener Nou", "Editare Partener")
        .field(
            FieldSpec::new("nume", "Nume Instituție", FieldKind::Text)
                .required()
                .placeholder("Ex: Școala Gimnazială nr. 1"),
        )
        .field(
            FieldSpec::new("tip", "Tip", FieldKind::Choice(PARTNER_TYPES))
                .required()
                .default_value("scoala_stat"),
        )
        .field(FieldSpec::new("oras", "Oraș", FieldKind::Text))
        .field(FieldSpec::new("telefon", "Telefon", FieldKind::Phone))
        .field(FieldSpec::new("email", "Email", FieldKind::Email))
        .field(
            FieldSpec::new("status", "Status", FieldKind::Choice(PARTNER_STATUSES))
                .default_value("potential"),
        )
        .failure_message("Ceva nu a mers bine.")
}

#[component]
pub fn PartnersPage() -> impl IntoView {
    let partners = ListResource::<Partner>::load(Collection::Partners);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| partners.reload());

    let rows = move || {
        partners
            .items
            .get()
            .into_iter()
            .map(|p| {
                let id = p.id;
                let prompt = format!("Ștergi partenerul \"{}\"?", p.nume);
                let edit = DialogMode::edit(id, &p);
                view! {
                    <tr>
                        <td class="cell-strong">{p.nume}</td>
                        <td>{label_for(PARTNER_TYPES, &p.tip)}</td>
                        <td>{p.oras.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{p.telefon.unwrap_or_else(|| "-".to_string())}</td>
                        <td>{p.email.unwrap_or_else(|| "-".to_string())}</td>
                        <td>
                            <StatusBadge
                                label=label_for(PARTNER_STATUSES, &p.status)
                                tone=partner_status_tone(&p.status)
                            />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| partners.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Parteneri"
                noun="parteneri"
                count=Signal::derive(move || partners.count())
                add_label="+ Partener Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Nume", "Tip", "Oraș", "Telefon", "Email", "Status", ""]
                loading=partners.loading
                error=partners.error
                empty=Signal::derive(move || partners.is_empty())
                empty_text="Nu există parteneri înregistrați."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=partner_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;

    #[test]
    fn test_partner_payload_keeps_text_fields_as_strings() {
        let form = partner_form();
        let mut values: FormValues = form.initial_values(None);
        values.insert("nume".to_string(), "Școala 5".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["tip"], "scoala_stat");
        assert_eq!(payload["oras"], "");
        assert_eq!(payload["status"], "potential");
    }
}
