use leptos::prelude::*;
use serde_json::json;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{contract_status_tone, label_for, StatusBadge};
use crate::derive::format_date;
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::lookup::resolve_name;
use crate::models::{Collection, Contract, Partner};
use crate::resource::ListResource;

pub const CONTRACT_STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft (Ciornă)"),
    ("activ", "Activ"),
    ("expirat", "Expirat"),
    ("anulat", "Anulat"),
];

pub const PRICING_MODES: &[(&str, &str)] = &[
    ("pausal", "Paușal"),
    ("per_grupa", "Per Grupă"),
    ("per_copil", "Per Copil"),
    ("per_prezenta", "Per Prezență"),
];

pub fn contract_form() -> FormSpec {
    FormSpec::new(Collection::Contracts, "Contract Nou", "Editare Contract")
        .field(
            FieldSpec::new(
                "partener_id",
                "Client (Partener)",
                FieldKind::Reference { collection: Collection::Partners, none_label: None },
            )
            .required(),
        )
        .field(FieldSpec::new("nume_contract", "Titlu Contract", FieldKind::Text).required())
        .field(FieldSpec::new("valoare", "Valoare (RON)", FieldKind::Decimal).required())
        .field(FieldSpec::new("data_semnarii", "Data Semnării", FieldKind::Date { optional: false }).required())
        .field(FieldSpec::new("data_start", "Început", FieldKind::Date { optional: true }))
        .field(FieldSpec::new("data_expirare", "Expirare", FieldKind::Date { optional: true }))
        .field(
            FieldSpec::new("mod_calcul_pret", "Mod Calcul Preț", FieldKind::Choice(PRICING_MODES))
                .default_value("pausal"),
        )
        .field(
            FieldSpec::new("status", "Status", FieldKind::Choice(CONTRACT_STATUSES))
                .default_value("draft"),
        )
        .fixed("moneda", json!("RON"))
}

#[component]
pub fn ContractsPage() -> impl IntoView {
    let contracts = ListResource::<Contract>::load(Collection::Contracts);
    let partners = ListResource::<Partner>::load(Collection::Partners);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| contracts.reload());

    let rows = move || {
        let partner_list = partners.items.get();
        contracts
            .items
            .get()
            .into_iter()
            .map(|c| {
                let id = c.id;
                let partner = resolve_name(&partner_list, c.partener_id, "Partener necunoscut");
                let prompt = format!("Ștergi contractul \"{}\"?", c.nume_contract);
                let edit = DialogMode::edit(id, &c);
                view! {
                    <tr>
                        <td class="cell-muted">{format!("#{}", c.id)}</td>
                        <td class="cell-strong">{c.nume_contract}</td>
                        <td>{format!("{} RON", c.valoare)}</td>
                        <td>{format_date(&c.data_semnarii)}</td>
                        <td>{partner}</td>
                        <td>
                            <StatusBadge label=label_for(CONTRACT_STATUSES, &c.status) tone=contract_status_tone(&c.status) />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| contracts.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Contracte"
                noun="contracte"
                count=Signal::derive(move || contracts.count())
                add_label="+ Contract Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["ID", "Titlu", "Valoare", "Semnat", "Partener", "Status", ""]
                loading=contracts.loading
                error=contracts.error
                empty=Signal::derive(move || contracts.is_empty())
                empty_text="Nu există contracte."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=contract_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_payload() {
        let form = contract_form();
        let mut values = form.initial_values(None);
        values.insert("partener_id".to_string(), "3".to_string());
        values.insert("nume_contract".to_string(), "Robotică 2026".to_string());
        values.insert("valoare".to_string(), "4500".to_string());
        values.insert("data_semnarii".to_string(), "2026-01-10".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["partener_id"], 3);
        assert_eq!(payload["valoare"], 4500.0);
        assert_eq!(payload["moneda"], "RON");
        assert!(payload["data_expirare"].is_null());
    }
}
