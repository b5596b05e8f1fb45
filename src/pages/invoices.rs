use leptos::prelude::*;
use serde_json::json;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable, RowActions};
use crate::components::status_badge::{invoice_status_tone, label_for, StatusBadge};
use crate::derive::format_date;
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::models::{Collection, Invoice};
use crate::resource::ListResource;

pub const INVOICE_STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("emisa", "Emisă"),
    ("platita_partial", "Plătită Parțial"),
    ("platita_integral", "Plătită Integral"),
    ("scadenta_depasita", "Scadență Depășită"),
    ("anulata", "Anulată"),
];

pub fn invoice_form() -> FormSpec {
    FormSpec::new(Collection::Invoices, "Factură Nouă", "Editare Factură")
        .field(
            FieldSpec::new("serie_numar", "Serie & Număr", FieldKind::Text)
                .required()
                .placeholder("EDU-0001"),
        )
        .field(FieldSpec::new("client_nume", "Client (B2B/B2C)", FieldKind::Text).required())
        .field(FieldSpec::new("data_emitere", "Data Emitere", FieldKind::Date { optional: false }).required())
        .field(FieldSpec::new("data_scadenta", "Data Scadență", FieldKind::Date { optional: false }).required())
        .field(FieldSpec::new("total_plata", "Total (RON)", FieldKind::Decimal))
        .field(
            FieldSpec::new("status", "Status Factură", FieldKind::Choice(INVOICE_STATUSES))
                .default_value("draft"),
        )
        .fixed("moneda", json!("RON"))
}

/// Sum of invoices that are issued and not cancelled.
pub fn outstanding_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|f| matches!(f.status.as_str(), "emisa" | "platita_partial" | "scadenta_depasita"))
        .map(|f| f.total_plata)
        .sum()
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let invoices = ListResource::<Invoice>::load(Collection::Invoices);
    let dialog = RwSignal::new(None::<DialogMode>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| invoices.reload());

    let rows = move || {
        invoices
            .items
            .get()
            .into_iter()
            .map(|f| {
                let id = f.id;
                let overdue = f.status == "scadenta_depasita";
                let prompt = format!("Ștergi factura {}?", f.serie_numar);
                let edit = DialogMode::edit(id, &f);
                view! {
                    <tr>
                        <td class="cell-strong">{f.serie_numar}</td>
                        <td>{f.client_nume}</td>
                        <td>{format_date(&f.data_emitere)}</td>
                        <td class:cell-danger=overdue>{format_date(&f.data_scadenta)}</td>
                        <td class="cell-strong">{format!("{} {}", f.total_plata, f.moneda)}</td>
                        <td>
                            <StatusBadge label=label_for(INVOICE_STATUSES, &f.status) tone=invoice_status_tone(&f.status) />
                        </td>
                        <RowActions
                            on_edit=Callback::new(move |_| dialog.set(Some(edit.clone())))
                            on_delete=Callback::new(move |_| invoices.remove(id, &prompt))
                        />
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Financiar"
                noun="facturi emise"
                count=Signal::derive(move || invoices.count())
                add_label="+ Factură Nouă"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <p class="summary-line">
                "De încasat: "
                <strong>{move || format!("{:.2} RON", invoices.items.with(|l| outstanding_total(l)))}</strong>
            </p>
            <RecordTable
                headers=&["Serie", "Client", "Emisă", "Scadență", "Total", "Status", ""]
                loading=invoices.loading
                error=invoices.error
                empty=Signal::derive(move || invoices.is_empty())
                empty_text="Nu există facturi."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=invoice_form() mode=mode on_close=close on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: &str, total: f64) -> Invoice {
        Invoice {
            id: 1,
            serie_numar: "EDU-1".to_string(),
            client_nume: "Școala 3".to_string(),
            data_emitere: "2026-01-01".to_string(),
            data_scadenta: "2026-01-15".to_string(),
            total_plata: total,
            moneda: "RON".to_string(),
            status: status.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_outstanding_total() {
        let list = vec![
            invoice("emisa", 100.0),
            invoice("platita_integral", 500.0),
            invoice("scadenta_depasita", 50.5),
            invoice("anulata", 20.0),
        ];
        assert_eq!(outstanding_total(&list), 150.5);
    }

    #[test]
    fn test_unparsable_total_is_zero() {
        let form = invoice_form();
        let mut values = form.initial_values(None);
        values.insert("serie_numar".to_string(), "EDU-7".to_string());
        values.insert("client_nume".to_string(), "Popescu".to_string());
        values.insert("data_emitere".to_string(), "2026-01-02".to_string());
        values.insert("data_scadenta".to_string(), "2026-01-16".to_string());
        values.insert("total_plata".to_string(), "abc".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["total_plata"], 0.0);
        assert_eq!(payload["moneda"], "RON");
    }
}
