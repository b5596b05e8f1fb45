use leptos::prelude::*;

use crate::components::entity_dialog::{DialogMode, EntityDialog};
use crate::components::record_table::{PageHeader, RecordTable};
use crate::components::stock_movement_dialog::StockMovementDialog;
use crate::form::{FieldKind, FieldSpec, FormSpec};
use crate::models::{Collection, Product};
use crate::resource::ListResource;

pub const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("Materiale Didactice", "Materiale Didactice"),
    ("Echipamente IT", "Echipamente IT"),
    ("Birotică", "Birotică"),
    ("Consumabile", "Consumabile"),
];

pub const UNITS: &[(&str, &str)] = &[
    ("buc", "Bucată (buc)"),
    ("set", "Set / Cutie"),
    ("kg", "Kilogram (kg)"),
];

pub fn product_form() -> FormSpec {
    FormSpec::new(Collection::Products, "Produs Nou", "Editare Produs")
        .field(FieldSpec::new("nume_produs", "Nume Produs", FieldKind::Text).required())
        .field(FieldSpec::new("cod_sku", "Cod SKU", FieldKind::Text))
        .field(
            FieldSpec::new("categorie", "Categorie", FieldKind::Choice(PRODUCT_CATEGORIES))
                .default_value("Materiale Didactice"),
        )
        .field(FieldSpec::new("unitate_masura", "Unitate", FieldKind::Choice(UNITS)).default_value("buc"))
        .field(FieldSpec::new("cost_unitar_mediu", "Cost Unitar (RON)", FieldKind::Decimal))
        .submit_label("Adaugă Produs")
}

/// Stock at or below zero is flagged.
pub fn is_out_of_stock(product: &Product) -> bool {
    product.stoc_curent <= 0
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let products = ListResource::<Product>::load(Collection::Products);
    let dialog = RwSignal::new(None::<DialogMode>);
    let movement = RwSignal::new(None::<(Product, bool)>);
    let close = Callback::new(move |_| dialog.set(None));
    let saved = Callback::new(move |_| products.reload());

    let rows = move || {
        products
            .items
            .get()
            .into_iter()
            .map(|p| {
                let id = p.id;
                let empty_stock = is_out_of_stock(&p);
                let for_in = p.clone();
                let for_out = p.clone();
                view! {
                    <tr>
                        <td class="cell-strong">{p.nume_produs}</td>
                        <td><span class="badge badge-gray">{p.categorie}</span></td>
                        <td class="cell-muted">{p.cod_sku.filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_string())}</td>
                        <td>
                            <span class="stock-level" class:cell-danger=empty_stock>{p.stoc_curent}</span>
                            " "
                            <span class="cell-muted">{p.unitate_masura}</span>
                        </td>
                        <td class="row-actions">
                            <button class="btn btn-small btn-in" on:click=move |_| movement.set(Some((for_in.clone(), true)))>
                                "\u{2191} Intrare"
                            </button>
                            <button class="btn btn-small btn-out" on:click=move |_| movement.set(Some((for_out.clone(), false)))>
                                "\u{2193} Ieșire"
                            </button>
                        </td>
                        <td class="row-actions">
                            <button
                                class="btn-icon btn-danger"
                                title="Șterge"
                                on:click=move |_| products.remove(id, "Sigur ștergi acest produs?")
                            >
                                "\u{1F5D1}"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Gestiune Inventar"
                noun="produse în stoc"
                count=Signal::derive(move || products.count())
                add_label="+ Produs Nou"
                on_add=Callback::new(move |_| dialog.set(Some(DialogMode::Create)))
            />
            <RecordTable
                headers=&["Produs", "Categorie", "Cod SKU", "Stoc", "Operațiuni Stoc", "Acțiuni"]
                loading=products.loading
                error=products.error
                empty=Signal::derive(move || products.is_empty())
                empty_text="Nu există produse."
            >
                {rows}
            </RecordTable>
            {move || dialog.get().map(|mode| view! {
                <EntityDialog spec=product_form() mode=mode on_close=close on_saved=saved />
            })}
            {move || movement.get().map(|(product, inbound)| view! {
                <StockMovementDialog
                    product=product
                    inbound=inbound
                    on_close=Callback::new(move |_| movement.set(None))
                    on_saved=saved
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock() {
        let mut p = Product {
            id: 1,
            nume_produs: "Kit Arduino".to_string(),
            cod_sku: None,
            categorie: "Echipamente IT".to_string(),
            unitate_masura: "buc".to_string(),
            stoc_curent: 0,
            cost_unitar_mediu: None,
        };
        assert!(is_out_of_stock(&p));
        p.stoc_curent = -2;
        assert!(is_out_of_stock(&p));
        p.stoc_curent = 4;
        assert!(!is_out_of_stock(&p));
    }

    #[test]
    fn test_product_cost_defaults_to_zero() {
        let form = product_form();
        let mut values = form.initial_values(None);
        values.insert("nume_produs".to_string(), "Plastilină".to_string());
        let payload = form.build_payload(&values, None).unwrap();
        assert_eq!(payload["cost_unitar_mediu"], 0.0);
        assert_eq!(payload["unitate_masura"], "buc");
    }
}
