use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::modal::Modal;
use crate::models::{is_inbound_movement, Product, StockMovement, MOVEMENT_TYPES};
use crate::notify;

/// Quantity typed into the dialog; anything below one is rejected.
pub fn parse_quantity(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|q| *q >= 1)
}

/// Records an inbound or outbound stock movement for one product.
#[component]
pub fn StockMovementDialog(
    product: Product,
    /// Start on an inbound movement type
    inbound: bool,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let default_type = if inbound { "achizitie_in" } else { "consum_out" };
    let (tip, set_tip) = signal(default_type.to_string());
    let (quantity, set_quantity) = signal("1".to_string());
    let (note, set_note) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let produs_id = product.id;
    let unit = product.unitate_masura.clone();

    let title = move || {
        if is_inbound_movement(&tip.get()) {
            "Intrare Stoc"
        } else {
            "Ieșire Stoc"
        }
    };

    let submit = move |_| {
        let Some(cantitate) = parse_quantity(&quantity.get_untracked()) else {
            notify::alert("Cantitatea trebuie să fie cel puțin 1.");
            return;
        };
        let movement = StockMovement {
            produs_id,
            tip: tip.get_untracked(),
            cantitate,
            note: note.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = api::stock_movement(&movement).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("Stock movement {} x{} for product {}", movement.tip, movement.cantitate, produs_id);
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Stock movement failed: {}", e);
                    notify::alert(&format!("Mișcarea de stoc nu a fost salvată: {}", e));
                }
            }
        });
    };

    view! {
        <Modal
            title=product.nume_produs.clone()
            subtitle=format!("Stoc curent: {} {}", product.stoc_curent, unit)
            on_close=on_close
        >
            <p class="movement-direction" class:inbound=move || is_inbound_movement(&tip.get())>
                {title}
            </p>
            <div class="form-group">
                <label for="movement-type">"Tip mișcare"</label>
                <select
                    id="movement-type"
                    class="input"
                    on:change=move |ev| set_tip.set(event_target_value(&ev))
                >
                    {MOVEMENT_TYPES
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option value=value selected=move || tip.get() == value>{*label}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="movement-qty">{format!("Cantitate ({})", product.unitate_masura)}</label>
                <input
                    id="movement-qty"
                    class="input"
                    type="number"
                    min="1"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="movement-note">"Observații"</label>
                <input
                    id="movement-note"
                    class="input"
                    type="text"
                    placeholder="Ex: Factura furnizor 123"
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                />
            </div>
            <div class="modal-actions">
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Anulează"</button>
                <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                    "Confirmă"
                </button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 1 "), Some(1));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("doi"), None);
    }
}
