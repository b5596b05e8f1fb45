use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::modal::Modal;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::form::{FieldKind, FieldSpec, FormSpec, FormValues, NONE_VALUE};
use crate::notify;

/// What an open dialog is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Create,
    /// Editing the record with this id; the map is its JSON.
    Edit(i64, Map<String, Value>),
}

impl DialogMode {
    pub fn edit<T: Serialize>(id: i64, record: &T) -> Self {
        match serde_json::to_value(record) {
            Ok(Value::Object(map)) => DialogMode::Edit(id, map),
            _ => {
                log::warn!("Record {} did not serialize to an object", id);
                DialogMode::Edit(id, Map::new())
            }
        }
    }
}

type OptionMap = BTreeMap<&'static str, Vec<SelectOption>>;

fn reference_choices(field: &FieldSpec, fetched: Vec<SelectOption>) -> Vec<SelectOption> {
    match field.kind {
        FieldKind::Reference { none_label: Some(label), .. } => {
            let mut all = vec![SelectOption::plain(NONE_VALUE, label)];
            all.extend(fetched);
            all
        }
        _ => fetched,
    }
}

/// Create/edit dialog driven by a [`FormSpec`].
///
/// Reference lists are fetched when the dialog opens. On success the
/// dialog closes and `on_saved` runs; on failure it alerts and stays open
/// with the input intact.
#[component]
pub fn EntityDialog(
    spec: FormSpec,
    mode: DialogMode,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let (edit_id, base) = match mode {
        DialogMode::Create => (None, None),
        DialogMode::Edit(id, map) => (Some(id), Some(map)),
    };
    let values = RwSignal::new(spec.initial_values(base.as_ref()));
    let options = RwSignal::new(OptionMap::new());
    let saving = RwSignal::new(false);
    let title = if edit_id.is_some() { spec.edit_title } else { spec.create_title };
    let submit_label = spec.submit_label;

    for field in spec.fields.iter().cloned() {
        if let FieldKind::Reference { collection, .. } = field.kind {
            spawn_local(async move {
                match api::reference_options(collection).await {
                    Ok(fetched) => {
                        let choices = reference_choices(&field, fetched);
                        options.update(|m| {
                            m.insert(field.key, choices);
                        });
                    }
                    Err(e) => log::error!("Failed to load options for {}: {}", field.key, e),
                }
            });
        }
    }

    let spec = StoredValue::new(spec);
    let base = StoredValue::new(base);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = values.get_untracked();
        let (collection, failure) = spec.with_value(|s| (s.collection, s.failure_message));
        let payload = match spec.with_value(|s| base.with_value(|b| s.build_payload(&current, b.as_ref()))) {
            Ok(p) => p,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::update(collection, id, &payload).await,
                None => api::create(collection, &payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("Saved {:?} record", collection);
                    on_close.run(());
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Saving {:?} failed: {}", collection, e);
                    let message = if !e.is_rejection() {
                        "Eroare de conexiune."
                    } else if edit_id.is_some() {
                        "Eroare la actualizare."
                    } else {
                        failure
                    };
                    notify::alert(message);
                }
            }
        });
    };

    let fields = spec.with_value(|s| s.fields.clone());
    let field_views = fields
        .into_iter()
        .map(|field| render_field(field, values, options))
        .collect_view();

    view! {
        <Modal title=title on_close=on_close wide=true>
            <form class="entity-form" on:submit=on_submit>
                <div class="form-grid">{field_views}</div>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Anulează"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Se salvează..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn set_value(values: RwSignal<FormValues>, key: &'static str, value: String) {
    values.update(|m| {
        m.insert(key.to_string(), value);
    });
}

fn render_field(
    field: FieldSpec,
    values: RwSignal<FormValues>,
    options: RwSignal<OptionMap>,
) -> AnyView {
    let key = field.key;
    let input_id = format!("field-{}", key);
    let current = move || values.with(|m| m.get(key).cloned().unwrap_or_default());
    let wide = matches!(field.kind, FieldKind::TextArea);
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=input_id.clone()
                class="input"
                rows="3"
                placeholder=field.placeholder
                prop:value=current
                on:input=move |ev| set_value(values, key, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                id=input_id.clone()
                type="checkbox"
                prop:checked=move || current() == "true"
                on:change=move |ev| set_value(values, key, event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Choice(choices) => view! {
            <select
                id=input_id.clone()
                class="input"
                required=field.required
                on:change=move |ev| set_value(values, key, event_target_value(&ev))
            >
                {choices
                    .iter()
                    .map(|(value, text)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || current() == value>{*text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Reference { .. } => {
            let fills = field.fills;
            let choices = Signal::derive(move || options.with(|m| m.get(key).cloned().unwrap_or_default()));
            let on_select = Callback::new(move |picked: String| {
                if let Some(target) = fills {
                    let linked = choices
                        .with_untracked(|all| all.iter().find(|o| o.value == picked).and_then(|o| o.linked));
                    if let Some(linked) = linked {
                        set_value(values, target, linked.to_string());
                    }
                }
                set_value(values, key, picked);
            });
            view! {
                <SearchableSelect
                    id=input_id.clone()
                    placeholder="Alege..."
                    options=choices
                    value=Signal::derive(current)
                    on_select=on_select
                    clearable=!field.required
                />
            }
            .into_any()
        }
        kind => view! {
            <input
                id=input_id.clone()
                class="input"
                type=kind.input_type()
                step=matches!(kind, FieldKind::Decimal).then_some("0.01")
                min=matches!(kind, FieldKind::Integer { .. } | FieldKind::Decimal).then_some("0")
                required=field.required
                placeholder=field.placeholder
                prop:value=current
                on:input=move |ev| set_value(values, key, event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group-wide=wide>
            <label for=input_id>{label}</label>
            {control}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, Partner};

    #[test]
    fn test_edit_mode_serializes_record() {
        let partner = Partner {
            id: 3,
            nume: "Școala 12".to_string(),
            tip: "scoala_stat".to_string(),
            oras: Some("Cluj".to_string()),
            adresa_completa: None,
            cui_fiscal: None,
            persoana_contact: None,
            telefon: None,
            email: None,
            status: "activ".to_string(),
            note: None,
            created_at: None,
        };
        match DialogMode::edit(partner.id, &partner) {
            DialogMode::Edit(id, map) => {
                assert_eq!(id, 3);
                assert_eq!(map["oras"], Value::String("Cluj".to_string()));
            }
            DialogMode::Create => panic!("expected edit mode"),
        }
    }

    #[test]
    fn test_none_choice_is_prepended() {
        let field = FieldSpec::new(
            "contract_id",
            "Contract",
            FieldKind::Reference {
                collection: Collection::Contracts,
                none_label: Some("Direct"),
            },
        );
        let all = reference_choices(&field, vec![SelectOption::plain("4", "Contract 4")]);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].value, NONE_VALUE);
        assert_eq!(all[0].label, "Direct");
    }
}
