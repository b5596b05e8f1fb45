use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;

/// A single option in the searchable select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub group: String,
    /// Id of a related record, used to pre-fill another field.
    pub linked: Option<i64>,
}

impl SelectOption {
    pub fn plain(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            group: String::new(),
            linked: None,
        }
    }
}

/// Filter by case-insensitive label match, then bucket by group in first-seen order.
pub fn group_options(all: Vec<SelectOption>, query: &str) -> (Vec<(String, Vec<SelectOption>)>, usize) {
    let query = query.to_lowercase();
    let filtered: Vec<_> = if query.is_empty() {
        all
    } else {
        all.into_iter()
            .filter(|o| o.label.to_lowercase().contains(&query))
            .collect()
    };

    let total = filtered.len();
    let mut groups: Vec<(String, Vec<SelectOption>)> = Vec::new();
    for opt in filtered {
        if let Some(g) = groups.iter_mut().find(|(name, _)| *name == opt.group) {
            g.1.push(opt);
        } else {
            groups.push((opt.group.clone(), vec![opt]));
        }
    }
    (groups, total)
}

/// A registered event listener that can be detached.
pub trait Listener {
    fn detach(self);
}

impl Listener for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// Store `next` in `slot`, detaching whatever listener it held before.
fn replace_listener<L: Listener>(slot: &mut Option<L>, next: Option<L>) {
    if let Some(previous) = std::mem::replace(slot, next) {
        previous.detach();
    }
}

/// A searchable dropdown select component.
///
/// Replaces a native `<select>` with a text input that filters options
/// and a dropdown list grouped by category.
#[component]
pub fn SearchableSelect(
    /// Unique ID for this select instance.
    #[prop(into)]
    id: String,
    /// Placeholder text shown when nothing is selected.
    placeholder: &'static str,
    /// All available options.
    options: Signal<Vec<SelectOption>>,
    /// The currently selected value.
    value: Signal<String>,
    /// Callback when a value is selected.
    on_select: Callback<String>,
    /// Offer clearing the selection.
    #[prop(optional)]
    clearable: bool,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (search_text, set_search_text) = signal(String::new());

    // Get display label for current selection
    let display_label = move || {
        let val = value.get();
        if val.is_empty() {
            return String::new();
        }
        options
            .get()
            .iter()
            .find(|o| o.value == val)
            .map(|o| o.label.clone())
            .unwrap_or(val)
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        set_search_text.set(event_target_value(&ev));
        set_is_open.set(true);
    };

    let on_select_option = move |val: String| {
        on_select.run(val);
        set_is_open.set(false);
        set_search_text.set(String::new());
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_select.run(String::new());
        set_search_text.set(String::new());
    };

    let open = move |_| {
        set_is_open.set(true);
        set_search_text.set(String::new());
    };

    // Close dropdown when clicking outside; one window listener while open
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let outside_listener = StoredValue::new(None::<WindowListenerHandle>);
    let stop_listening = move || {
        outside_listener.try_update_value(|slot| replace_listener(slot, None));
    };

    Effect::new(move |_| {
        if !is_open.get() {
            stop_listening();
            return;
        }
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            use wasm_bindgen::JsCast;

            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| container.contains(Some(&node)));
            if !inside {
                set_is_open.set(false);
            }
        });
        outside_listener.try_update_value(|slot| replace_listener(slot, Some(handle)));
    });

    on_cleanup(stop_listening);

    let dropdown_id = format!("{}-dropdown", id);

    view! {
        <div
            class="searchable-select"
            class:open=move || is_open.get()
            node_ref=container_ref
            id=id
        >
            {move || {
                if is_open.get() {
                    view! {
                        <input
                            type="text"
                            class="ss-search input"
                            placeholder="Caută..."
                            prop:value=move || search_text.get()
                            on:input=on_input_change
                            autofocus=true
                        />
                    }.into_any()
                } else {
                    let has_value = !value.get().is_empty();
                    let label = display_label();
                    let display_text = if label.is_empty() {
                        placeholder.to_string()
                    } else {
                        label
                    };

                    view! {
                        <div class="ss-display" class:has-value=has_value on:click=open>
                            <span class="ss-display-text">{display_text}</span>
                            <Show when=move || clearable && has_value>
                                <button type="button" class="ss-clear" on:click=on_clear title="Golește">
                                    "\u{2715}"
                                </button>
                            </Show>
                            <span class="ss-chevron">"\u{25BE}"</span>
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                if !is_open.get() {
                    return view! { <div style="display:none"></div> }.into_any();
                }

                let (groups, count) = group_options(options.get(), &search_text.get());

                if count == 0 {
                    return view! {
                        <div class="ss-dropdown">
                            <div class="ss-empty">"Niciun rezultat"</div>
                        </div>
                    }.into_any();
                }

                let group_views: Vec<_> = groups.into_iter().map(|(group_name, items)| {
                    let item_views: Vec<_> = items.into_iter().map(|opt| {
                        let val = opt.value.clone();
                        let is_selected = value.get() == val;
                        let selected_class = if is_selected { "ss-option selected" } else { "ss-option" };
                        view! {
                            <div
                                class={selected_class}
                                on:mousedown=move |_| on_select_option(val.clone())
                            >
                                {opt.label}
                            </div>
                        }
                    }).collect();

                    let has_label = !group_name.is_empty();
                    view! {
                        <div class="ss-group">
                            <Show when=move || has_label>
                                <div class="ss-group-label">{group_name.clone()}</div>
                            </Show>
                            {item_views}
                        </div>
                    }
                }).collect();

                let count_label = format!("{} {}", count, if count == 1 { "rezultat" } else { "rezultate" });

                view! {
                    <div class="ss-dropdown" id={dropdown_id.clone()}>
                        <div class="ss-options">
                            {group_views}
                            <div class="ss-count">{count_label}</div>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str, label: &str, group: &str) -> SelectOption {
        SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            group: group.to_string(),
            linked: None,
        }
    }

    #[test]
    fn test_group_options_preserves_first_seen_order() {
        let all = vec![
            opt("1", "Scratch Junior", "Programare"),
            opt("2", "Lego Spike", "Robotica"),
            opt("3", "Python", "Programare"),
        ];
        let (groups, total) = group_options(all, "");
        assert_eq!(total, 3);
        assert_eq!(groups[0].0, "Programare");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Robotica");
    }

    struct Counted(std::rc::Rc<std::cell::Cell<u32>>);

    impl Listener for Counted {
        fn detach(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_reopening_detaches_previous_listener() {
        let detached = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut slot = None;
        for _ in 0..3 {
            replace_listener(&mut slot, Some(Counted(detached.clone())));
        }
        assert_eq!(detached.get(), 2);
        assert!(slot.is_some());

        replace_listener(&mut slot, None);
        assert_eq!(detached.get(), 3);
        assert!(slot.is_none());

        replace_listener::<Counted>(&mut slot, None);
        assert_eq!(detached.get(), 3);
    }

    #[test]
    fn test_group_options_filters_case_insensitive() {
        let all = vec![opt("1", "Scratch Junior", ""), opt("2", "Lego Spike", "")];
        let (groups, total) = group_options(all, "LEGO");
        assert_eq!(total, 1);
        assert_eq!(groups[0].1[0].value, "2");
    }
}
