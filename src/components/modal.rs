use leptos::prelude::*;

/// Overlay dialog shell. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Wider content box for multi-column forms.
    #[prop(optional)]
    wide: bool,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" class:modal-wide=wide on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
