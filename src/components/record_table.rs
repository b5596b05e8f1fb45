use leptos::prelude::*;

/// Title row of a list screen with the record count and an add button.
#[component]
pub fn PageHeader(
    title: &'static str,
    /// Noun after the count, e.g. "parteneri"
    noun: &'static str,
    #[prop(into)] count: Signal<usize>,
    #[prop(optional)] add_label: Option<&'static str>,
    #[prop(optional)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h2>{title}</h2>
                <p class="page-description">{move || format!("{} {}", count.get(), noun)}</p>
            </div>
            {move || match (add_label, on_add) {
                (Some(label), Some(cb)) => view! {
                    <button class="btn btn-primary" on:click=move |_| cb.run(())>{label}</button>
                }.into_any(),
                _ => ().into_any(),
            }}
        </div>
    }
}

/// Table frame shared by every list screen. Rows come from `children`,
/// usually a closure over the loaded list.
#[component]
pub fn RecordTable(
    headers: &'static [&'static str],
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
    /// Last load failure, shown in place of the empty text.
    #[prop(into)]
    error: Signal<Option<String>>,
    empty_text: &'static str,
    children: Children,
) -> impl IntoView {
    let columns = headers.len().to_string();
    let columns_loading = columns.clone();
    let columns_error = columns.clone();
    view! {
        <div class="table-card">
            <table class="record-table">
                <thead>
                    <tr>
                        {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {children()}
                    <Show when=move || loading.get() && empty.get()>
                        <tr class="table-placeholder">
                            <td colspan=columns_loading.clone()>"Se încarcă..."</td>
                        </tr>
                    </Show>
                    <Show when=move || !loading.get() && empty.get() && error.with(Option::is_none)>
                        <tr class="table-placeholder">
                            <td colspan=columns.clone()>{empty_text}</td>
                        </tr>
                    </Show>
                    <Show when=move || !loading.get() && empty.get() && error.with(Option::is_some)>
                        <tr class="table-placeholder">
                            <td colspan=columns_error.clone() class="error-text">
                                {move || format!("Eroare la încărcare: {}", error.get().unwrap_or_default())}
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

/// Edit and delete buttons at the end of a row.
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <td class="row-actions">
            <button class="btn-icon" title="Editează" on:click=move |_| on_edit.run(())>"\u{270E}"</button>
            <button class="btn-icon btn-danger" title="Șterge" on:click=move |_| on_delete.run(())>"\u{1F5D1}"</button>
        </td>
    }
}
