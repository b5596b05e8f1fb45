use leptos::prelude::*;

/// Dashboard KPI tile.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: &'static str,
    /// Accent colour class suffix, e.g. "blue"
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card stat-{}", accent)>
            <p class="stat-title">{title}</p>
            <p class="stat-value">{move || value.get()}</p>
            <p class="stat-hint">{hint}</p>
        </div>
    }
}
