use leptos::prelude::*;
use leptos_router::components::A;

/// Sidebar entries as `(section, [(path, label)])`.
pub const NAV_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("", &[("/", "Dashboard")]),
    (
        "CRM & Vânzări",
        &[("/parteneri", "Parteneri"), ("/leaduri", "Leaduri"), ("/contracte", "Contracte")],
    ),
    (
        "Academic",
        &[
            ("/profesori", "Profesori"),
            ("/cursuri", "Cursuri"),
            ("/elevi", "Elevi"),
            ("/grupe", "Grupe"),
        ],
    ),
    (
        "Operațional",
        &[
            ("/sesiuni", "Sesiuni"),
            ("/financiar", "Financiar"),
            ("/inscrieri", "Înscrieri"),
            ("/catalog", "Catalog"),
            ("/inventar", "Inventar"),
        ],
    ),
    ("Sistem", &[("/setari", "Setări")]),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let sections = NAV_SECTIONS
        .iter()
        .map(|(title, links)| {
            let items = links
                .iter()
                .map(|(href, label)| {
                    view! {
                        <li class="nav-item">
                            <A href=*href attr:class="nav-link" exact=true>{*label}</A>
                        </li>
                    }
                })
                .collect_view();
            let has_title = !title.is_empty();
            view! {
                <Show when=move || has_title>
                    <p class="nav-section">{*title}</p>
                </Show>
                <ul class="nav-list">{items}</ul>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"EduCRM"</h1>
                <p class="sidebar-subtitle">"Administrare educațională"</p>
            </div>
            {sections}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_listed_once() {
        let paths: Vec<&str> = NAV_SECTIONS
            .iter()
            .flat_map(|(_, links)| links.iter().map(|(p, _)| *p))
            .collect();
        assert_eq!(paths.len(), 14);
        let mut unique = paths.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), paths.len());
    }
}
