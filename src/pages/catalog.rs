use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::catalog::{apply_patch, toggled_rating, AttendanceSummary, MarkPatch, MarkRequest, STAR_RATING};
use crate::components::note_dialog::NoteDialog;
use crate::components::searchable_select::SearchableSelect;
use crate::derive::{avatar_class, date_part, initials};
use crate::lookup::{find, resolve_name, to_options};
use crate::models::{CatalogEntry, Collection, Group, Session};
use crate::resource::ListResource;

#[derive(Debug, Clone, PartialEq)]
struct NoteTarget {
    inscriere_id: i64,
    student: String,
    note: String,
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let sessions = ListResource::<Session>::load(Collection::Sessions);
    let groups = ListResource::<Group>::load(Collection::Groups);
    let (selected, set_selected) = signal(String::new());
    let entries = RwSignal::new(Vec::<CatalogEntry>::new());
    let (loading, set_loading) = signal(false);
    let note_target = RwSignal::new(None::<NoteTarget>);

    let selected_id = move || selected.get().parse::<i64>().ok();

    // Fetch the roster whenever another session is picked
    Effect::new(move |_| {
        let Some(sesiune_id) = selected_id() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::catalog(sesiune_id).await {
                Ok(list) => entries.set(list),
                Err(e) => log::error!("Failed to load catalog for session {}: {}", sesiune_id, e),
            }
            set_loading.set(false);
        });
    });

    // Local list first, server second; failures are only logged.
    let mark = move |inscriere_id: i64, patch: MarkPatch| {
        let Some(sesiune_id) = selected.get_untracked().parse::<i64>().ok() else {
            return;
        };
        entries.update(|list| {
            apply_patch(list, inscriere_id, &patch);
        });
        let request = MarkRequest {
            sesiune_id,
            inscriere_id,
            patch,
        };
        spawn_local(async move {
            if let Err(e) = api::mark_catalog(&request).await {
                log::error!("Catalog update for enrollment {} failed: {}", request.inscriere_id, e);
            }
        });
    };

    let session_options = Signal::derive(move || sessions.items.with(|list| to_options(list)));
    let current_session = move || {
        let id = selected_id()?;
        sessions.items.with(|list| find(list, id).cloned())
    };
    let group_name = move || {
        current_session()
            .map(|s| groups.items.with(|list| resolve_name(list, s.grupa_id, "")))
            .unwrap_or_default()
    };
    let summary = move || entries.with(|list| AttendanceSummary::of(list));

    let student_rows = move || {
        entries
            .get()
            .into_iter()
            .map(|student| {
                let id = student.inscriere_id;
                let present = student.is_prezent;
                let rating = student.rating_profesor;
                let is_star = rating == STAR_RATING;
                let has_note = student.note.as_deref().is_some_and(|n| !n.is_empty());
                let target = NoteTarget {
                    inscriere_id: id,
                    student: student.nume_elev.clone(),
                    note: student.note.clone().unwrap_or_default(),
                };
                view! {
                    <div class="catalog-row" class:present=present>
                        <div class="catalog-student">
                            <div class=avatar_class(student.elev_id)>
                                {initials(&student.nume_elev)}
                                <Show when=move || is_star>
                                    <span class="star-badge">"\u{2605}"</span>
                                </Show>
                            </div>
                            <div>
                                <h3>{student.nume_elev.clone()}</h3>
                                <Show when=move || has_note>
                                    <p class="note-hint">"Are observații salvate"</p>
                                </Show>
                            </div>
                        </div>
                        <div class="catalog-actions">
                            <button
                                class="btn-round"
                                class:active-note=has_note
                                title="Notă"
                                on:click=move |_| note_target.set(Some(target.clone()))
                            >
                                "\u{1F4AC}"
                            </button>
                            <button
                                class="btn-round"
                                class:active-star=is_star
                                title="Star Player"
                                on:click=move |_| mark(id, MarkPatch::rating(toggled_rating(rating)))
                            >
                                "\u{2605}"
                            </button>
                            <span class="divider"></span>
                            <button
                                class="btn-round"
                                class:active-absent=!present
                                title="Absent"
                                on:click=move |_| mark(id, MarkPatch::presence(false))
                            >
                                "\u{2715}"
                            </button>
                            <button
                                class="btn-round"
                                class:active-present=present
                                title="Prezent"
                                on:click=move |_| mark(id, MarkPatch::presence(true))
                            >
                                "\u{2713}"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page catalog-page">
            <div class="page-header">
                <div>
                    <h2>"Catalog Digital"</h2>
                    <p class="page-description">"Gestionează prezența și performanța elevilor."</p>
                </div>
                <div class="session-picker">
                    <SearchableSelect
                        id="catalog-session"
                        placeholder="Alege Ședința..."
                        options=session_options
                        value=Signal::from(selected)
                        on_select=Callback::new(move |v: String| set_selected.set(v))
                    />
                </div>
            </div>

            <Show
                when=move || selected_id().is_some()
                fallback=|| view! { <p class="empty-state">"Selectează o ședință pentru a face prezența."</p> }
            >
                <div class="card catalog-summary">
                    <div>
                        <h3>{group_name}</h3>
                        <p class="cell-muted">
                            {move || current_session().map(|s| date_part(&s.data_ora_start).to_string()).unwrap_or_default()}
                            " · "
                            {move || current_session().and_then(|s| s.sala).filter(|r| !r.is_empty()).unwrap_or_else(|| "Sala ?".to_string())}
                        </p>
                    </div>
                    <div class="attendance">
                        <div>
                            <div class="stat-value">{move || { let s = summary(); format!("{} / {}", s.present, s.total) }}</div>
                            <div class="stat-title">"Prezenți"</div>
                        </div>
                        <div class="attendance-rate">{move || format!("{}%", summary().percentage)}</div>
                    </div>
                </div>

                {move || {
                    if loading.get() {
                        view! { <p class="loading">"Se încarcă..."</p> }.into_any()
                    } else if entries.with(Vec::is_empty) {
                        view! { <p class="empty-state">"Această grupă nu are niciun elev înscris."</p> }.into_any()
                    } else {
                        view! { <div class="catalog-list">{student_rows}</div> }.into_any()
                    }
                }}
            </Show>

            {move || note_target.get().map(|t| {
                let id = t.inscriere_id;
                view! {
                    <NoteDialog
                        student=t.student
                        initial=t.note
                        on_save=Callback::new(move |text: String| mark(id, MarkPatch::note(text)))
                        on_close=Callback::new(move |_| note_target.set(None))
                    />
                }
            })}
        </div>
    }
}
