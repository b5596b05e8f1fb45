use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::stat_card::StatCard;
use crate::derive::{duration_hours, time_part};
use crate::models::{DashboardStats, Session};

/// Today's sessions ordered by start time.
pub fn schedule(mut sessions: Vec<Session>) -> Vec<Session> {
    sessions.sort_by(|a, b| a.data_ora_start.cmp(&b.data_ora_start));
    sessions
}

fn session_hours(s: &Session) -> f64 {
    s.durata_ore
        .unwrap_or_else(|| duration_hours(&s.data_ora_start, &s.data_ora_end))
}

pub fn scheduled_hours(sessions: &[Session]) -> f64 {
    sessions.iter().map(session_hours).sum()
}

/// Hours to one decimal, without a trailing `.0`.
pub fn format_hours(hours: f64) -> String {
    let text = format!("{:.1}", hours);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::dashboard_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => log::error!("Failed to load dashboard stats: {}", e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h2>"Bună ziua, Director! \u{1F44B}"</h2>
                    <p class="page-description">"Iată situația școlii tale pentru astăzi."</p>
                </div>
                <div class="input-row">
                    <A href="/inscrieri" attr:class="btn btn-primary">"Înscrie Elev"</A>
                    <A href="/financiar" attr:class="btn btn-secondary">"Factură Nouă"</A>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Se încarcă dashboard-ul..."</p> }.into_any();
                }
                let Some(current) = stats.get() else {
                    return view! { <p class="error-text">"Eroare la încărcare date."</p> }.into_any();
                };
                let students = current.total_elevi.to_string();
                let revenue = format!("{} RON", current.venituri_luna);
                let active_groups = current.grupe_active.to_string();
                let new_leads = current.leaduri_noi.to_string();
                let today = schedule(current.sesiuni_azi);
                let hours = scheduled_hours(&today);

                view! {
                    <div class="card-grid stats-grid">
                        <StatCard title="Total Elevi" value=students accent="blue" />
                        <StatCard
                            title="Venituri (Luna curentă)"
                            value=revenue
                            accent="green"
                        />
                        <StatCard title="Grupe Active" value=active_groups accent="purple" />
                        <StatCard title="Lead-uri Noi" value=new_leads accent="orange" />
                    </div>

                    <div class="dashboard-grid">
                        <div class="card schedule-card">
                            <h3>"Orarul Zilei"</h3>
                            <p class="cell-muted">{format!("{} sesiuni \u{2022} {} ore programate", today.len(), format_hours(hours))}</p>
                            {if today.is_empty() {
                                view! {
                                    <p class="empty-state">
                                        "Nu sunt sesiuni programate pentru astăzi. "
                                        <A href="/sesiuni">"Vezi calendarul complet"</A>
                                    </p>
                                }.into_any()
                            } else {
                                today
                                    .into_iter()
                                    .map(|s| {
                                        let topic = s
                                            .tema_lectiei
                                            .clone()
                                            .filter(|t| !t.is_empty())
                                            .unwrap_or_else(|| "Activitate Curs".to_string());
                                        let details = format!(
                                            "Durată: {}h \u{2022} Sala: {}",
                                            format_hours(session_hours(&s)),
                                            s.sala.clone().unwrap_or_default()
                                        );
                                        view! {
                                            <div class="schedule-item">
                                                <div class="schedule-time">
                                                    <span>{time_part(&s.data_ora_start)}</span>
                                                    <span class="cell-muted">"START"</span>
                                                </div>
                                                <div class="schedule-body">
                                                    <h4>{topic}</h4>
                                                    <p class="cell-muted">{details}</p>
                                                </div>
                                                <A href="/catalog" attr:class="btn btn-small">"Catalog \u{2192}"</A>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                            <div class="banner">
                                <strong>"Crește productivitatea!"</strong>
                                <p>"Verifică stocul de materiale înainte de ore."</p>
                                <A href="/inventar" attr:class="btn btn-small">"Verifică Inventar"</A>
                            </div>
                        </div>

                        <div class="side-column">
                            <div class="card">
                                <h3>"Comenzi Rapide"</h3>
                                <A href="/leaduri" attr:class="btn btn-secondary btn-block">"Gestionează Lead-uri"</A>
                                <A href="/grupe" attr:class="btn btn-secondary btn-block">"Vezi Grupele"</A>
                                <A href="/catalog" attr:class="btn btn-secondary btn-block">"Prezență Azi"</A>
                            </div>
                            <div class="card notice">
                                <h4>"\u{26A0}\u{FE0F} Notă importantă"</h4>
                                <p>
                                    "Nu uita să marchezi prezențele la finalul fiecărei zile pentru a genera facturile automat la sfârșitul lunii."
                                </p>
                            </div>
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

    fn session(id: i64, start: &str, end: &str, hours: Option<f64>) -> Session {
        Session {
            id,
            grupa_id: 1,
            profesor_id: 1,
            data_ora_start: start.to_string(),
            data_ora_end: end.to_string(),
            sala: None,
            tema_lectiei: None,
            status_sesiune: "planificata".to_string(),
            durata_ore: hours,
            note: None,
        }
    }

    #[test]
    fn test_schedule_sorted_by_start() {
        let list = vec![
            session(1, "2026-01-20T16:00:00", "2026-01-20T17:00:00", None),
            session(2, "2026-01-20T09:00:00", "2026-01-20T10:30:00", None),
        ];
        let sorted = schedule(list);
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 1);
    }

    #[test]
    fn test_scheduled_hours_prefers_stored_duration() {
        let list = vec![
            session(1, "2026-01-20T16:00:00", "2026-01-20T17:00:00", Some(2.0)),
            session(2, "2026-01-20T09:00:00", "2026-01-20T10:30:00", None),
        ];
        assert_eq!(scheduled_hours(&list), 3.5);
        assert_eq!(scheduled_hours(&[]), 0.0);
    }

    #[test]
    fn test_hours_are_rounded_for_display() {
        let list = vec![
            session(1, "2026-01-20T09:00:00", "2026-01-20T10:00:00", Some(1.1)),
            session(2, "2026-01-20T11:00:00", "2026-01-20T13:00:00", Some(2.2)),
        ];
        assert_eq!(format_hours(scheduled_hours(&list)), "3.3");
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(0.0), "0");
    }
}
