use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::derive::today;
use crate::download::{backup_file_name, save_xlsx};
use crate::models::Settings;
use crate::notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Finance,
    System,
}

type Getter = fn(&Settings) -> String;
type Setter = fn(&mut Settings, String);

fn setting_input(
    label: &'static str,
    input_type: &'static str,
    settings: RwSignal<Settings>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                class="input"
                prop:value=move || settings.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    settings.update(|s| set(s, value));
                }
            />
        </div>
    }
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (tab, set_tab) = signal(SettingsTab::General);
    let settings = RwSignal::new(Settings::default());
    let (saving, set_saving) = signal(false);
    let (calendar_connected, set_calendar_connected) = signal(false);
    let (syncing, set_syncing) = signal(false);

    // Load settings and calendar status on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_settings().await {
                Ok(loaded) => settings.set(loaded),
                Err(e) => log::error!("Failed to load settings: {}", e),
            }
        });
        spawn_local(async move {
            match api::google_status().await {
                Ok(status) => set_calendar_connected.set(status.is_connected),
                Err(e) => log::error!("Failed to read calendar status: {}", e),
            }
        });
    });

    let save = move |_| {
        let current = settings.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match api::save_settings(&current).await {
                Ok(()) => notify::alert("Setări salvate cu succes! \u{2705}"),
                Err(e) => {
                    log::error!("Failed to save settings: {}", e);
                    notify::alert("Eroare la salvare \u{274C}");
                }
            }
            set_saving.set(false);
        });
    };

    let backup = move |_| {
        spawn_local(async move {
            let result = match api::download_backup().await {
                Ok(bytes) => save_xlsx(&bytes, &backup_file_name(today())),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("Backup download failed: {}", e);
                notify::alert("Nu s-a putut descărca fișierul Excel.");
            }
        });
    };

    let connect = move |_| {
        spawn_local(async move {
            match api::google_login_url().await {
                Ok(login) => match login.url {
                    Some(url) if !url.is_empty() => notify::navigate_to(&url),
                    _ => log::warn!("Calendar login returned no URL"),
                },
                Err(e) => log::error!("Calendar login failed: {}", e),
            }
        });
    };

    let sync = move |_| {
        set_syncing.set(true);
        spawn_local(async move {
            match api::google_sync().await {
                Ok(outcome) if outcome.success => notify::alert(&format!("\u{2705} {}", outcome.message)),
                Ok(outcome) => notify::alert(&format!("\u{26A0}\u{FE0F} {}", outcome.message)),
                Err(e) => {
                    log::error!("Calendar sync failed: {}", e);
                    notify::alert("\u{274C} Eroare de conexiune cu serverul.");
                }
            }
            set_syncing.set(false);
        });
    };

    let disconnect = move |_| {
        if !notify::confirm("Ești sigur? Sincronizarea automată se va opri.") {
            return;
        }
        set_calendar_connected.set(false);
        spawn_local(async move {
            match api::google_disconnect().await {
                Ok(()) => notify::alert("Te-ai deconectat de la Google Calendar."),
                Err(e) => log::error!("Calendar disconnect failed: {}", e),
            }
        });
    };

    let tab_button = move |which: SettingsTab, label: &'static str| {
        view! {
            <button class="tab" class:active=move || tab.get() == which on:click=move |_| set_tab.set(which)>
                {label}
            </button>
        }
    };

    view! {
        <div class="page settings-page">
            <div class="page-header">
                <div>
                    <h2>"Setări"</h2>
                    <p class="page-description">"Configurează instituția, facturarea și integrările."</p>
                </div>
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "Se salvează..." } else { "Salvează Modificările" }}
                </button>
            </div>

            <div class="tabs">
                {tab_button(SettingsTab::General, "General")}
                {tab_button(SettingsTab::Finance, "Financiar")}
                {tab_button(SettingsTab::System, "Date & Sistem")}
            </div>

            <Show when=move || tab.get() == SettingsTab::General>
                <section class="settings-section">
                    <h3>"Profil Instituție"</h3>
                    <div class="form-grid">
                        {setting_input("Numele Școlii / Hub-ului", "text", settings,
                            |s| s.nume_institutiei.clone(), |s, v| s.nume_institutiei = v)}
                        {setting_input("An Școlar Curent", "text", settings,
                            |s| s.an_scolar_curent.clone(), |s, v| s.an_scolar_curent = v)}
                        {setting_input("Adresă Fizică", "text", settings,
                            |s| optional(&s.adresa_fizica), |s, v| s.adresa_fizica = Some(v))}
                        {setting_input("Email Contact", "email", settings,
                            |s| optional(&s.email_contact), |s, v| s.email_contact = Some(v))}
                        {setting_input("Telefon Contact", "tel", settings,
                            |s| optional(&s.telefon_contact), |s, v| s.telefon_contact = Some(v))}
                    </div>
                </section>
            </Show>

            <Show when=move || tab.get() == SettingsTab::Finance>
                <section class="settings-section">
                    <h3>"Date Facturare"</h3>
                    <div class="form-grid">
                        {setting_input("Nume Firmă (Legal)", "text", settings,
                            |s| optional(&s.nume_legala_firma), |s, v| s.nume_legala_firma = Some(v))}
                        {setting_input("CUI / CIF", "text", settings,
                            |s| optional(&s.cui), |s, v| s.cui = Some(v))}
                        {setting_input("Nr. Reg. Comerțului", "text", settings,
                            |s| optional(&s.reg_com), |s, v| s.reg_com = Some(v))}
                        {setting_input("Banca", "text", settings,
                            |s| optional(&s.banca), |s, v| s.banca = Some(v))}
                        {setting_input("Cont IBAN", "text", settings,
                            |s| optional(&s.iban), |s, v| s.iban = Some(v))}
                        {setting_input("Serie Facturi", "text", settings,
                            |s| s.serie_facturi.clone(), |s, v| s.serie_facturi = v)}
                        {setting_input("Nr. Curent", "number", settings,
                            |s| s.numar_curent_factura.to_string(),
                            |s, v| s.numar_curent_factura = v.trim().parse().unwrap_or(0))}
                        {setting_input("Monedă", "text", settings,
                            |s| s.moneda_default.clone(), |s, v| s.moneda_default = v)}
                        {setting_input("TVA (%)", "number", settings,
                            |s| s.tva_percent.to_string(),
                            |s, v| s.tva_percent = v.trim().parse().unwrap_or(0.0))}
                    </div>
                </section>
            </Show>

            <Show when=move || tab.get() == SettingsTab::System>
                <section class="settings-section">
                    <h3>"Backup & Export"</h3>
                    <p class="section-description">"Descarcă toate datele într-un fișier Excel."</p>
                    <button class="btn btn-secondary" on:click=backup>"Descarcă Backup (.xlsx)"</button>
                </section>

                <section class="settings-section danger-zone">
                    <h3>"Zona Periculoasă"</h3>
                    <p class="section-description">"Resetarea datelor nu este disponibilă din interfață."</p>
                    <button class="btn btn-danger" disabled=true>"Resetează Baza de Date"</button>
                </section>

                <section class="settings-section">
                    <h3>"Google Calendar"</h3>
                    {move || if calendar_connected.get() {
                        view! {
                            <div class="integration-card connected">
                                <p class="status-text">"Conectat \u{2713}"</p>
                                <div class="input-row">
                                    <button class="btn btn-secondary" on:click=sync disabled=move || syncing.get()>
                                        {move || if syncing.get() { "Se sincronizează..." } else { "Sincronizare Forțată" }}
                                    </button>
                                    <button class="btn btn-danger" on:click=disconnect>"Deconectează"</button>
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="integration-card">
                                <p class="status-text">"Neconectat"</p>
                                <button class="btn btn-primary" on:click=connect>"Conectează Google Calendar"</button>
                            </div>
                        }.into_any()
                    }}
                </section>
            </Show>
        </div>
    }
}
