//! Records mirrored from the backend JSON. Field names match the wire format.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lookup::Record;

/// A REST collection served under a fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Partners,
    Leads,
    Contracts,
    Teachers,
    Courses,
    Students,
    Groups,
    Sessions,
    Enrollments,
    Invoices,
    Products,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Partners => "/parteneri/",
            Collection::Leads => "/leaduri/",
            Collection::Contracts => "/contracte/",
            Collection::Teachers => "/profesori/",
            Collection::Courses => "/cursuri/",
            Collection::Students => "/elevi/",
            Collection::Groups => "/grupe/",
            Collection::Sessions => "/sesiuni/",
            Collection::Enrollments => "/inscrieri/",
            Collection::Invoices => "/facturi/",
            Collection::Products => "/produse/",
        }
    }

    pub fn item_path(self, id: i64) -> String {
        format!("{}{}", self.path(), id)
    }
}

/// Reads `null` as the type's default. Nullable numeric columns land here.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// -- CRM & sales --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub nume: String,
    pub tip: String,
    #[serde(default)]
    pub oras: Option<String>,
    #[serde(default)]
    pub adresa_completa: Option<String>,
    #[serde(default)]
    pub cui_fiscal: Option<String>,
    #[serde(default)]
    pub persoana_contact: Option<String>,
    #[serde(default)]
    pub telefon: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_partner_status")]
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_partner_status() -> String {
    "potential".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    #[serde(default)]
    pub nume_contact: Option<String>,
    #[serde(default)]
    pub telefon_contact: Option<String>,
    #[serde(default)]
    pub email_contact: Option<String>,
    #[serde(default = "default_lead_status")]
    pub status: String,
    #[serde(default)]
    pub sursa_lead: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub partener_id: Option<i64>,
}

fn default_lead_status() -> String {
    "nou".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub nume_contract: String,
    pub valoare: f64,
    pub data_semnarii: String,
    #[serde(default)]
    pub data_start: Option<String>,
    #[serde(default)]
    pub data_expirare: Option<String>,
    pub status: String,
    #[serde(default)]
    pub mod_calcul_pret: Option<String>,
    #[serde(default)]
    pub moneda: Option<String>,
    pub partener_id: i64,
    #[serde(default)]
    pub lead_id: Option<i64>,
}

// -- HR & academic --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub nume_complet: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefon: Option<String>,
    pub tip_contract: String,
    #[serde(default)]
    pub tarif_orar_default: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub data_start: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub nume_curs: String,
    #[serde(default)]
    pub categorie: Option<String>,
    #[serde(default)]
    pub nivel_dificultate: Option<String>,
    #[serde(default)]
    pub varsta_min: Option<i32>,
    #[serde(default)]
    pub varsta_max: Option<i32>,
    #[serde(default)]
    pub programa_link: Option<String>,
    #[serde(default)]
    pub descriere: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub nume_complet: String,
    #[serde(default)]
    pub data_nasterii: Option<String>,
    #[serde(default)]
    pub scoala_curenta: Option<String>,
    #[serde(default)]
    pub nume_parinte: Option<String>,
    #[serde(default)]
    pub telefon_parinte: Option<String>,
    #[serde(default)]
    pub email_parinte: Option<String>,
    #[serde(default)]
    pub gdpr_accepted: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub nume_grupa: String,
    #[serde(default)]
    pub contract_id: Option<i64>,
    pub curs_id: i64,
    pub profesor_titular_id: i64,
    #[serde(default)]
    pub max_copii: Option<i32>,
    #[serde(default)]
    pub data_inceput: Option<String>,
    #[serde(default)]
    pub data_sfarsit: Option<String>,
    pub status_grupa: String,
    pub tip_plata_grupa: String,
    #[serde(default)]
    pub note: Option<String>,
}

// -- Operations --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub grupa_id: i64,
    pub profesor_id: i64,
    pub data_ora_start: String,
    pub data_ora_end: String,
    #[serde(default)]
    pub sala: Option<String>,
    #[serde(default)]
    pub tema_lectiei: Option<String>,
    pub status_sesiune: String,
    #[serde(default)]
    pub durata_ore: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub elev_id: i64,
    pub grupa_id: i64,
    pub data_inscriere: String,
    pub status_inscriere: String,
    #[serde(default)]
    pub tip_plata: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reducere_percent: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// One enrolled student's attendance row for a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub inscriere_id: i64,
    pub elev_id: i64,
    pub nume_elev: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_prezent: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_profesor: i32,
    #[serde(default)]
    pub note: Option<String>,
}

// -- Finance & inventory --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub serie_numar: String,
    pub client_nume: String,
    pub data_emitere: String,
    pub data_scadenta: String,
    pub total_plata: f64,
    #[serde(default = "default_currency")]
    pub moneda: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_currency() -> String {
    "RON".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nume_produs: String,
    #[serde(default)]
    pub cod_sku: Option<String>,
    pub categorie: String,
    pub unitate_masura: String,
    #[serde(default)]
    pub stoc_curent: i64,
    #[serde(default)]
    pub cost_unitar_mediu: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockMovement {
    pub produs_id: i64,
    pub tip: String,
    pub cantitate: i64,
    pub note: String,
}

/// Stock movement kinds; the first two add to stock.
pub const MOVEMENT_TYPES: &[(&str, &str)] = &[
    ("achizitie_in", "Achiziție (Intrare)"),
    ("retur_defect", "Retur (Intrare)"),
    ("consum_out", "Consum / Vânzare (Ieșire)"),
    ("transfer_profesor", "Transfer la Profesor (Ieșire)"),
];

pub fn is_inbound_movement(tip: &str) -> bool {
    matches!(tip, "achizitie_in" | "retur_defect")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub nume_institutiei: String,
    #[serde(default)]
    pub adresa_fizica: Option<String>,
    #[serde(default)]
    pub email_contact: Option<String>,
    #[serde(default)]
    pub telefon_contact: Option<String>,
    #[serde(default)]
    pub an_scolar_curent: String,
    #[serde(default)]
    pub nume_legala_firma: Option<String>,
    #[serde(default)]
    pub cui: Option<String>,
    #[serde(default)]
    pub reg_com: Option<String>,
    #[serde(default)]
    pub banca: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub serie_facturi: String,
    #[serde(default)]
    pub numar_curent_factura: i64,
    #[serde(default)]
    pub moneda_default: String,
    #[serde(default)]
    pub tva_percent: f64,
}

/// Blank form state before the stored settings arrive.
impl Default for Settings {
    fn default() -> Self {
        Self {
            id: 0,
            nume_institutiei: String::new(),
            adresa_fizica: None,
            email_contact: None,
            telefon_contact: None,
            an_scolar_curent: String::new(),
            nume_legala_firma: None,
            cui: None,
            reg_com: None,
            banca: None,
            iban: None,
            serie_facturi: String::new(),
            numar_curent_factura: 1,
            moneda_default: "RON".to_string(),
            tva_percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_elevi: i64,
    #[serde(default)]
    pub venituri_luna: f64,
    #[serde(default)]
    pub grupe_active: i64,
    #[serde(default)]
    pub leaduri_noi: i64,
    #[serde(default)]
    pub sesiuni_azi: Vec<Session>,
}

// -- Calendar integration --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarStatus {
    #[serde(default)]
    pub is_connected: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarLogin {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// -- Reference labels --

impl Record for Partner {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume.clone()
    }
    fn group(&self) -> String {
        self.oras.clone().unwrap_or_default()
    }
}

impl Record for Lead {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_contact.clone().unwrap_or_else(|| format!("Lead #{}", self.id))
    }
}

impl Record for Contract {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_contract.clone()
    }
}

impl Record for Teacher {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_complet.clone()
    }
}

impl Record for Course {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_curs.clone()
    }
    fn group(&self) -> String {
        self.categorie.clone().unwrap_or_default()
    }
}

impl Record for Student {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_complet.clone()
    }
}

impl Record for Group {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_grupa.clone()
    }
    fn linked(&self) -> Option<i64> {
        Some(self.profesor_titular_id)
    }
}

impl Record for Session {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        let day = self.data_ora_start.split('T').next().unwrap_or_default();
        let topic = self
            .tema_lectiei
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Fără Temă");
        format!("{} - {}", day, topic)
    }
}

impl Record for Enrollment {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        format!("Înscriere #{}", self.id)
    }
}

impl Record for Invoice {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.serie_numar.clone()
    }
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }
    fn label(&self) -> String {
        self.nume_produs.clone()
    }
    fn group(&self) -> String {
        self.categorie.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_nullable_fields() {
        let json = r#"{
            "id": 3,
            "nume_grupa": "Robotică - Marți",
            "contract_id": null,
            "curs_id": 2,
            "profesor_titular_id": 5,
            "max_copii": 10,
            "data_inceput": null,
            "status_grupa": "activa",
            "tip_plata_grupa": "plateste_parintii"
        }"#;
        let g: Group = serde_json::from_str(json).unwrap();
        assert_eq!(g.contract_id, None);
        assert_eq!(g.data_sfarsit, None);
        assert_eq!(g.linked(), Some(5));
    }

    #[test]
    fn test_catalog_entry_defaults() {
        let json = r#"{"inscriere_id": 11, "elev_id": 4, "nume_elev": "Ana Pop"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_prezent);
        assert_eq!(entry.rating_profesor, 0);
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_catalog_entry_null_rating_and_presence() {
        let json = r#"[{"inscriere_id": 11, "elev_id": 4, "nume_elev": "Ana Pop",
            "is_prezent": null, "rating_profesor": null, "note": null}]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].rating_profesor, 0);
        assert!(!entries[0].is_prezent);
    }

    #[test]
    fn test_enrollment_null_discount() {
        let json = r#"[{"id": 1, "elev_id": 7, "grupa_id": 2, "data_inscriere": "2025-09-01",
            "status_inscriere": "activ", "tip_plata": null, "reducere_percent": null, "note": null}]"#;
        let list: Vec<Enrollment> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].reducere_percent, 0.0);
    }

    #[test]
    fn test_settings_default_currency_and_counter() {
        let s = Settings::default();
        assert_eq!(s.moneda_default, "RON");
        assert_eq!(s.numar_curent_factura, 1);
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Groups.path(), "/grupe/");
        assert_eq!(Collection::Enrollments.item_path(12), "/inscrieri/12");
        assert_eq!(Collection::Products.item_path(1), "/produse/1");
    }

    #[test]
    fn test_session_label_without_topic() {
        let s = Session {
            id: 1,
            grupa_id: 1,
            profesor_id: 1,
            data_ora_start: "2026-01-20T14:00:00".to_string(),
            data_ora_end: "2026-01-20T16:00:00".to_string(),
            sala: None,
            tema_lectiei: Some(String::new()),
            status_sesiune: "planificata".to_string(),
            durata_ore: Some(2.0),
            note: None,
        };
        assert_eq!(s.label(), "2026-01-20 - Fără Temă");
    }

    #[test]
    fn test_inbound_movements() {
        assert!(is_inbound_movement("achizitie_in"));
        assert!(is_inbound_movement("retur_defect"));
        assert!(!is_inbound_movement("consum_out"));
        assert!(!is_inbound_movement("transfer_profesor"));
    }

    #[test]
    fn test_settings_tolerates_nulls() {
        let json = r#"{"id": 1, "nume_institutiei": "EduHub", "adresa_fizica": null,
            "an_scolar_curent": "2025-2026", "serie_facturi": "EDU",
            "numar_curent_factura": 14, "moneda_default": "RON", "tva_percent": 0}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.numar_curent_factura, 14);
        assert!(s.adresa_fizica.is_none());
        assert!(s.iban.is_none());
    }
}
