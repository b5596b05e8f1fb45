//! Typed REST helpers for the backend.
//!
//! Every call resolves its URL through [`config::get`] and maps non-2xx
//! answers to [`ApiError::Status`] carrying the response body.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::MarkRequest;
use crate::components::searchable_select::SelectOption;
use crate::config;
use crate::error::ApiError;
use crate::lookup::to_options;
use crate::models::{
    CalendarLogin, CalendarStatus, CatalogEntry, Collection, Contract, Course, DashboardStats,
    Group, Partner, Product, Session, Settings, StockMovement, Student, SyncOutcome, Teacher,
};

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = config::get().endpoint(path);
    log::debug!("GET {}", url);
    let resp = check(Request::get(&url).send().await?).await?;
    Ok(resp.json::<T>().await?)
}

async fn send_json<B: Serialize>(method: &str, path: &str, body: &B) -> Result<Response, ApiError> {
    let url = config::get().endpoint(path);
    log::debug!("{} {}", method, url);
    let builder = match method {
        "PUT" => Request::put(&url),
        _ => Request::post(&url),
    };
    let resp = builder.json(body)?.send().await?;
    check(resp).await
}

// -- Generic collection CRUD --

pub async fn list<T: DeserializeOwned>(collection: Collection) -> Result<Vec<T>, ApiError> {
    get_json(collection.path()).await
}

pub async fn create(collection: Collection, payload: &Map<String, Value>) -> Result<(), ApiError> {
    send_json("POST", collection.path(), payload).await.map(|_| ())
}

pub async fn update(collection: Collection, id: i64, payload: &Map<String, Value>) -> Result<(), ApiError> {
    send_json("PUT", &collection.item_path(id), payload).await.map(|_| ())
}

pub async fn delete(collection: Collection, id: i64) -> Result<(), ApiError> {
    let url = config::get().endpoint(&collection.item_path(id));
    log::debug!("DELETE {}", url);
    check(Request::delete(&url).send().await?).await.map(|_| ())
}

/// Fetch a collection as picker options. Only collections that forms
/// reference are supported; others yield an empty list.
pub async fn reference_options(collection: Collection) -> Result<Vec<SelectOption>, ApiError> {
    let options = match collection {
        Collection::Partners => to_options(&list::<Partner>(collection).await?),
        Collection::Contracts => to_options(&list::<Contract>(collection).await?),
        Collection::Teachers => to_options(&list::<Teacher>(collection).await?),
        Collection::Courses => to_options(&list::<Course>(collection).await?),
        Collection::Students => to_options(&list::<Student>(collection).await?),
        Collection::Groups => to_options(&list::<Group>(collection).await?),
        Collection::Sessions => to_options(&list::<Session>(collection).await?),
        Collection::Products => to_options(&list::<Product>(collection).await?),
        other => {
            log::warn!("No reference options for {:?}", other);
            Vec::new()
        }
    };
    Ok(options)
}

// -- Catalog --

pub async fn catalog(sesiune_id: i64) -> Result<Vec<CatalogEntry>, ApiError> {
    get_json(&format!("/catalog/{}", sesiune_id)).await
}

pub async fn mark_catalog(request: &MarkRequest) -> Result<(), ApiError> {
    send_json("POST", "/catalog/mark", request).await.map(|_| ())
}

// -- Inventory --

pub async fn stock_movement(movement: &StockMovement) -> Result<(), ApiError> {
    send_json("POST", "/inventar/miscare", movement).await.map(|_| ())
}

// -- Settings & system --

pub async fn get_settings() -> Result<Settings, ApiError> {
    get_json("/settings/").await
}

pub async fn save_settings(settings: &Settings) -> Result<(), ApiError> {
    send_json("PUT", "/settings/", settings).await.map(|_| ())
}

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    get_json("/dashboard/stats").await
}

/// Raw bytes of the spreadsheet export.
pub async fn download_backup() -> Result<Vec<u8>, ApiError> {
    let url = config::get().endpoint("/system/backup");
    log::debug!("GET {}", url);
    let resp = check(Request::get(&url).send().await?).await?;
    Ok(resp.binary().await?)
}

// -- Calendar integration --

pub async fn google_status() -> Result<CalendarStatus, ApiError> {
    get_json("/google/status").await
}

pub async fn google_login_url() -> Result<CalendarLogin, ApiError> {
    get_json("/google/login").await
}

pub async fn google_sync() -> Result<SyncOutcome, ApiError> {
    get_json("/google/sync-events").await
}

pub async fn google_disconnect() -> Result<(), ApiError> {
    let url = config::get().endpoint("/google/disconnect");
    log::debug!("DELETE {}", url);
    check(Request::delete(&url).send().await?).await.map(|_| ())
}
