//! Backend address resolution.
//!
//! Precedence: `window.__EDUCRM_CONFIG__.api_base` (set by `index.html`),
//! then `EDUCRM_API_BASE` at compile time, then the local default.

use std::sync::OnceLock;

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const RUNTIME_CONFIG_KEY: &str = "__EDUCRM_CONFIG__";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
struct RuntimeConfig {
    #[serde(default)]
    api_base: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: &str) -> Self {
        let trimmed = api_base.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base }
    }

    fn resolve(runtime: Option<String>, compiled: Option<&str>) -> Self {
        let chosen = runtime
            .filter(|s| !s.trim().is_empty())
            .or_else(|| compiled.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(&chosen)
    }

    /// Join a path like `/grupe/` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

fn read_runtime_config() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<RuntimeConfig>(raw) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", RUNTIME_CONFIG_KEY, e);
            None
        }
    }
}

/// Resolve the configuration once and log where it came from.
pub fn init() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let runtime = if cfg!(target_arch = "wasm32") {
            read_runtime_config().and_then(|c| c.api_base)
        } else {
            None
        };
        let cfg = AppConfig::resolve(runtime, option_env!("EDUCRM_API_BASE"));
        log::info!("Using API base {}", cfg.api_base);
        cfg
    })
}

pub fn get() -> &'static AppConfig {
    init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = AppConfig::new("http://crm.local:8000/");
        assert_eq!(cfg.api_base, "http://crm.local:8000");
        assert_eq!(cfg.endpoint("/grupe/"), "http://crm.local:8000/grupe/");
        assert_eq!(cfg.endpoint("catalog/7"), "http://crm.local:8000/catalog/7");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(AppConfig::new("  ").api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_runtime_beats_compiled() {
        let cfg = AppConfig::resolve(Some("http://a:1".to_string()), Some("http://b:2"));
        assert_eq!(cfg.api_base, "http://a:1");

        let cfg = AppConfig::resolve(Some(String::new()), Some("http://b:2"));
        assert_eq!(cfg.api_base, "http://b:2");

        let cfg = AppConfig::resolve(None, None);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }
}
