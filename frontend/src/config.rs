use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub auth_portal_url: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset fields from `fallback`. Blank values count as unset.
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_blank(self.api_base_url).or(non_blank(fallback.api_base_url)),
            auth_portal_url: non_blank(self.auth_portal_url)
                .or(non_blank(fallback.auth_portal_url)),
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_string(obj: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

// Optional global object: window.__STOREADMIN_ENV = { API_BASE_URL: "...", AUTH_PORTAL_URL: "..." }
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    let Some(window) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let Ok(env) = js_sys::Reflect::get(&window, &"__STOREADMIN_ENV".into()) else {
        return RuntimeConfig::default();
    };
    if env.is_undefined() || env.is_null() {
        return RuntimeConfig::default();
    }
    RuntimeConfig {
        api_base_url: read_global_string(&env, &["API_BASE_URL", "api_base_url"]),
        auth_portal_url: read_global_string(&env, &["AUTH_PORTAL_URL", "auth_portal_url"]),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json unavailable (status {})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Globals win over `config.json`; the first resolution is cached for the
/// lifetime of the page.
pub async fn runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    let resolved = if globals.api_base_url.is_some() && globals.auth_portal_url.is_some() {
        globals
    } else {
        globals.or(fetch_runtime_config().await.unwrap_or_default())
    };
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    runtime_config().await.api_base_url().to_string()
}

pub async fn init() {
    let cfg = runtime_config().await;
    log::info!(
        "Runtime config initialized (api_base_url={}, auth_portal={})",
        cfg.api_base_url(),
        cfg.auth_portal_url.is_some()
    );
}
