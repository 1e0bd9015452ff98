// ============================================================================
// COOKIE SERVICE - Persists the session token in document.cookie
// ============================================================================

use chrono::{DateTime, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::CONFIG;
use crate::error::AdminError;
use crate::models::auth::SessionToken;

/// Where the session token survives page reloads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &SessionToken) -> Result<(), AdminError>;
    fn clear(&self) -> Result<(), AdminError>;
}

/// `TokenStore` over a single browser cookie
#[derive(Clone, Debug)]
pub struct CookieTokenStore {
    name: String,
}

impl CookieTokenStore {
    pub fn new() -> Self {
        Self::named(&CONFIG.token_cookie)
    }

    pub fn named(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    fn document() -> Result<HtmlDocument, AdminError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| AdminError::Storage("no HTML document".to_string()))
    }

    fn write(&self, cookie: &str) -> Result<(), AdminError> {
        Self::document()?
            .set_cookie(cookie)
            .map_err(|e| AdminError::Storage(format!("{:?}", e)))
    }
}

impl Default for CookieTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        find_cookie(&cookies, &self.name)
    }

    fn save(&self, token: &SessionToken) -> Result<(), AdminError> {
        log::info!("🍪 [COOKIE] Saving token (expires {})", token.expires_at);
        self.write(&format_cookie(&self.name, &token.token, token.expires_at))
    }

    fn clear(&self) -> Result<(), AdminError> {
        log::info!("🍪 [COOKIE] Clearing token");
        self.write(&format_cookie(&self.name, "", DateTime::<Utc>::from(std::time::UNIX_EPOCH)))
    }
}

/// Value of cookie `name` in a `document.cookie` string; empty values count as absent
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// `name=value; expires=<IMF date>; path=/`
pub fn format_cookie(name: &str, value: &str, expires_at: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}
