// ============================================================================
// API CLIENT - HTTP only (gloo-net)
// ============================================================================
// No business logic: builds requests, maps statuses to AdminError
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::{AppConfig, CONFIG};
use crate::error::AdminError;
use crate::models::auth::{ApiMessage, Credentials, SessionToken, SignInResponse};
use crate::models::product::{DataEnvelope, Product, ProductPayload, ProductsResponse};
use crate::services::catalog_api::{CatalogApi, UpsertMode};

/// Catalog API client. Clones share the attached token.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    admin_url: String,
    token: Rc<RefCell<Option<String>>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base.clone(),
            admin_url: config.admin_url(),
            token: Rc::new(RefCell::new(None)),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.borrow().as_deref() {
            Some(token) => builder.header("Authorization", token),
            None => builder,
        }
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/product/{}", self.admin_url, id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogApi for ApiClient {
    fn attach_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken, AdminError> {
        let url = format!("{}/admin/signin", self.base_url);
        log::info!("🔐 [API] POST {} (user: {})", url, credentials.username);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| AdminError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        let response = ensure_ok(response, AdminError::Auth).await?;
        let body = response.text().await.map_err(|e| AdminError::Decode(e.to_string()))?;
        parse_sign_in(&body)
    }

    async fn check_session(&self) -> Result<(), AdminError> {
        let url = format!("{}/api/user/check", self.base_url);
        if self.token.borrow().is_none() {
            return Err(AdminError::Auth("no token attached".to_string()));
        }

        let response = self
            .authorized(Request::post(&url))
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        let response = ensure_ok(response, AdminError::Auth).await?;
        // A 200 with success=false still means the token was refused
        let body = response
            .json::<ApiMessage>()
            .await
            .map_err(|e| AdminError::Decode(e.to_string()))?;
        if body.success == Some(false) {
            return Err(AdminError::Auth(body.text().unwrap_or_else(|| "session rejected".to_string())));
        }
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, AdminError> {
        let url = format!("{}/products", self.admin_url);
        log::debug!("📋 [API] GET {}", url);

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        let response = ensure_ok(response, AdminError::Fetch).await?;
        let body = response
            .json::<ProductsResponse>()
            .await
            .map_err(|e| AdminError::Decode(e.to_string()))?;
        Ok(body.products)
    }

    async fn upsert_product(&self, mode: UpsertMode, payload: &ProductPayload) -> Result<(), AdminError> {
        let body = DataEnvelope::new(payload);
        let builder = match mode {
            UpsertMode::Create => Request::post(&format!("{}/product", self.admin_url)),
            UpsertMode::Edit => Request::put(&self.product_url(&payload.id)),
        };
        log::info!("💾 [API] {:?} product '{}'", mode, payload.title);

        let response = self
            .authorized(builder)
            .json(&body)
            .map_err(|e| AdminError::Upsert(e.to_string()))?
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        ensure_ok(response, AdminError::Upsert).await?;
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), AdminError> {
        let url = self.product_url(id);
        log::info!("🗑️ [API] DELETE {}", url);

        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        ensure_ok(response, AdminError::Delete).await?;
        Ok(())
    }
}

/// A 2xx sign-in answer may still be a refusal (`success: false`, no token)
fn parse_sign_in(body: &str) -> Result<SessionToken, AdminError> {
    if let Ok(message) = serde_json::from_str::<ApiMessage>(body) {
        if message.success == Some(false) {
            return Err(AdminError::Auth(message.text().unwrap_or_else(|| "sign-in refused".to_string())));
        }
    }
    serde_json::from_str::<SignInResponse>(body)
        .map(SignInResponse::into_session_token)
        .map_err(|e| AdminError::Decode(e.to_string()))
}

/// Pass 2xx responses through; turn anything else into `wrap(description)`
async fn ensure_ok(response: Response, wrap: fn(String) -> AdminError) -> Result<Response, AdminError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(wrap(describe_failure(status, &status_text, &body)))
}

/// Prefer the server's own message over the bare status line
fn describe_failure(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<ApiMessage>(body).ok().and_then(|m| m.text()) {
        Some(message) => format!("HTTP {}: {}", status, message),
        None if status_text.is_empty() => format!("HTTP {}", status),
        None => format!("HTTP {}: {}", status, status_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_uses_server_message_when_present() {
        let text = describe_failure(400, "Bad Request", r#"{"success":false,"message":"登入失敗"}"#);
        assert_eq!(text, "HTTP 400: 登入失敗");
    }

    #[test]
    fn failure_falls_back_to_status_line() {
        assert_eq!(describe_failure(502, "Bad Gateway", "<html>"), "HTTP 502: Bad Gateway");
        assert_eq!(describe_failure(500, "", ""), "HTTP 500");
    }

    #[test]
    fn refused_sign_in_with_ok_status_is_an_auth_error() {
        let result = parse_sign_in(r#"{"success":false,"message":"登入失敗"}"#);
        assert_eq!(result, Err(AdminError::Auth("登入失敗".to_string())));
    }

    #[test]
    fn sign_in_body_yields_token_and_expiry() {
        let session =
            parse_sign_in(r#"{"success":true,"message":"登入成功","token":"abc","expired":1700000000000}"#).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.expires_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn sign_in_body_without_token_is_a_decode_error() {
        assert!(matches!(parse_sign_in(r#"{"success":true}"#), Err(AdminError::Decode(_))));
    }

    #[test]
    fn product_urls_are_account_scoped() {
        let client = ApiClient::with_config(&AppConfig {
            api_base: "https://api.example.test/v2".into(),
            api_path: "shop".into(),
            ..AppConfig::default()
        });
        assert_eq!(client.product_url("p1"), "https://api.example.test/v2/api/shop/admin/product/p1");
    }

    #[test]
    fn clones_share_attached_token() {
        let client = ApiClient::with_config(&AppConfig::default());
        let clone = client.clone();
        client.attach_token("abc");
        assert_eq!(clone.token.borrow().as_deref(), Some("abc"));
    }
}
