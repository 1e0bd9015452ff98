// ============================================================================
// CATALOG API - Operations the view-models need from the remote service
// ============================================================================
// ApiClient is the HTTP implementation; tests plug an in-memory catalog in.
// ============================================================================

use crate::error::AdminError;
use crate::models::auth::{Credentials, SessionToken};
use crate::models::product::{Product, ProductPayload};

/// Which endpoint a product save goes to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpsertMode {
    /// `POST .../admin/product`
    Create,
    /// `PUT .../admin/product/{id}`
    Edit,
}

#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// Send `token` as the `Authorization` header on every later call
    fn attach_token(&self, token: &str);

    /// Exchange credentials for a token. Does not attach it.
    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken, AdminError>;

    /// Validate the attached token
    async fn check_session(&self) -> Result<(), AdminError>;

    async fn list_products(&self) -> Result<Vec<Product>, AdminError>;

    /// Create, or update the product whose id is `payload.id`
    async fn upsert_product(&self, mode: UpsertMode, payload: &ProductPayload) -> Result<(), AdminError>;

    async fn delete_product(&self, id: &str) -> Result<(), AdminError>;
}
