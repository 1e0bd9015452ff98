pub mod api_client;
pub mod catalog_api;
pub mod cookie_service;

pub use api_client::ApiClient;
pub use catalog_api::{CatalogApi, UpsertMode};
pub use cookie_service::{CookieTokenStore, TokenStore};
