// ============================================================================
// ERRORS - One variant per failing operation
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    /// Bad credentials, or the attached token was rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("could not load products: {0}")]
    Fetch(String),

    #[error("could not save product: {0}")]
    Upsert(String),

    #[error("could not delete product: {0}")]
    Delete(String),

    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A numeric draft field whose text does not coerce to a number
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("cookie storage unavailable: {0}")]
    Storage(String),

    #[error("render error: {0}")]
    Dom(String),
}

impl AdminError {
    /// Short label for the notification banner
    pub fn title(&self) -> &'static str {
        match self {
            Self::Auth(_) => "Sign-in failed",
            Self::Fetch(_) => "Loading products failed",
            Self::Upsert(_) | Self::InvalidNumber { .. } => "Saving product failed",
            Self::Delete(_) => "Deleting product failed",
            Self::Network(_) => "Network error",
            Self::Decode(_) => "Unexpected server response",
            Self::Storage(_) => "Session storage error",
            Self::Dom(_) => "Display error",
        }
    }

    /// True when the server answered and refused the token
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<JsValue> for AdminError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AdminError> for JsValue {
    fn from(error: AdminError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
