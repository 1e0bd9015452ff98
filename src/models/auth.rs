use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /admin/signin`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful sign-in answer. `expired` is milliseconds since the Unix epoch.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub expired: i64,
}

impl SignInResponse {
    pub fn into_session_token(self) -> SessionToken {
        let expires_at = Utc
            .timestamp_millis_opt(self.expired)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        SessionToken {
            token: self.token,
            expires_at,
        }
    }
}

/// Token plus the expiry the server assigned to it
#[derive(Clone, PartialEq, Debug)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Error body shape shared by every endpoint.
/// `message` is a string on most endpoints and a list on validation failures.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ApiMessage {
    pub fn text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
