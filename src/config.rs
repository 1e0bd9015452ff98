// ============================================================================
// CONFIG - Compile-time configuration
// ============================================================================
// Values come from option_env! (see build.rs and .env.example)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://ec-course-api.hexschool.io/v2";
const DEFAULT_API_PATH: &str = "tiffany871205";
const DEFAULT_TOKEN_COOKIE: &str = "hexToken";
const DEFAULT_MAX_IMAGE_SLOTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the catalog API, without trailing slash
    pub api_base: String,
    /// Account-scoped path segment used by the product endpoints
    pub api_path: String,
    /// Name of the cookie holding the session token
    pub token_cookie: String,
    pub log_level: String,
    /// Upper bound on secondary image slots in the product dialog
    pub max_image_slots: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_string(),
            log_level: "info".to_string(),
            max_image_slots: DEFAULT_MAX_IMAGE_SLOTS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: option_env!("CATALOG_API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            api_path: option_env!("CATALOG_API_PATH")
                .map(|s| s.trim_matches('/').to_string())
                .unwrap_or(defaults.api_path),
            token_cookie: option_env!("CATALOG_TOKEN_COOKIE")
                .map(str::to_string)
                .unwrap_or(defaults.token_cookie),
            log_level: option_env!("CATALOG_LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            max_image_slots: option_env!("CATALOG_MAX_IMAGE_SLOTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_image_slots),
        }
    }

    /// Level handed to wasm_logger, falling back to Info on unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// `{api_base}/api/{api_path}/admin` - prefix of every product endpoint
    pub fn admin_url(&self) -> String {
        format!("{}/api/{}/admin", self.api_base, self.api_path)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
