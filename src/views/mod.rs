// ============================================================================
// VIEWS - Functions that build DOM from state (no business logic)
// ============================================================================

pub mod app;
pub mod login;
pub mod notice;
pub mod product_modal;
pub mod product_table;

pub use app::render_app;
pub use login::render_login;
pub use notice::render_notice;
pub use product_modal::render_product_modal;
pub use product_table::render_product_table;

use crate::services::{ApiClient, CookieTokenStore};
use crate::viewmodels::AdminViewModel;

/// The view-model as wired in the browser
pub type PanelViewModel = AdminViewModel<ApiClient, CookieTokenStore>;
