// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + subscribers
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod dialog_state;

pub use app_state::*;
pub use auth_state::*;
pub use dialog_state::*;
