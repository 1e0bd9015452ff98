// ============================================================================
// DOM MODULE - Plain web-sys helpers used by the views
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
