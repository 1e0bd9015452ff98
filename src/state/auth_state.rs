// ============================================================================
// AUTH STATE - Session gate phase
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Unauthenticated -> Authenticating -> Authenticated.
/// The only way back is a failed sign-in or a failed revalidation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    /// Checking the token left by an earlier visit. The login form stays usable.
    Revalidating,
    /// A sign-in submitted from the login form is in flight
    Authenticating,
    Authenticated,
}

#[derive(Clone, Default)]
pub struct AuthState {
    pub phase: Rc<RefCell<SessionPhase>>,
}

impl AuthState {
    pub fn set_phase(&self, phase: SessionPhase) {
        *self.phase.borrow_mut() = phase;
    }

    pub fn get_phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_phase() == SessionPhase::Authenticated
    }
}
