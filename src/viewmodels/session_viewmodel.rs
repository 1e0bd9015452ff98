// ============================================================================
// SESSION VIEWMODEL - Sign-in and startup revalidation
// ============================================================================
// Unauthenticated -> Authenticating -> Authenticated. Each successful entry
// into Authenticated triggers exactly one product fetch.
// ============================================================================

use std::rc::Rc;

use crate::error::AdminError;
use crate::models::auth::Credentials;
use crate::services::catalog_api::CatalogApi;
use crate::services::cookie_service::TokenStore;
use crate::state::{AdminState, SessionPhase};
use crate::viewmodels::product_list_viewmodel::ProductListViewModel;

pub struct SessionViewModel<A: CatalogApi, S: TokenStore> {
    api: Rc<A>,
    store: Rc<S>,
    state: AdminState,
    products: ProductListViewModel<A>,
}

impl<A: CatalogApi, S: TokenStore> Clone for SessionViewModel<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            state: self.state.clone(),
            products: self.products.clone(),
        }
    }
}

impl<A: CatalogApi, S: TokenStore> SessionViewModel<A, S> {
    pub fn new(api: Rc<A>, store: Rc<S>, state: AdminState, products: ProductListViewModel<A>) -> Self {
        Self {
            api,
            store,
            state,
            products,
        }
    }

    /// Revalidate the token left in the cookie by an earlier visit.
    ///
    /// `Ok(false)` when there is no cookie, or when a sign-in from the login
    /// form took over before the check answered. A token the server refuses is
    /// removed from the cookie; any other failure leaves it for the next load.
    pub async fn restore(&self) -> Result<bool, AdminError> {
        let Some(token) = self.store.load() else {
            log::info!("🔓 [SESSION] No stored token, showing login");
            return Ok(false);
        };

        self.api.attach_token(&token);
        self.enter(SessionPhase::Revalidating);
        log::info!("🔄 [SESSION] Revalidating stored token");

        let checked = self.api.check_session().await;
        if self.state.auth.get_phase() != SessionPhase::Revalidating {
            log::info!("🔄 [SESSION] Sign-in took over, dropping revalidation result");
            return Ok(false);
        }

        match checked {
            Ok(()) => {
                log::info!("✅ [SESSION] Stored token accepted");
                self.enter(SessionPhase::Authenticated);
                self.load_products().await;
                Ok(true)
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Revalidation failed: {}", e);
                if e.is_auth_rejection() {
                    if let Err(clear_err) = self.store.clear() {
                        log::error!("❌ [SESSION] {}", clear_err);
                    }
                }
                self.state.show_error(&e);
                self.enter(SessionPhase::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Exchange `credentials` for a token, persist it, then load the products.
    ///
    /// Returns `Ok(false)` without any request while another sign-in is in flight.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<bool, AdminError> {
        if self.state.auth.get_phase() == SessionPhase::Authenticating {
            log::warn!("⏳ [LOGIN] Sign-in already in progress");
            return Ok(false);
        }

        self.state.dismiss_notice();
        self.enter(SessionPhase::Authenticating);
        log::info!("🔐 [LOGIN] Signing in as {}", credentials.username);

        let session = match self.api.sign_in(&credentials).await {
            Ok(session) => session,
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                self.state.show_error(&e);
                self.enter(SessionPhase::Unauthenticated);
                return Err(e);
            }
        };

        // The cookie is a convenience for the next load; this tab works without it
        if let Err(e) = self.store.save(&session) {
            log::error!("❌ [LOGIN] {}", e);
            self.state.show_error(&e);
        }
        self.api.attach_token(&session.token);
        self.state.login_form.borrow_mut().password.clear();

        log::info!("✅ [LOGIN] Signed in, token expires {}", session.expires_at);
        self.enter(SessionPhase::Authenticated);
        self.load_products().await;
        Ok(true)
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.auth.get_phase()
    }

    fn enter(&self, phase: SessionPhase) {
        self.state.auth.set_phase(phase);
        self.state.notify_subscribers();
    }

    async fn load_products(&self) {
        // The session stays valid even when the first fetch fails; the banner shows why
        if let Err(e) = self.products.refresh().await {
            log::warn!("⚠️ [SESSION] Initial product load failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeLevel;
    use crate::test_support::{harness, product, valid_credentials, MemoryTokenStore, MockCatalog, VALID_TOKEN};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    #[test]
    fn valid_sign_in_authenticates_and_fetches_once() {
        let h = harness(MockCatalog::with_products(vec![product("a", "Sencha")]), MemoryTokenStore::default());
        h.state.login_form.borrow_mut().password = "hunter2".into();

        assert_eq!(block_on(h.vm.session.sign_in(valid_credentials())), Ok(true));

        assert_eq!(h.vm.session.phase(), SessionPhase::Authenticated);
        assert_eq!(h.api.list_calls.get(), 1);
        assert_eq!(h.state.get_products().len(), 1);
        assert_eq!(h.api.attached_token.borrow().as_deref(), Some(VALID_TOKEN));
        assert_eq!(h.store.load().as_deref(), Some(VALID_TOKEN));
        assert!(h.state.auth.is_authenticated());
        assert!(h.state.credentials().password.is_empty());
    }

    #[test]
    fn invalid_sign_in_stays_unauthenticated_without_fetch() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::default());
        let credentials = Credentials {
            password: "wrong".into(),
            ..valid_credentials()
        };

        let result = block_on(h.vm.session.sign_in(credentials));

        assert!(matches!(result, Err(AdminError::Auth(_))));
        assert_eq!(h.vm.session.phase(), SessionPhase::Unauthenticated);
        assert_eq!(h.api.list_calls.get(), 0);
        assert_eq!(h.store.load(), None);
        assert_eq!(h.state.get_notice().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn sign_in_is_ignored_while_authenticating() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::default());
        h.state.auth.set_phase(SessionPhase::Authenticating);

        assert_eq!(block_on(h.vm.session.sign_in(valid_credentials())), Ok(false));
        assert_eq!(h.api.sign_in_calls.get(), 0);
    }

    #[test]
    fn restore_without_cookie_shows_login() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::default());

        assert_eq!(block_on(h.vm.session.restore()), Ok(false));
        assert_eq!(h.api.check_calls.get(), 0);
        assert_eq!(h.vm.session.phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn restore_with_valid_cookie_authenticates_and_fetches() {
        let h = harness(
            MockCatalog::with_products(vec![product("a", "Sencha")]),
            MemoryTokenStore::holding(VALID_TOKEN),
        );

        assert_eq!(block_on(h.vm.session.restore()), Ok(true));
        assert_eq!(h.vm.session.phase(), SessionPhase::Authenticated);
        assert_eq!(h.api.list_calls.get(), 1);
        assert_eq!(h.state.get_products().len(), 1);
    }

    #[test]
    fn rejected_cookie_is_cleared() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::holding("expired"));

        assert!(matches!(block_on(h.vm.session.restore()), Err(AdminError::Auth(_))));
        assert_eq!(h.vm.session.phase(), SessionPhase::Unauthenticated);
        assert!(h.store.cleared.get());
        assert_eq!(h.api.list_calls.get(), 0);
    }

    #[test]
    fn cookie_survives_network_failure() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::holding(VALID_TOKEN));
        h.api.offline.set(true);

        assert!(matches!(block_on(h.vm.session.restore()), Err(AdminError::Network(_))));
        assert_eq!(h.vm.session.phase(), SessionPhase::Unauthenticated);
        assert!(!h.store.cleared.get());
        assert_eq!(h.store.load().as_deref(), Some(VALID_TOKEN));
    }

    #[test]
    fn failed_first_fetch_keeps_session() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::default());
        h.api.fail_list.set(true);

        assert_eq!(block_on(h.vm.session.sign_in(valid_credentials())), Ok(true));
        assert_eq!(h.vm.session.phase(), SessionPhase::Authenticated);
        assert_eq!(h.state.get_notice().unwrap().title, "Loading products failed");
    }

    #[test]
    fn sign_in_goes_ahead_while_revalidation_is_pending() {
        let h = harness(MockCatalog::default(), MemoryTokenStore::holding("expired"));
        let release = h.api.hold_check();

        let mut pool = LocalPool::new();
        let session = h.vm.session.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = session.restore().await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(h.vm.session.phase(), SessionPhase::Revalidating);

        assert_eq!(block_on(h.vm.session.sign_in(valid_credentials())), Ok(true));
        assert_eq!(h.api.sign_in_calls.get(), 1);
        assert_eq!(h.vm.session.phase(), SessionPhase::Authenticated);

        // The late answer must not undo the sign-in
        release.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(h.vm.session.phase(), SessionPhase::Authenticated);
        assert_eq!(h.api.list_calls.get(), 1);
        assert!(!h.store.cleared.get());
        assert_eq!(h.store.load().as_deref(), Some(VALID_TOKEN));
    }
}
