// ============================================================================
// ADMIN VIEWMODEL - Session gate, product list and dialog over one state
// ============================================================================

use std::rc::Rc;

use crate::services::catalog_api::CatalogApi;
use crate::services::cookie_service::TokenStore;
use crate::state::AdminState;
use crate::viewmodels::dialog_viewmodel::DialogViewModel;
use crate::viewmodels::product_list_viewmodel::ProductListViewModel;
use crate::viewmodels::session_viewmodel::SessionViewModel;

/// Everything the views call into. Clones share the same state and client.
pub struct AdminViewModel<A: CatalogApi, S: TokenStore> {
    pub session: SessionViewModel<A, S>,
    pub products: ProductListViewModel<A>,
    pub dialog: DialogViewModel<A>,
    pub state: AdminState,
}

impl<A: CatalogApi, S: TokenStore> Clone for AdminViewModel<A, S> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            products: self.products.clone(),
            dialog: self.dialog.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CatalogApi, S: TokenStore> AdminViewModel<A, S> {
    pub fn new(api: Rc<A>, store: Rc<S>, state: AdminState) -> Self {
        let products = ProductListViewModel::new(api.clone(), state.clone());
        Self {
            session: SessionViewModel::new(api.clone(), store, state.clone(), products.clone()),
            dialog: DialogViewModel::new(api, state.clone(), products.clone()),
            products,
            state,
        }
    }

    pub fn with_max_image_slots(mut self, max_image_slots: usize) -> Self {
        self.dialog = self.dialog.with_max_image_slots(max_image_slots);
        self
    }
}
