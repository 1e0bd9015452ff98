// ============================================================================
// PRODUCT LIST VIEWMODEL - Fetch and replace the whole list
// ============================================================================

use std::rc::Rc;

use crate::error::AdminError;
use crate::services::catalog_api::CatalogApi;
use crate::state::AdminState;

pub struct ProductListViewModel<A: CatalogApi> {
    api: Rc<A>,
    state: AdminState,
}

impl<A: CatalogApi> Clone for ProductListViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CatalogApi> ProductListViewModel<A> {
    pub fn new(api: Rc<A>, state: AdminState) -> Self {
        Self { api, state }
    }

    /// Replace the list with what the server returns now, in server order.
    /// On failure the previous list stays and the error goes to the banner.
    pub async fn refresh(&self) -> Result<usize, AdminError> {
        match self.api.list_products().await {
            Ok(products) => {
                let count = products.len();
                log::info!("📋 [PRODUCTS] Loaded {} products", count);
                self.state.set_products(products);
                self.state.notify_subscribers();
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ [PRODUCTS] {}", e);
                self.state.show_error(&e);
                self.state.notify_subscribers();
                Err(e)
            }
        }
    }
}
