//! In-memory catalog and token store for view-model tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use futures::channel::oneshot;

use crate::error::AdminError;
use crate::models::auth::{Credentials, SessionToken};
use crate::models::product::{Product, ProductPayload};
use crate::services::catalog_api::{CatalogApi, UpsertMode};
use crate::services::cookie_service::TokenStore;
use crate::state::AdminState;
use crate::viewmodels::AdminViewModel;

pub(crate) const VALID_TOKEN: &str = "token-123";

pub(crate) fn valid_credentials() -> Credentials {
    Credentials {
        username: "admin@example.test".into(),
        password: "hunter2".into(),
    }
}

pub(crate) fn product(id: &str, title: &str) -> Product {
    Product {
        id: id.into(),
        title: Some(title.into()),
        category: Some("tea".into()),
        unit: Some("box".into()),
        origin_price: Some(200.0),
        price: Some(150.0),
        is_enabled: Some(true),
        ..Product::default()
    }
}

/// Catalog service double: checks credentials and token, records every call
#[derive(Default)]
pub(crate) struct MockCatalog {
    pub(crate) products: RefCell<Vec<Product>>,
    pub(crate) attached_token: RefCell<Option<String>>,
    pub(crate) sign_in_calls: Cell<usize>,
    pub(crate) check_calls: Cell<usize>,
    pub(crate) list_calls: Cell<usize>,
    pub(crate) upserts: RefCell<Vec<(UpsertMode, ProductPayload)>>,
    pub(crate) deletes: RefCell<Vec<String>>,
    pub(crate) fail_list: Cell<bool>,
    pub(crate) fail_upsert: Cell<bool>,
    pub(crate) fail_delete: Cell<bool>,
    /// Every call fails as if the network were gone
    pub(crate) offline: Cell<bool>,
    /// When set, the next `check_session` waits for this before answering
    check_gate: RefCell<Option<oneshot::Receiver<()>>>,
    next_id: Cell<usize>,
}

impl MockCatalog {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let catalog = Self::default();
        *catalog.products.borrow_mut() = products;
        catalog
    }

    pub(crate) fn ids(&self) -> Vec<String> {
        self.products.borrow().iter().map(|p| p.id.clone()).collect()
    }

    /// Hold the next session check until the returned sender fires
    pub(crate) fn hold_check(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.check_gate.borrow_mut() = Some(gate);
        release
    }

    fn reachable(&self) -> Result<(), AdminError> {
        if self.offline.get() {
            return Err(AdminError::Network("offline".into()));
        }
        Ok(())
    }

    fn authorized(&self, wrap: fn(String) -> AdminError) -> Result<(), AdminError> {
        self.reachable()?;
        match self.attached_token.borrow().as_deref() {
            Some(VALID_TOKEN) => Ok(()),
            _ => Err(wrap("HTTP 401: 驗證錯誤, 請重新登入".into())),
        }
    }
}

fn product_from_payload(id: String, payload: &ProductPayload) -> Product {
    Product {
        id,
        title: Some(payload.title.clone()),
        category: Some(payload.category.clone()),
        unit: Some(payload.unit.clone()),
        origin_price: Some(payload.origin_price),
        price: Some(payload.price),
        description: Some(payload.description.clone()),
        content: Some(payload.content.clone()),
        is_enabled: Some(payload.is_enabled == 1),
        image_url: Some(payload.image_url.clone()),
        images_url: Some(payload.images_url.clone()),
    }
}

impl CatalogApi for MockCatalog {
    fn attach_token(&self, token: &str) {
        *self.attached_token.borrow_mut() = Some(token.to_string());
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken, AdminError> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        self.reachable()?;
        if *credentials != valid_credentials() {
            return Err(AdminError::Auth("HTTP 400: 登入失敗".into()));
        }
        Ok(SessionToken {
            token: VALID_TOKEN.into(),
            expires_at: Utc.timestamp_opt(1_900_000_000, 0).unwrap(),
        })
    }

    async fn check_session(&self) -> Result<(), AdminError> {
        self.check_calls.set(self.check_calls.get() + 1);
        let gate = self.check_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.authorized(AdminError::Auth)
    }

    async fn list_products(&self) -> Result<Vec<Product>, AdminError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.authorized(AdminError::Fetch)?;
        if self.fail_list.get() {
            return Err(AdminError::Fetch("HTTP 500".into()));
        }
        Ok(self.products.borrow().clone())
    }

    async fn upsert_product(&self, mode: UpsertMode, payload: &ProductPayload) -> Result<(), AdminError> {
        self.upserts.borrow_mut().push((mode, payload.clone()));
        self.authorized(AdminError::Upsert)?;
        if self.fail_upsert.get() {
            return Err(AdminError::Upsert("HTTP 400: title 欄位為必填".into()));
        }

        let mut products = self.products.borrow_mut();
        match mode {
            UpsertMode::Create => {
                self.next_id.set(self.next_id.get() + 1);
                let id = format!("new-{}", self.next_id.get());
                products.push(product_from_payload(id, payload));
            }
            UpsertMode::Edit => {
                let slot = products
                    .iter_mut()
                    .find(|p| p.id == payload.id)
                    .ok_or_else(|| AdminError::Upsert("HTTP 404".into()))?;
                *slot = product_from_payload(payload.id.clone(), payload);
            }
        }
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), AdminError> {
        self.deletes.borrow_mut().push(id.to_string());
        self.authorized(AdminError::Delete)?;
        if self.fail_delete.get() {
            return Err(AdminError::Delete("HTTP 500".into()));
        }
        self.products.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemoryTokenStore {
    pub(crate) token: RefCell<Option<String>>,
    pub(crate) saved: RefCell<Option<SessionToken>>,
    pub(crate) cleared: Cell<bool>,
}

impl MemoryTokenStore {
    pub(crate) fn holding(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &SessionToken) -> Result<(), AdminError> {
        *self.token.borrow_mut() = Some(token.token.clone());
        *self.saved.borrow_mut() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        *self.token.borrow_mut() = None;
        self.cleared.set(true);
        Ok(())
    }
}

pub(crate) struct Harness {
    pub(crate) api: Rc<MockCatalog>,
    pub(crate) store: Rc<MemoryTokenStore>,
    pub(crate) state: AdminState,
    pub(crate) vm: AdminViewModel<MockCatalog, MemoryTokenStore>,
}

pub(crate) fn harness(api: MockCatalog, store: MemoryTokenStore) -> Harness {
    let api = Rc::new(api);
    let store = Rc::new(store);
    let state = AdminState::new();
    let vm = AdminViewModel::new(api.clone(), store.clone(), state.clone()).with_max_image_slots(4);
    Harness { api, store, state, vm }
}

/// Harness already signed in against a catalog holding `products`
pub(crate) fn signed_in(products: Vec<Product>) -> Harness {
    let h = harness(MockCatalog::with_products(products), MemoryTokenStore::default());
    futures::executor::block_on(h.vm.session.sign_in(valid_credentials())).unwrap();
    h
}
