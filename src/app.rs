// ============================================================================
// APP - Owns the root element and re-renders it on every state change
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, take_rendered_listeners};
use crate::error::AdminError;
use crate::services::{ApiClient, CookieTokenStore};
use crate::state::AdminState;
use crate::viewmodels::AdminViewModel;
use crate::views::{render_app, PanelViewModel};

pub struct App {
    vm: PanelViewModel,
    root: Element,
    /// Listeners of the nodes currently under `root`
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    pub fn new() -> Result<Self, AdminError> {
        let root = get_element_by_id("app").ok_or_else(|| AdminError::Dom("no #app element found".to_string()))?;

        let state = AdminState::new();
        let vm = AdminViewModel::new(Rc::new(ApiClient::new()), Rc::new(CookieTokenStore::new()), state.clone());

        let gate = RenderGate::default();
        state.subscribe_to_changes(move || {
            if !gate.request() {
                return;
            }
            let gate = gate.clone();
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                gate.finish();
                crate::rerender_app();
            });
        });

        Ok(Self {
            vm,
            root,
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Revalidate the stored cookie in the background; the login form stays usable meanwhile
    pub fn start(&self) {
        let vm = self.vm.clone();
        spawn_local(async move {
            match vm.session.restore().await {
                Ok(true) => log::info!("✅ [APP] Session restored"),
                Ok(false) => {}
                Err(e) => log::warn!("⚠️ [APP] Session not restored: {}", e),
            }
        });
    }

    /// Full re-render of the root
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let rendered = render_app(&self.vm).and_then(|view| append_child(&self.root, &view));
        // Dropping the old set detaches it from the discarded nodes
        *self.listeners.borrow_mut() = take_rendered_listeners();
        rendered
    }
}

/// At most one render waiting at a time; notifications arriving before it runs join it
#[derive(Clone, Default)]
pub struct RenderGate {
    pending: Rc<Cell<bool>>,
}

impl RenderGate {
    /// True when the caller should schedule a render
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called by the scheduled render right before it runs
    pub fn finish(&self) {
        self.pending.set(false);
    }
}
