// ============================================================================
// CATALOG ADMIN - Product catalog admin panel (plain web-sys, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: session gate, product list, product dialog
// - Services: HTTP client and cookie token store only
// - State: Rc<RefCell> state with change subscribers
// - Models: wire types and the editable draft
// ============================================================================

pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::error::AdminError;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Catalog admin starting (api: {})", CONFIG.api_base);

    let app = App::new()?;
    app.render()?;
    app.start();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Rebuild the whole page from the current state
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {}", AdminError::from(e));
            }
        } else {
            log::warn!("⚠️ [RERENDER] App not initialized");
        }
    });
}
