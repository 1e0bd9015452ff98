// ============================================================================
// APP VIEW - Login gate or product table, plus banner and dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::SessionPhase;
use crate::views::{render_login, render_notice, render_product_modal, render_product_table, PanelViewModel};

pub fn render_app(vm: &PanelViewModel) -> Result<Element, JsValue> {
    let phase = vm.state.auth.get_phase();
    log::debug!("🎬 [VIEW] render_app ({:?})", phase);

    let container = ElementBuilder::new("div")?.class("admin-panel").build();

    if let Some(notice) = vm.state.get_notice() {
        append_child(&container, &render_notice(vm, &notice)?)?;
    }

    match phase {
        SessionPhase::Authenticated => {
            append_child(&container, &render_product_table(vm)?)?;
            let dialog = vm.state.get_dialog();
            if dialog.is_open() {
                append_child(&container, &render_product_modal(vm, &dialog)?)?;
            }
        }
        SessionPhase::Unauthenticated | SessionPhase::Revalidating | SessionPhase::Authenticating => {
            append_child(&container, &render_login(vm, phase)?)?;
        }
    }

    Ok(container)
}
