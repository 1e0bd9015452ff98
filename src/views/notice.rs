// ============================================================================
// NOTICE VIEW - Banner for the latest success or failure
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::{Notice, NoticeLevel};
use crate::views::PanelViewModel;

pub fn render_notice(vm: &PanelViewModel, notice: &Notice) -> Result<Element, JsValue> {
    let level_class = match notice.level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Error => "notice notice-error",
    };

    let dismiss = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", "Dismiss")?
        .text("✕")
        .build();
    {
        let state = vm.state.clone();
        on_click(&dismiss, move |_| {
            state.dismiss_notice();
            state.notify_subscribers();
        });
    }

    Ok(ElementBuilder::new("div")?
        .class(level_class)
        .attr("role", "alert")?
        .child(ElementBuilder::new("strong")?.text(&notice.title).build())?
        .child(ElementBuilder::new("span")?.class("notice-text").text(&notice.text).build())?
        .child(dismiss)?
        .build())
}
