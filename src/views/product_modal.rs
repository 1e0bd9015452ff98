// ============================================================================
// PRODUCT MODAL VIEW - Create / edit form or delete confirmation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, event_checked, event_value, on_change, on_click, on_input, ElementBuilder};
use crate::models::draft::{DraftField, DraftProduct, FieldInput};
use crate::state::{DialogMode, DialogState};
use crate::views::PanelViewModel;

pub fn render_product_modal(vm: &PanelViewModel, dialog: &DialogState) -> Result<Element, JsValue> {
    let (Some(mode), Some(draft)) = (dialog.mode(), dialog.draft()) else {
        return ElementBuilder::new("div").map(|b| b.build());
    };
    let submitting = dialog.is_submitting();

    let body = match mode {
        DialogMode::Create | DialogMode::Edit => render_form(vm, draft)?,
        DialogMode::Delete => render_delete_confirmation(draft)?,
    };

    let header_class = if mode == DialogMode::Delete {
        "modal-header bg-danger text-white"
    } else {
        "modal-header bg-dark text-white"
    };
    let header = ElementBuilder::new("div")?
        .class(header_class)
        .child(ElementBuilder::new("h5")?.class("modal-title").text(mode.title()).build())?
        .build();

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(header)?
        .child(body)?
        .child(render_footer(vm, mode, submitting)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("modal-backdrop")
        .attr("role", "dialog")?
        .child(ElementBuilder::new("div")?.class("modal-dialog").child(content)?.build())?
        .build())
}

// ============================================================================
// FORM
// ============================================================================

fn render_form(vm: &PanelViewModel, draft: &DraftProduct) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("div")?.class("col-main").build();
    for field in DraftField::ALL {
        if field == DraftField::ImageUrl {
            continue;
        }
        append_child(&main, &render_field(vm, draft, field)?)?;
    }

    let images = ElementBuilder::new("div")?
        .class("col-images")
        .child(render_field(vm, draft, DraftField::ImageUrl)?)?
        .build();
    if !draft.image_url.is_empty() {
        append_child(&images, &preview(&draft.image_url)?)?;
    }
    append_child(&images, &render_image_slots(vm, draft)?)?;

    Ok(ElementBuilder::new("div")?
        .class("modal-body row")
        .child(images)?
        .child(main)?
        .build())
}

fn render_field(vm: &PanelViewModel, draft: &DraftProduct, field: DraftField) -> Result<Element, JsValue> {
    let id = format!("product-{}", field.name());
    let label = ElementBuilder::new("label")?.attr("for", &id)?.text(field_label(field)).build();

    if field.is_checkbox() {
        let input = ElementBuilder::new("input")?
            .class("form-check-input")
            .attr("id", &id)?
            .attr("type", "checkbox")?
            .attr("name", field.name())?
            .flag("checked", draft.is_enabled)?
            .build();
        {
            let vm = vm.clone();
            on_change(&input, move |event| {
                if let Some(checked) = event_checked(&event) {
                    vm.dialog.set_field(field, FieldInput::Checked(checked));
                }
            });
        }
        return Ok(ElementBuilder::new("div")?.class("form-check").child(input)?.child(label)?.build());
    }

    let value = draft.text(field);
    let input = match field {
        DraftField::Description | DraftField::Content => ElementBuilder::new("textarea")?
            .class("form-control")
            .attr("id", &id)?
            .attr("name", field.name())?
            .text(&value)
            .build(),
        _ => ElementBuilder::new("input")?
            .class("form-control")
            .attr("id", &id)?
            .attr("name", field.name())?
            .attr("type", input_type(field))?
            .attr("value", &value)?
            .build(),
    };
    {
        let vm = vm.clone();
        on_input(&input, move |event| {
            if let Some(value) = event_value(&event) {
                vm.dialog.set_field(field, FieldInput::Text(value));
            }
        });
    }

    Ok(ElementBuilder::new("div")?.class("form-group").child(label)?.child(input)?.build())
}

fn render_image_slots(vm: &PanelViewModel, draft: &DraftProduct) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?.class("image-slots").build();

    for (index, url) in draft.images_url.iter().enumerate() {
        let input = ElementBuilder::new("input")?
            .class("form-control")
            .attr("type", "text")?
            .attr("placeholder", &format!("Image URL {}", index + 1))?
            .attr("value", url)?
            .build();
        {
            let vm = vm.clone();
            on_input(&input, move |event| {
                if let Some(value) = event_value(&event) {
                    vm.dialog.set_image_at(index, value);
                }
            });
        }
        append_child(&list, &input)?;
        if !url.is_empty() {
            append_child(&list, &preview(url)?)?;
        }
    }

    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-primary btn-sm")
        .attr("type", "button")?
        .flag("disabled", draft.images_url.len() >= vm.dialog.max_image_slots())?
        .text("Add image")
        .build();
    let remove_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-danger btn-sm")
        .attr("type", "button")?
        .flag("disabled", draft.images_url.is_empty())?
        .text("Remove last image")
        .build();
    {
        let vm = vm.clone();
        on_click(&add_btn, move |_| {
            vm.dialog.append_image_slot();
        });
    }
    {
        let vm = vm.clone();
        on_click(&remove_btn, move |_| {
            vm.dialog.remove_last_image_slot();
        });
    }

    append_child(&list, &add_btn)?;
    append_child(&list, &remove_btn)?;
    Ok(list)
}

fn preview(url: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("img")?
        .class("img-fluid")
        .attr("src", url)?
        .attr("alt", "")?
        .build())
}

// ============================================================================
// DELETE + FOOTER
// ============================================================================

fn render_delete_confirmation(draft: &DraftProduct) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("modal-body")
        .text("Delete ")
        .child(ElementBuilder::new("strong")?.class("text-danger").text(&draft.title).build())?
        .child(ElementBuilder::new("span")?.text("? This cannot be undone.").build())?
        .build())
}

fn render_footer(vm: &PanelViewModel, mode: DialogMode, submitting: bool) -> Result<Element, JsValue> {
    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-secondary")
        .attr("type", "button")?
        .flag("disabled", submitting)?
        .text("Cancel")
        .build();
    let confirm_class = if mode == DialogMode::Delete { "btn btn-danger" } else { "btn btn-primary" };
    let confirm_btn = ElementBuilder::new("button")?
        .class(confirm_class)
        .attr("type", "button")?
        .flag("disabled", submitting)?
        .text(mode.confirm_label())
        .build();

    {
        let vm = vm.clone();
        on_click(&cancel_btn, move |_| {
            vm.dialog.close();
        });
    }
    {
        let vm = vm.clone();
        on_click(&confirm_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                // The banner shows the failure; the dialog stays open for another try
                if let Err(e) = vm.dialog.confirm().await {
                    log::debug!("📝 [DIALOG] {}", e);
                }
            });
        });
    }

    Ok(ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_btn)?
        .child(confirm_btn)?
        .build())
}

fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Title => "Title",
        DraftField::Category => "Category",
        DraftField::Unit => "Unit",
        DraftField::OriginPrice => "Original price",
        DraftField::Price => "Price",
        DraftField::Description => "Description",
        DraftField::Content => "Content",
        DraftField::IsEnabled => "Enabled",
        DraftField::ImageUrl => "Main image URL",
    }
}

fn input_type(field: DraftField) -> &'static str {
    match field {
        DraftField::OriginPrice | DraftField::Price => "number",
        _ => "text",
    }
}
