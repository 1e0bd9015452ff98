// ============================================================================
// PRODUCT TABLE VIEW - Server order, one row per product
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::product::Product;
use crate::views::PanelViewModel;

const COLUMNS: [&str; 6] = ["Category", "Title", "Original price", "Price", "Enabled", "Actions"];

pub fn render_product_table(vm: &PanelViewModel) -> Result<Element, JsValue> {
    let products = vm.state.get_products();

    let create_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("New product")
        .build();
    {
        let vm = vm.clone();
        on_click(&create_btn, move |_| vm.dialog.open_create());
    }

    let header_row = ElementBuilder::new("tr")?
        .children(
            COLUMNS
                .iter()
                .map(|name| ElementBuilder::new("th").map(|th| th.text(name).build()))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let body = ElementBuilder::new("tbody")?.build();
    for product in &products {
        append_child(&body, &render_row(vm, product)?)?;
    }

    let table = ElementBuilder::new("table")?
        .class("table")
        .child(ElementBuilder::new("thead")?.child(header_row)?.build())?
        .child(body)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("product-list")
        .child(
            ElementBuilder::new("div")?
                .class("toolbar")
                .child(ElementBuilder::new("span")?.text(&format!("{} products", products.len())).build())?
                .child(create_btn)?
                .build(),
        )?
        .child(table)?
        .build())
}

fn render_row(vm: &PanelViewModel, product: &Product) -> Result<Element, JsValue> {
    let (enabled_class, enabled_text) = if product.enabled() {
        ("text-success", "Enabled")
    } else {
        ("text-muted", "Disabled")
    };

    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-primary btn-sm")
        .attr("type", "button")?
        .text("Edit")
        .build();
    let delete_btn = ElementBuilder::new("button")?
        .class("btn btn-outline-danger btn-sm")
        .attr("type", "button")?
        .text("Delete")
        .build();

    {
        let vm = vm.clone();
        let id = product.id.clone();
        on_click(&edit_btn, move |_| {
            vm.dialog.open_edit(&id);
        });
    }
    {
        let vm = vm.clone();
        let id = product.id.clone();
        on_click(&delete_btn, move |_| {
            vm.dialog.open_delete(&id);
        });
    }

    let cells = [
        cell(product.category.as_deref().unwrap_or_default())?,
        cell(product.title.as_deref().unwrap_or_default())?,
        cell(&format_price(product.origin_price))?,
        cell(&format_price(product.price))?,
        ElementBuilder::new("td")?
            .child(ElementBuilder::new("span")?.class(enabled_class).text(enabled_text).build())?
            .build(),
        ElementBuilder::new("td")?.child(edit_btn)?.child(delete_btn)?.build(),
    ];

    Ok(ElementBuilder::new("tr")?.children(cells)?.build())
}

fn cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Whole amounts without decimals; missing prices as an empty cell
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.fract() == 0.0 => format!("{}", value as i64),
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn prices_render_like_the_server_sends_them() {
        assert_eq!(format_price(Some(1200.0)), "1200");
        assert_eq!(format_price(Some(99.5)), "99.50");
        assert_eq!(format_price(None), "");
    }
}
