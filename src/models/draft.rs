// ============================================================================
// DRAFT PRODUCT - Editable copy of a product bound to the dialog form
// ============================================================================
// Prices stay as raw text while editing; to_wire_format does the coercion.
// ============================================================================

use std::str::FromStr;

use crate::error::AdminError;
use crate::models::product::{Product, ProductPayload};

/// Working copy of a product. `Default` is the empty create template.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DraftProduct {
    pub id: String,
    pub title: String,
    pub category: String,
    pub unit: String,
    pub origin_price: String,
    pub price: String,
    pub description: String,
    pub content: String,
    pub is_enabled: bool,
    pub image_url: String,
    pub images_url: Vec<String>,
}

/// Form fields addressable by input name
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftField {
    Title,
    Category,
    Unit,
    OriginPrice,
    Price,
    Description,
    Content,
    IsEnabled,
    ImageUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 9] = [
        DraftField::Title,
        DraftField::Category,
        DraftField::Unit,
        DraftField::OriginPrice,
        DraftField::Price,
        DraftField::Description,
        DraftField::Content,
        DraftField::IsEnabled,
        DraftField::ImageUrl,
    ];

    /// Input `name` attribute, identical to the wire key
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Category => "category",
            DraftField::Unit => "unit",
            DraftField::OriginPrice => "origin_price",
            DraftField::Price => "price",
            DraftField::Description => "description",
            DraftField::Content => "content",
            DraftField::IsEnabled => "is_enabled",
            DraftField::ImageUrl => "imageUrl",
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, DraftField::IsEnabled)
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown product field: {}", s))
    }
}

/// Raw value coming out of an input element
#[derive(Clone, PartialEq, Debug)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    fn into_bool(self) -> bool {
        match self {
            FieldInput::Checked(checked) => checked,
            FieldInput::Text(text) => matches!(text.trim(), "true" | "on" | "1"),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldInput::Text(text) => text,
            FieldInput::Checked(checked) => checked.to_string(),
        }
    }
}

impl DraftProduct {
    /// Update exactly one field. Checkbox fields coerce to bool, the rest keep raw text.
    pub fn set_field(&mut self, field: DraftField, input: FieldInput) {
        if field.is_checkbox() {
            self.is_enabled = input.into_bool();
            return;
        }

        let text = input.into_text();
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Category => &mut self.category,
            DraftField::Unit => &mut self.unit,
            DraftField::OriginPrice => &mut self.origin_price,
            DraftField::Price => &mut self.price,
            DraftField::Description => &mut self.description,
            DraftField::Content => &mut self.content,
            DraftField::ImageUrl => &mut self.image_url,
            // handled above
            DraftField::IsEnabled => return,
        };
        *slot = text;
    }

    /// Current value of a text field, as shown in its input
    pub fn text(&self, field: DraftField) -> String {
        match field {
            DraftField::Title => self.title.clone(),
            DraftField::Category => self.category.clone(),
            DraftField::Unit => self.unit.clone(),
            DraftField::OriginPrice => self.origin_price.clone(),
            DraftField::Price => self.price.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Content => self.content.clone(),
            DraftField::IsEnabled => self.is_enabled.to_string(),
            DraftField::ImageUrl => self.image_url.clone(),
        }
    }

    /// Replace one image slot. Returns false (and changes nothing) when out of bounds.
    pub fn set_image_at(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.images_url.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Push an empty slot unless `max_slots` is already reached
    pub fn append_image_slot(&mut self, max_slots: usize) -> bool {
        if self.images_url.len() >= max_slots {
            return false;
        }
        self.images_url.push(String::new());
        true
    }

    /// Pop the last slot; no-op on an empty list
    pub fn remove_last_image_slot(&mut self) -> bool {
        self.images_url.pop().is_some()
    }
}

/// Copy every field the product carries over the empty template.
/// Fields the server left out keep the template default.
pub fn merge_into_template(product: &Product) -> DraftProduct {
    let template = DraftProduct::default();
    DraftProduct {
        id: product.id.clone(),
        title: product.title.clone().unwrap_or(template.title),
        category: product.category.clone().unwrap_or(template.category),
        unit: product.unit.clone().unwrap_or(template.unit),
        origin_price: product
            .origin_price
            .map(|n| n.to_string())
            .unwrap_or(template.origin_price),
        price: product.price.map(|n| n.to_string()).unwrap_or(template.price),
        description: product.description.clone().unwrap_or(template.description),
        content: product.content.clone().unwrap_or(template.content),
        is_enabled: product.is_enabled.unwrap_or(template.is_enabled),
        image_url: product.image_url.clone().unwrap_or(template.image_url),
        images_url: product.images_url.clone().unwrap_or(template.images_url),
    }
}

/// Convert a draft to the request body: numbers parsed, flag as 1/0, empty image slots dropped
pub fn to_wire_format(draft: &DraftProduct) -> Result<ProductPayload, AdminError> {
    Ok(ProductPayload {
        id: draft.id.clone(),
        title: draft.title.clone(),
        category: draft.category.clone(),
        unit: draft.unit.clone(),
        origin_price: coerce_number("origin_price", &draft.origin_price)?,
        price: coerce_number("price", &draft.price)?,
        description: draft.description.clone(),
        content: draft.content.clone(),
        is_enabled: u8::from(draft.is_enabled),
        image_url: draft.image_url.clone(),
        images_url: draft
            .images_url
            .iter()
            .filter(|url| !url.is_empty())
            .cloned()
            .collect(),
    })
}

/// Blank text counts as zero, like an untouched number input
fn coerce_number(field: &'static str, raw: &str) -> Result<f64, AdminError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| AdminError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
