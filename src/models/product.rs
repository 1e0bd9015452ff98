use serde::{Deserialize, Deserializer, Serialize};

/// Product as the catalog API returns it.
///
/// Everything except `id` may be missing from a payload; `None` means "the
/// server did not send it", which matters when merging into a draft.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub origin_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    // The API echoes back 1/0 for products created through the admin form
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_enabled: Option<bool>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, rename = "imagesUrl")]
    pub images_url: Option<Vec<String>>,
}

impl Product {
    pub fn enabled(&self) -> bool {
        self.is_enabled.unwrap_or(false)
    }
}

/// Body of `GET /api/{path}/admin/products`
#[derive(Clone, Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Request body sent to create/update endpoints.
///
/// Built only through `models::draft::to_wire_format`.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub unit: String,
    pub origin_price: f64,
    pub price: f64,
    pub description: String,
    pub content: String,
    pub is_enabled: u8,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imagesUrl")]
    pub images_url: Vec<String>,
}

/// `{ "data": ... }` wrapper used by every mutating call
#[derive(Clone, Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(f64),
    Text(String),
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<NumberRepr>::deserialize(deserializer)?;
    Ok(match repr {
        Some(NumberRepr::Number(n)) => Some(n),
        Some(NumberRepr::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(repr.map(|flag| match flag {
        FlagRepr::Bool(b) => b,
        FlagRepr::Int(i) => i != 0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_integer_flag_and_camel_case_images() {
        let product: Product = serde_json::from_value(json!({
            "id": "-Nabc",
            "title": "Tea",
            "origin_price": 120,
            "price": "99",
            "is_enabled": 1,
            "imageUrl": "https://img.test/main.png",
            "imagesUrl": ["https://img.test/1.png"]
        }))
        .unwrap();

        assert_eq!(product.is_enabled, Some(true));
        assert_eq!(product.origin_price, Some(120.0));
        assert_eq!(product.price, Some(99.0));
        assert_eq!(product.image_url.as_deref(), Some("https://img.test/main.png"));
        assert_eq!(product.images_url, Some(vec!["https://img.test/1.png".to_string()]));
        assert_eq!(product.category, None);
    }

    #[test]
    fn missing_fields_stay_none() {
        let product: Product = serde_json::from_value(json!({ "id": "5" })).unwrap();
        assert_eq!(product, Product { id: "5".into(), ..Product::default() });
        assert!(!product.enabled());
    }

    #[test]
    fn products_response_ignores_pagination() {
        let response: ProductsResponse = serde_json::from_value(json!({
            "success": true,
            "products": [{ "id": "a" }, { "id": "b" }],
            "pagination": { "total_pages": 3, "current_page": 1 }
        }))
        .unwrap();
        let ids: Vec<_> = response.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
