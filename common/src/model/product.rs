use serde::{Deserialize, Serialize};

/// A product as returned by the storefront API.
///
/// Products are owned by the backend: the client only reads them and sends
/// multipart forms to create or update them. The JSON shape is
/// `{ id, name, price, quantity, description, category, imageUrls }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier assigned by the backend. Higher ids are newer products.
    pub id: i64,
    pub name: String,
    /// Price in VND.
    pub price: f64,
    /// Units in stock. Zero means out of stock.
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Stored upload references, primary image first.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// The reference of the image shown on cards, if the product has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
