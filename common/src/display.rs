//! Formatting shared by the product views.

use num_format::{CustomFormat, Grouping, ToFormattedString};

use crate::model::product::Product;

/// Shown when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300";

/// Formats a price the way Vietnamese shops print dong: dot grouping,
/// no decimals, trailing currency sign (`120.000 ₫`).
pub fn format_vnd(price: f64) -> String {
    let format = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .minus_sign("-")
        .separator(".")
        .build()
        .unwrap_or_default();
    let rounded = price.round() as i64;
    format!("{} ₫", rounded.to_formatted_string(&format))
}

/// Stock state of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn of(product: &Product) -> Self {
        if product.in_stock() {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "Còn hàng",
            StockStatus::OutOfStock => "Hết hàng",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Whether the add-to-cart action is enabled.
    pub fn can_add_to_cart(self) -> bool {
        self == StockStatus::InStock
    }
}

/// Text for the `data-tooltip` attribute of a product card.
pub fn tooltip(product: &Product) -> String {
    if product.description.trim().is_empty() {
        product.name.clone()
    } else {
        format!("{} - {}", product.name, product.description.trim())
    }
}

/// Renders a stored price back into an editable form value, dropping a
/// meaningless `.0` for whole amounts.
pub fn price_input_value(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: u32) -> Product {
        Product {
            id: 5,
            name: "Áo thun".into(),
            price: 120000.0,
            quantity,
            description: String::new(),
            category: "Thời trang".into(),
            image_urls: vec![],
        }
    }

    #[test]
    fn out_of_stock_product_disables_cart() {
        let status = StockStatus::of(&product(0));
        assert_eq!(status.label(), "Hết hàng");
        assert_eq!(status.css_class(), "out-of-stock");
        assert!(!status.can_add_to_cart());
    }

    #[test]
    fn in_stock_product_enables_cart() {
        let status = StockStatus::of(&product(3));
        assert_eq!(status.label(), "Còn hàng");
        assert!(status.can_add_to_cart());
    }

    #[test]
    fn formats_dong() {
        assert_eq!(format_vnd(120000.0), "120.000 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(1_500_000.4), "1.500.000 ₫");
    }

    #[test]
    fn tooltip_includes_description_when_present() {
        let mut p = product(1);
        assert_eq!(tooltip(&p), "Áo thun");
        p.description = " Cotton 100% ".into();
        assert_eq!(tooltip(&p), "Áo thun - Cotton 100%");
    }

    #[test]
    fn price_input_value_drops_trailing_zero() {
        assert_eq!(price_input_value(120000.0), "120000");
        assert_eq!(price_input_value(99.5), "99.5");
    }
}
