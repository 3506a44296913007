//! Product listing pipeline: ordering and search filtering over a freshly
//! loaded product collection, the list controller driving reloads and
//! deletes, and the state of a single product page.

mod controller;
mod detail;

pub use controller::{DeleteOutcome, ListController};
pub use detail::ProductPage;

use crate::model::product::Product;

/// How a loaded collection is ordered before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Keep the backend's order.
    AsReturned,
    /// Descending id, the id standing in for a creation timestamp.
    #[default]
    NewestFirst,
}

/// Options of the product list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub enable_search: bool,
    pub sort_by: SortBy,
    /// Adds a `data-tooltip` attribute on each card.
    pub show_tooltips: bool,
}

impl ListConfig {
    /// Home page: newest products, no search.
    pub fn home() -> Self {
        Self {
            enable_search: false,
            sort_by: SortBy::NewestFirst,
            show_tooltips: true,
        }
    }

    /// Product catalog page driven by the search box.
    pub fn searchable() -> Self {
        Self {
            enable_search: true,
            ..Self::home()
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::home()
    }
}

/// Name of the query parameter carrying the catalog search term.
pub const SEARCH_PARAM: &str = "search";

/// Reads the search term out of a URL query string such as
/// `?search=%C3%A1o+thun&page=2`. Missing parameters give an empty term.
pub fn search_term_from_query(query: &str) -> String {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == SEARCH_PARAM)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.clone())
        })
        .unwrap_or_default()
}

pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Keeps the products whose name, description or category contains `term`,
/// ignoring case. A blank term keeps everything in the original order; any
/// other term is matched as typed, surrounding spaces included.
pub fn filter(products: Vec<Product>, term: &str) -> Vec<Product> {
    if term.trim().is_empty() {
        return products;
    }
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|product| matches(product, &needle))
        .collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    [&product.name, &product.description, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Applies the configured ordering, then the search filter when enabled.
pub fn arrange(mut products: Vec<Product>, config: &ListConfig, term: &str) -> Vec<Product> {
    if config.sort_by == SortBy::NewestFirst {
        sort_newest_first(&mut products);
    }
    if config.enable_search {
        filter(products, term)
    } else {
        products
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: i64, name: &str, description: &str, category: &str) -> Product {
        Product {
            id,
            name: name.into(),
            price: 100.0,
            quantity: 1,
            description: description.into(),
            category: category.into(),
            image_urls: vec![],
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(2, "Áo thun", "Cotton trắng", "Thời trang"),
            product(7, "Quần jean", "Xanh đậm", "Thời trang"),
            product(4, "Tai nghe", "Không dây, chống ồn", "Điện tử"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_on_accented_text() {
        let products = vec![
            product(1, "Áo thun", "", ""),
            product(2, "Quần jean", "", ""),
        ];
        let found = filter(products, "áo");
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn search_looks_at_description_and_category() {
        assert_eq!(ids(&filter(sample(), "CHỐNG ỒN")), vec![4]);
        assert_eq!(ids(&filter(sample(), "thời trang")), vec![2, 7]);
        assert!(filter(sample(), "giày").is_empty());
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        assert_eq!(ids(&filter(sample(), "")), vec![2, 7, 4]);
        assert_eq!(ids(&filter(sample(), "   ")), vec![2, 7, 4]);
    }

    #[test]
    fn padded_term_is_matched_as_typed() {
        let products = vec![
            product(1, "Áojean", "", ""),
            product(2, "Quần jean", "", ""),
        ];
        assert_eq!(ids(&filter(products.clone(), " jean")), vec![2]);
        assert_eq!(ids(&filter(products, "jean ")), Vec::<i64>::new());
    }

    #[test]
    fn filtered_result_is_exact_subset() {
        let term = "an";
        let expected: Vec<i64> = sample()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(term)
                    || p.description.to_lowercase().contains(term)
                    || p.category.to_lowercase().contains(term)
            })
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&filter(sample(), term)), expected);
    }

    #[test]
    fn search_term_is_decoded_from_query() {
        assert_eq!(search_term_from_query("?search=%C3%A1o+thun"), "áo thun");
        assert_eq!(search_term_from_query("page=2&search=jean"), "jean");
        assert_eq!(search_term_from_query("?search="), "");
        assert_eq!(search_term_from_query("?search"), "");
        assert_eq!(search_term_from_query(""), "");
        assert_eq!(search_term_from_query("?searching=x"), "");
    }

    #[test]
    fn newest_first_sorts_by_descending_id() {
        let arranged = arrange(sample(), &ListConfig::home(), "");
        assert_eq!(ids(&arranged), vec![7, 4, 2]);
        assert!(arranged.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn search_is_ignored_unless_enabled() {
        assert_eq!(arrange(sample(), &ListConfig::home(), "jean").len(), 3);
        let arranged = arrange(sample(), &ListConfig::searchable(), "a");
        assert_eq!(ids(&arranged), vec![7, 4, 2]);
    }

    #[test]
    fn as_returned_keeps_backend_order() {
        let config = ListConfig {
            enable_search: true,
            sort_by: SortBy::AsReturned,
            show_tooltips: false,
        };
        assert_eq!(ids(&arrange(sample(), &config, "thời")), vec![2, 7]);
    }
}
