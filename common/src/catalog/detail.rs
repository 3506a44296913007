use crate::error::Result;
use crate::model::product::Product;

/// State of a product page.
///
/// The page can be pointed at another product while a fetch is running, so
/// every result is tagged with the id it was requested for and only the
/// answer for the current id is kept.
#[derive(Debug, Clone)]
pub struct ProductPage {
    id: i64,
    product: Option<Product>,
    selected_image: usize,
    loading: bool,
    error: Option<String>,
}

impl ProductPage {
    /// A page for `id`, waiting for its first fetch.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            product: None,
            selected_image: 0,
            loading: true,
            error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Points the page at `id`. Returns `true` when it must be fetched.
    pub fn show(&mut self, id: i64) -> bool {
        if id == self.id {
            return false;
        }
        *self = Self::new(id);
        true
    }

    /// Stores the fetch result for `requested`. Answers for any other id
    /// are dropped and `false` is returned.
    pub fn on_loaded(&mut self, requested: i64, result: Result<Product>) -> bool {
        if requested != self.id {
            return false;
        }
        self.loading = false;
        self.selected_image = 0;
        match result {
            Ok(product) => {
                self.product = Some(product);
                self.error = None;
            }
            Err(err) => {
                self.product = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn selected_index(&self) -> usize {
        self.selected_image
    }

    /// Reference of the image shown large, falling back to the primary one.
    pub fn selected_image(&self) -> Option<&str> {
        let product = self.product.as_ref()?;
        product
            .image_urls
            .get(self.selected_image)
            .or_else(|| product.image_urls.first())
            .map(String::as_str)
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        let available = self.product.as_ref().map_or(0, |p| p.image_urls.len());
        if index == self.selected_image || index >= available {
            return false;
        }
        self.selected_image = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PRODUCT_FETCH_FAILED, StoreError};

    fn stored(id: i64, images: &[&str]) -> Product {
        Product {
            id,
            name: format!("Sản phẩm {id}"),
            price: 10.0,
            quantity: 1,
            description: String::new(),
            category: String::new(),
            image_urls: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn loads_the_requested_product() {
        let mut page = ProductPage::new(4);
        assert!(page.is_loading());
        assert!(page.on_loaded(4, Ok(stored(4, &["a.png"]))));
        assert!(!page.is_loading());
        assert_eq!(page.product().map(|p| p.id), Some(4));
        assert_eq!(page.selected_image(), Some("a.png"));
    }

    #[test]
    fn late_answer_for_previous_id_is_dropped() {
        let mut page = ProductPage::new(4);
        assert!(page.show(5));
        assert!(page.on_loaded(5, Ok(stored(5, &[]))));
        assert!(!page.on_loaded(4, Ok(stored(4, &[]))));
        assert!(!page.on_loaded(4, Err(StoreError::Fetch(PRODUCT_FETCH_FAILED.into()))));
        assert_eq!(page.product().map(|p| p.id), Some(5));
        assert_eq!(page.error(), None);
    }

    #[test]
    fn stale_answer_does_not_end_loading_of_new_id() {
        let mut page = ProductPage::new(4);
        page.show(5);
        assert!(!page.on_loaded(4, Ok(stored(4, &[]))));
        assert!(page.is_loading());
        assert!(page.product().is_none());
    }

    #[test]
    fn same_id_does_not_refetch() {
        let mut page = ProductPage::new(4);
        assert!(!page.show(4));
    }

    #[test]
    fn failed_fetch_shows_message() {
        let mut page = ProductPage::new(4);
        page.on_loaded(4, Err(StoreError::Fetch(PRODUCT_FETCH_FAILED.into())));
        assert_eq!(page.error(), Some(PRODUCT_FETCH_FAILED));
        assert!(page.product().is_none());
    }

    #[test]
    fn image_selection_stays_in_range() {
        let mut page = ProductPage::new(4);
        page.on_loaded(4, Ok(stored(4, &["a.png", "b.png"])));
        assert!(page.select_image(1));
        assert_eq!(page.selected_image(), Some("b.png"));
        assert!(!page.select_image(1));
        assert!(!page.select_image(7));
        assert_eq!(page.selected_index(), 1);
    }
}
