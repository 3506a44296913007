use common::catalog::{ListConfig, ListController};

/// State of the `ProductList` component.
pub struct ProductList {
    /// Loaded products, loading flag and error, plus the reload bookkeeping.
    pub list: ListController,
}

impl ProductList {
    pub fn new(config: ListConfig, search: String) -> Self {
        Self {
            list: ListController::new(config, search),
        }
    }
}
