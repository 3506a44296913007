use common::catalog::ListConfig;
use yew::prelude::*;

/// Properties for the `ProductList` component.
#[derive(Properties, PartialEq, Clone)]
pub struct ProductListProps {
    /// Ordering, filtering and tooltip options. Defaults to the home page
    /// setup: newest first, no search.
    #[prop_or_default]
    pub config: ListConfig,

    /// Search term, usually taken from the `search` query parameter. Ignored
    /// unless `config.enable_search` is set.
    #[prop_or_default]
    pub search: String,
}
