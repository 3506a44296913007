use crate::error::{DELETE_FAILED, LIST_FETCH_FAILED, Result};
use crate::model::product::Product;

use super::{ListConfig, arrange};

/// What the list view must do after a delete request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The product is gone: reload the whole list.
    Reload,
    /// Show this message in a blocking alert and keep the list as is.
    Alert(String),
}

/// State of one product list instance.
///
/// Every load is a full reload followed by a full in-memory re-arrange; there
/// is no incremental update. Only one request is in flight at a time: asking
/// for a load while one is running queues exactly one follow-up load.
#[derive(Debug, Clone)]
pub struct ListController {
    config: ListConfig,
    search: String,
    products: Vec<Product>,
    loading: bool,
    reload_queued: bool,
    error: Option<String>,
}

impl ListController {
    pub fn new(config: ListConfig, search: impl Into<String>) -> Self {
        Self {
            config,
            search: search.into(),
            products: Vec::new(),
            loading: false,
            reload_queued: false,
            error: None,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Products ready for display, already ordered and filtered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` when the caller must issue the list request now.
    pub fn request_load(&mut self) -> bool {
        if self.loading {
            self.reload_queued = true;
            return false;
        }
        self.loading = true;
        true
    }

    /// Changes the search term. Any change requires a full reload; the
    /// return value has the meaning of [`ListController::request_load`].
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.request_load()
    }

    /// Changes the configuration and reloads when it differs.
    pub fn set_config(&mut self, config: ListConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.request_load()
    }

    /// Stores the result of a list request. Returns `true` when a queued
    /// reload must be issued right away.
    pub fn on_loaded(&mut self, result: Result<Vec<Product>>) -> bool {
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = arrange(products, &self.config, &self.search);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LIST_FETCH_FAILED.to_string());
            }
        }
        if self.reload_queued {
            self.reload_queued = false;
            self.loading = true;
            return true;
        }
        false
    }

    /// The product to delete, or `None` when the user declined.
    pub fn delete_target(&self, id: i64, confirmed: bool) -> Option<i64> {
        confirmed.then_some(id)
    }

    pub fn on_deleted(&self, result: Result<()>) -> DeleteOutcome {
        match result {
            Ok(()) => DeleteOutcome::Reload,
            Err(_) => DeleteOutcome::Alert(DELETE_FAILED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;
    use crate::error::StoreError;

    fn loaded() -> Vec<Product> {
        vec![
            product(1, "Áo thun", "", "Thời trang"),
            product(3, "Quần jean", "", "Thời trang"),
        ]
    }

    #[test]
    fn load_arranges_newest_first() {
        let mut list = ListController::new(ListConfig::home(), "");
        assert!(list.request_load());
        assert!(list.is_loading());
        assert!(!list.on_loaded(Ok(loaded())));
        assert!(!list.is_loading());
        let ids: Vec<i64> = list.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn search_term_filters_loaded_products() {
        let mut list = ListController::new(ListConfig::searchable(), "áo");
        list.request_load();
        list.on_loaded(Ok(loaded()));
        assert_eq!(list.products().len(), 1);
        assert_eq!(list.products()[0].name, "Áo thun");
    }

    #[test]
    fn one_request_in_flight_and_one_queued_reload() {
        let mut list = ListController::new(ListConfig::searchable(), "");
        assert!(list.request_load());
        assert!(!list.set_search("jean"));
        assert!(!list.request_load());
        // The queued reload is issued once, after the first one settles.
        assert!(list.on_loaded(Ok(loaded())));
        assert!(list.is_loading());
        assert!(!list.on_loaded(Ok(loaded())));
        assert_eq!(list.products().len(), 1);
    }

    #[test]
    fn unchanged_search_does_not_reload() {
        let mut list = ListController::new(ListConfig::searchable(), "jean");
        assert!(!list.set_search("jean"));
        assert!(list.set_search("áo"));
    }

    #[test]
    fn failed_load_reports_generic_message_and_keeps_previous_list() {
        let mut list = ListController::new(ListConfig::home(), "");
        list.request_load();
        list.on_loaded(Ok(loaded()));
        list.request_load();
        list.on_loaded(Err(StoreError::Fetch("boom".into())));
        assert_eq!(list.error(), Some(LIST_FETCH_FAILED));
        assert_eq!(list.products().len(), 2);
    }

    #[test]
    fn confirmed_delete_reloads_exactly_once() {
        let mut list = ListController::new(ListConfig::home(), "");
        assert_eq!(list.delete_target(3, true), Some(3));
        let outcome = list.on_deleted(Ok(()));
        assert_eq!(outcome, DeleteOutcome::Reload);
        assert!(list.request_load());
        assert!(!list.on_loaded(Ok(loaded())));
        assert!(!list.is_loading());
    }

    #[test]
    fn declined_delete_issues_nothing() {
        let list = ListController::new(ListConfig::home(), "");
        assert_eq!(list.delete_target(3, false), None);
    }

    #[test]
    fn failed_delete_alerts_and_keeps_list() {
        let mut list = ListController::new(ListConfig::home(), "");
        list.request_load();
        list.on_loaded(Ok(loaded()));
        let outcome = list.on_deleted(Err(StoreError::Delete("500".into())));
        assert_eq!(outcome, DeleteOutcome::Alert(DELETE_FAILED.to_string()));
        assert_eq!(list.products().len(), 2);
    }
}
