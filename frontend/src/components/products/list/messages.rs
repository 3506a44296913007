use common::error::Result;
use common::model::product::Product;

/// Messages of the product list.
pub enum Msg {
    /// Result of a full collection fetch.
    Loaded(Result<Vec<Product>>),
    /// Edit button of a card: open the edit route.
    Edit(i64),
    /// Delete button of a card: confirm, then send the request.
    Delete(i64),
    Deleted(Result<()>),
}
