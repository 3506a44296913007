use common::error::Result;
use common::form::{Field, FormMode};
use common::model::product::Product;
use web_sys::File;

/// Messages of the product form. Responses carry the product id or form
/// mode they were requested for, so late answers to an earlier route can be
/// recognised and dropped.
pub enum Msg {
    Loaded(i64, Result<Product>),
    SetField(Field, String),
    FilesSelected(Vec<File>),
    RemoveAttachment(usize),
    RemoveExisting(usize),
    Submit,
    Submitted(FormMode, Result<Product>),
}
