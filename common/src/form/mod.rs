//! Product form state shared by the create and edit views.

mod controller;
mod draft;

pub use controller::{AfterSubmit, FormController, FormPhase, SubmitStart};
pub use draft::{Field, ProductDraft};

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

pub const CREATE_INCOMPLETE: &str = "Vui lòng điền đầy đủ thông tin và chọn ít nhất 1 ảnh";
pub const EDIT_INCOMPLETE: &str = "Vui lòng điền đầy đủ thông tin sản phẩm";
pub const INVALID_PRICE: &str = "Giá sản phẩm không hợp lệ";
pub const INVALID_QUANTITY: &str = "Số lượng không hợp lệ";
