use common::form::{FormController, FormMode};
use web_sys::File;

use crate::previews::BlobUrls;

/// State of the `ProductForm` component.
pub struct ProductForm {
    /// Draft, phase and error message.
    pub form: FormController<File, BlobUrls>,

    /// Guards the one-time product fetch of the edit mode.
    pub loaded: bool,
}

impl ProductForm {
    /// Empty draft; an edit form starts in the loading phase until its
    /// product arrives.
    pub fn new(mode: FormMode) -> Self {
        Self {
            form: FormController::new(mode, BlobUrls),
            loaded: false,
        }
    }
}
