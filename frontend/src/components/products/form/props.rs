use common::form::FormMode;
use yew::prelude::*;

/// Properties for the `ProductForm` component.
///
/// `mode` decides between creating (`POST`, empty draft, at least one image
/// required) and editing (`GET` the product first, then `PUT`).
#[derive(Properties, PartialEq, Clone)]
pub struct ProductFormProps {
    /// Create or edit; a change of mode resets the form.
    pub mode: FormMode,
}
