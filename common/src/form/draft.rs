use crate::display::price_input_value;
use crate::error::{Result, StoreError};
use crate::model::product::Product;
use crate::preview::{PreviewHandle, PreviewSet, PreviewSource};
use crate::requests::{EXISTING_IMAGES_PART, TextPart, existing_images_json};

use super::{CREATE_INCOMPLETE, EDIT_INCOMPLETE, FormMode, INVALID_PRICE, INVALID_QUANTITY};

/// Editable scalar fields of a product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    Quantity,
    Description,
    Category,
}

/// Values typed into a product form, kept as raw text until submission.
pub struct ProductDraft<F, S: PreviewSource<F>> {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
    pub category: String,
    existing_images: Vec<String>,
    attachments: PreviewSet<F, S>,
}

impl<F, S: PreviewSource<F>> ProductDraft<F, S> {
    pub fn new(previews: S) -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            quantity: String::new(),
            description: String::new(),
            category: String::new(),
            existing_images: Vec::new(),
            attachments: PreviewSet::new(previews),
        }
    }

    /// Copies a loaded product into the form. New attachments are kept.
    pub fn populate(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.price = price_input_value(product.price);
        self.quantity = product.quantity.to_string();
        self.description = product.description.clone();
        self.category = product.category.clone();
        self.existing_images = product.image_urls.clone();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::Description => &self.description,
            Field::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Price => self.price = value,
            Field::Quantity => self.quantity = value,
            Field::Description => self.description = value,
            Field::Category => self.category = value,
        }
    }

    pub fn existing_images(&self) -> &[String] {
        &self.existing_images
    }

    pub fn remove_existing(&mut self, index: usize) -> Option<String> {
        (index < self.existing_images.len()).then(|| self.existing_images.remove(index))
    }

    pub fn attachments(&self) -> &PreviewSet<F, S> {
        &self.attachments
    }

    /// Adds picked files after the current ones.
    pub fn attach(&mut self, files: Vec<F>) -> Vec<PreviewHandle> {
        self.attachments.attach(files)
    }

    /// Uses `files` as the whole new selection.
    pub fn replace_attachments(&mut self, files: Vec<F>) -> Vec<PreviewHandle> {
        self.attachments.replace(files)
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<F> {
        self.attachments.remove(index)
    }

    pub fn release_previews(&mut self) {
        self.attachments.release_all();
    }

    /// Checks the draft before anything is sent.
    ///
    /// Creating needs every field and at least one new image. Editing only
    /// needs name, price, description and category because stored images
    /// may remain and the quantity was loaded from the product.
    pub fn validate(&self, mode: FormMode) -> Result<()> {
        let filled = |value: &str| !value.trim().is_empty();
        let complete = match mode {
            FormMode::Create => {
                filled(&self.name)
                    && filled(&self.price)
                    && filled(&self.quantity)
                    && filled(&self.description)
                    && filled(&self.category)
                    && !self.attachments.is_empty()
            }
            FormMode::Edit { .. } => {
                filled(&self.name)
                    && filled(&self.price)
                    && filled(&self.description)
                    && filled(&self.category)
            }
        };
        if !complete {
            let message = match mode {
                FormMode::Create => CREATE_INCOMPLETE,
                FormMode::Edit { .. } => EDIT_INCOMPLETE,
            };
            return Err(StoreError::Validation(message.to_string()));
        }

        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => {}
            _ => return Err(StoreError::Validation(INVALID_PRICE.to_string())),
        }
        if filled(&self.quantity) && self.quantity.trim().parse::<u32>().is_err() {
            return Err(StoreError::Validation(INVALID_QUANTITY.to_string()));
        }
        Ok(())
    }

    /// Text parts of the multipart body, in the order the backend reads
    /// them. Edits also carry the JSON list of stored images to keep.
    pub fn text_parts(&self, mode: FormMode) -> Vec<TextPart> {
        let mut parts = vec![
            TextPart::new("name", self.name.trim()),
            TextPart::new("price", self.price.trim()),
            TextPart::new("quantity", self.quantity.trim()),
            TextPart::new("description", self.description.as_str()),
            TextPart::new("category", self.category.trim()),
        ];
        if let FormMode::Edit { .. } = mode {
            parts.push(TextPart::new(
                EXISTING_IMAGES_PART,
                existing_images_json(&self.existing_images),
            ));
        }
        parts
    }
}
