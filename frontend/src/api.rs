//! Calls to the storefront REST API.
//!
//! Every function maps transport and status failures onto [`StoreError`] so
//! views only have to display the message. Nothing is retried.

use common::config::ApiConfig;
use common::error::{
    submit_error_message, Result, StoreError, DELETE_FAILED, LIST_FETCH_FAILED,
    PRODUCT_FETCH_FAILED, SUBMIT_FAILED,
};
use common::form::{FormMode, ProductDraft};
use common::model::product::Product;
use common::requests::FILES_PART;
use gloo_console::{error, log};
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{File, FormData};

use crate::previews::BlobUrls;

/// Base URL baked in at build time through `STOREFRONT_API_URL`.
pub fn config() -> ApiConfig {
    ApiConfig::from_override(option_env!("STOREFRONT_API_URL"))
}

/// Loads the whole product collection (`GET /api/products`).
///
/// There is no paging or caching: list views call this on mount, on every
/// search change and after every delete, then order and filter in memory.
pub async fn fetch_products() -> Result<Vec<Product>> {
    let url = config().products_url();
    log!("GET", url.as_str());
    let response = send(Request::get(&url), LIST_FETCH_FAILED).await?;
    read_json(response, LIST_FETCH_FAILED).await
}

/// Loads one product (`GET /api/products/{id}`) for the detail page and the
/// edit form.
pub async fn fetch_product(id: i64) -> Result<Product> {
    let url = config().product_url(id);
    log!("GET", url.as_str());
    let response = send(Request::get(&url), PRODUCT_FETCH_FAILED).await?;
    read_json(response, PRODUCT_FETCH_FAILED).await
}

/// Deletes a product (`DELETE /api/products/{id}`). Only the status is
/// checked; any failure becomes [`StoreError::Delete`].
pub async fn delete_product(id: i64) -> Result<()> {
    let url = config().product_url(id);
    log!("DELETE", url.as_str());
    let response = Request::delete(&url).send().await.map_err(|err| {
        error!("Delete request failed:", err.to_string());
        StoreError::Delete(DELETE_FAILED.to_string())
    })?;
    if !response.ok() {
        error!("Delete rejected with status", response.status());
        return Err(StoreError::Delete(DELETE_FAILED.to_string()));
    }
    Ok(())
}

/// Sends the draft as a multipart form: `POST` to create, `PUT` to update.
///
/// # Arguments
/// * `mode` - Chooses the method and URL.
/// * `body` - The form built by [`multipart_body`].
///
/// # Returns
/// The product as stored by the backend. A rejected request yields
/// [`StoreError::Submit`] with the backend's message when it sent one, a
/// transport failure yields the transport error text.
pub async fn submit_product(mode: FormMode, body: FormData) -> Result<Product> {
    let builder = match mode {
        FormMode::Create => Request::post(&config().products_url()),
        FormMode::Edit { id } => Request::put(&config().product_url(id)),
    };
    let request = builder.body(body).map_err(|err| {
        error!("Could not build the product request:", err.to_string());
        StoreError::Submit(SUBMIT_FAILED.to_string())
    })?;
    log!("Submitting product", format!("{mode:?}"));

    let response = request.send().await.map_err(|err| {
        error!("Product request failed:", err.to_string());
        StoreError::Submit(err.to_string())
    })?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        error!("Product rejected with status", response.status());
        return Err(StoreError::Submit(submit_error_message(&body)));
    }
    response.json::<Product>().await.map_err(|err| {
        error!("Unexpected product response:", err.to_string());
        StoreError::Submit(SUBMIT_FAILED.to_string())
    })
}

/// Builds the multipart body: text fields first, then every new file under
/// the shared `files` part.
pub fn multipart_body(
    draft: &ProductDraft<File, BlobUrls>,
    mode: FormMode,
) -> Result<FormData> {
    let failed = |_| StoreError::Submit(SUBMIT_FAILED.to_string());
    let form = FormData::new().map_err(failed)?;
    for part in draft.text_parts(mode) {
        form.append_with_str(part.name, &part.value).map_err(failed)?;
    }
    for file in draft.attachments().files() {
        form.append_with_blob_and_filename(FILES_PART, file, &file.name())
            .map_err(failed)?;
    }
    Ok(form)
}

/// Sends a read request and turns network failures and non-2xx statuses into
/// [`StoreError::Fetch`] carrying `message`.
async fn send(request: RequestBuilder, message: &str) -> Result<Response> {
    let response = request.send().await.map_err(|err| {
        error!("Request failed:", err.to_string());
        StoreError::Fetch(message.to_string())
    })?;
    if !response.ok() {
        error!("Request rejected with status", response.status());
        return Err(StoreError::Fetch(message.to_string()));
    }
    Ok(response)
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
    message: &str,
) -> Result<T> {
    response.json::<T>().await.map_err(|err| {
        error!("Unexpected response body:", err.to_string());
        StoreError::Fetch(message.to_string())
    })
}
