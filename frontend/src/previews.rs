use common::preview::PreviewSource;
use gloo_console::warn;
use uuid::Uuid;
use web_sys::{File, Url};

/// Object URLs backed by the browser's blob store.
///
/// Each URL pins the picked file in memory until revoked. The draft's
/// `PreviewSet` decides when that happens; this type only talks to
/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobUrls;

impl PreviewSource<File> for BlobUrls {
    fn create(&self, file: &File) -> String {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => url,
            Err(err) => {
                warn!("Could not create a preview for", file.name(), err);
                // Still unique so the handle can be tracked and released.
                format!("unavailable:{}", Uuid::new_v4())
            }
        }
    }

    fn revoke(&self, url: &str) {
        if !url.starts_with("blob:") {
            return;
        }
        if let Err(err) = Url::revoke_object_url(url) {
            warn!("Could not revoke preview", url, err);
        }
    }
}
