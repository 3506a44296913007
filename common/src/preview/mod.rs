//! Temporary preview URLs for files picked in a product form.
//!
//! A browser object URL keeps the file's bytes alive until it is revoked.
//! [`PreviewSet`] pairs every attached file with exactly one handle and
//! revokes handles when files are removed, replaced, or when the set itself
//! is dropped, so a form cannot leak them on any exit path.

use std::collections::HashSet;
use std::fmt;

/// Creates and revokes preview URLs for files of type `F`.
pub trait PreviewSource<F> {
    fn create(&self, file: &F) -> String;
    fn revoke(&self, url: &str);
}

/// A live preview URL owned by a [`PreviewSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file waiting for upload together with its preview.
#[derive(Debug)]
pub struct Attachment<F> {
    pub file: F,
    pub preview: PreviewHandle,
}

pub struct PreviewSet<F, S: PreviewSource<F>> {
    source: S,
    items: Vec<Attachment<F>>,
    live: HashSet<PreviewHandle>,
}

impl<F, S: PreviewSource<F>> PreviewSet<F, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            live: HashSet::new(),
        }
    }

    /// Appends files, creating one handle per file.
    pub fn attach<I>(&mut self, files: I) -> Vec<PreviewHandle>
    where
        I: IntoIterator<Item = F>,
    {
        let mut created = Vec::new();
        for file in files {
            let preview = PreviewHandle(self.source.create(&file));
            self.live.insert(preview.clone());
            created.push(preview.clone());
            self.items.push(Attachment { file, preview });
        }
        created
    }

    /// Drops the current selection, then attaches `files` in its place.
    pub fn replace<I>(&mut self, files: I) -> Vec<PreviewHandle>
    where
        I: IntoIterator<Item = F>,
    {
        self.release_all();
        self.attach(files)
    }

    /// Removes the file at `index`, revoking only its own handle.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        if index >= self.items.len() {
            return None;
        }
        let attachment = self.items.remove(index);
        self.revoke(&attachment.preview);
        Some(attachment.file)
    }

    /// Revokes a handle and forgets its file. Returns `false` for a handle
    /// that is not live here (never attached or already released).
    pub fn release(&mut self, handle: &PreviewHandle) -> bool {
        if !self.live.contains(handle) {
            return false;
        }
        self.items.retain(|item| &item.preview != handle);
        self.revoke(handle);
        true
    }

    pub fn release_all(&mut self) {
        for attachment in self.items.drain(..) {
            if self.live.remove(&attachment.preview) {
                self.source.revoke(attachment.preview.url());
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment<F>> {
        self.items.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.items.iter().map(|item| &item.file)
    }

    fn revoke(&mut self, handle: &PreviewHandle) {
        if self.live.remove(handle) {
            self.source.revoke(handle.url());
        }
    }
}

impl<F, S: PreviewSource<F>> Drop for PreviewSet<F, S> {
    fn drop(&mut self) {
        self.release_all();
    }
}
