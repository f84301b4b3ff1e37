//! Remote store client for the posts/publications backend.
//!
//! Every resource family lives under `/api/{path}` on a single origin. The
//! client translates list/fetch/create/update/delete/download into HTTP
//! requests. Nothing is retried and nothing is cached.

pub mod error;
pub mod form;
pub mod http;

use std::path::{Path, PathBuf};

use crate::entity::Resource;
use crate::error::{PressError, Result};
use crate::types::FALLBACK_DOWNLOAD_NAME;

pub use form::{FormMode, PostForm, PublicationForm, ResourceForm, Upload};
pub use http::HttpStore;

/// Common interface for a remote collection of `T`
pub trait RemoteStore<T: Resource>: Send + Sync {
    /// Fetch the whole collection
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<T>>> + Send;

    /// Fetch a single record by id
    fn fetch(&self, id: &str) -> impl std::future::Future<Output = Result<T>> + Send;

    /// Submit a new record; validation failures never reach the network
    fn create(&self, form: T::Form) -> impl std::future::Future<Output = Result<T>> + Send;

    /// Submit changes to an existing record
    fn update(
        &self,
        id: &str,
        form: T::Form,
    ) -> impl std::future::Future<Output = Result<T>> + Send;

    /// Delete a record
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Fetch the binary document attached to a record
    fn download(&self, id: &str) -> impl std::future::Future<Output = Result<Download>> + Send;

    /// Turn a backend-relative asset path into a loadable URL
    fn asset_url(&self, path: &str) -> String;
}

/// A downloaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Build a download, taking the file name from a `Content-Disposition`
    /// header when one is present
    pub fn new(content_disposition: Option<&str>, bytes: Vec<u8>) -> Self {
        let file_name = content_disposition
            .and_then(disposition_file_name)
            .unwrap_or_else(|| FALLBACK_DOWNLOAD_NAME.to_string());
        Self { file_name, bytes }
    }

    /// Write the document into `dir`, creating the directory if needed
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await.map_err(|e| {
            PressError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {}", path.display(), e),
            ))
        })?;
        Ok(path)
    }
}

/// Extract a safe file name from a `Content-Disposition` header value
fn disposition_file_name(header: &str) -> Option<String> {
    let raw = header.split(';').map(str::trim).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("filename")
            .then(|| value.trim().trim_matches('"').to_string())
    })?;

    // Keep only the final path component
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// Join a backend-relative asset path onto the origin.
///
/// Backslash separators are normalized to forward slashes. Values that are
/// already absolute http(s) URLs are returned unchanged.
pub fn asset_url(origin: &str, path: &str) -> String {
    let normalized = path.replace('\\', "/");
    if normalized.starts_with("http://") || normalized.starts_with("https://") {
        return normalized;
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        normalized.trim_start_matches('/')
    )
}
