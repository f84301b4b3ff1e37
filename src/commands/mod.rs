//! Command implementations behind the CLI
//!
//! Every command builds its output twice: a JSON value for `--json` and a
//! human-readable text rendering. Notifications go to stderr through the
//! screen's notifier; only data reaches stdout.

mod browse;
mod categories;
mod config;
mod posts;
mod publications;

pub use browse::cmd_browse;
pub use categories::cmd_categories;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use posts::{PostArgs, cmd_posts_add, cmd_posts_edit, cmd_posts_ls, cmd_posts_rm, cmd_posts_show};
pub use publications::{
    PublicationArgs, cmd_publications_add, cmd_publications_download, cmd_publications_edit,
    cmd_publications_ls, cmd_publications_rm,
};

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::collection::CollectionScreen;
use crate::config::Config;
use crate::entity::Resource;
use crate::error::Result;
use crate::notify::{ConsoleNotifier, Notifier};
use crate::remote::{HttpStore, Upload};
use crate::types::ResourceKind;

/// Output of a command in both renderings
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, otherwise the text (falling back to JSON)
    pub fn print(self, json: bool) -> Result<()> {
        match (json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// A list screen backed by the configured backend
pub(crate) type HttpScreen<T> = CollectionScreen<T, HttpStore<T>>;

/// Open a screen for `T`, with notifications on stderr.
///
/// `json` silences success notifications so stdout stays machine-readable
/// and stderr only carries problems.
pub(crate) fn open_screen<T: Resource>(
    config: &Config,
    kind: ResourceKind,
    json: bool,
) -> Result<HttpScreen<T>> {
    let store = Arc::new(HttpStore::<T>::from_config(config)?);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::new(json));
    Ok(CollectionScreen::new(store, notifier, config.page_size(kind)))
}

/// Read an optional upload path
pub(crate) async fn read_upload(path: Option<&Path>) -> Result<Option<Upload>> {
    match path {
        Some(path) => Ok(Some(Upload::from_path(path).await?)),
        None => Ok(None),
    }
}

/// Replace `target` when a value was supplied
pub(crate) fn overlay(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay() {
        let mut value = "old".to_string();
        overlay(&mut value, None);
        assert_eq!(value, "old");
        overlay(&mut value, Some("new".to_string()));
        assert_eq!(value, "new");
    }

    #[tokio::test]
    async fn test_read_upload() {
        assert!(read_upload(None).await.unwrap().is_none());

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"png").unwrap();

        let upload = read_upload(Some(&path)).await.unwrap().unwrap();
        assert_eq!(upload.file_name, "cover.png");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.bytes, b"png");

        let missing = dir.path().join("missing.pdf");
        assert!(read_upload(Some(&missing)).await.is_err());
    }
}
