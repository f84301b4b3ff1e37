//! Backend access for the dashboard
//!
//! Wraps one [`RemoteCollection`] per resource and converts their results into
//! [`RecordRow`] actions, so the component only ever deals with one row type.

use std::path::PathBuf;
use std::sync::Arc;

use crate::collection::{
    ListAction, MutationKind, Pending, RemoteCollection, settle_fetch, settle_mutation,
};
use crate::config::Config;
use crate::entity::{Post, Publication};
use crate::error::Result;
use crate::notify::{Notifier, ToastQueue};
use crate::remote::{HttpStore, RemoteStore};
use crate::types::ResourceKind;

use super::state::RecordRow;

/// Request handles shared by the dashboard's async handlers
#[derive(Clone)]
pub struct BrowseServices {
    pub posts: RemoteCollection<Post, HttpStore<Post>>,
    pub publications: RemoteCollection<Publication, HttpStore<Publication>>,
    pub toasts: ToastQueue,
    pub download_dir: PathBuf,
    pub posts_page_size: usize,
    pub publications_page_size: usize,
}

impl BrowseServices {
    pub fn from_config(config: &Config) -> Result<Self> {
        let toasts = ToastQueue::new(config.toast_duration());
        let notifier: Arc<dyn Notifier> = Arc::new(toasts.clone());
        Ok(Self {
            posts: RemoteCollection::new(
                Arc::new(HttpStore::from_config(config)?),
                Arc::clone(&notifier),
            ),
            publications: RemoteCollection::new(
                Arc::new(HttpStore::from_config(config)?),
                notifier,
            ),
            toasts,
            download_dir: config.download_dir(),
            posts_page_size: config.page_size(ResourceKind::Posts),
            publications_page_size: config.page_size(ResourceKind::Publications),
        })
    }

    /// Discard every outstanding request
    pub fn cancel(&self) {
        self.posts.scope().cancel();
        self.publications.scope().cancel();
    }

    /// Check the single mutation slot of `kind`'s list
    pub fn begin(
        &self,
        kind: ResourceKind,
        pending: Option<&Pending>,
        mutation: MutationKind,
        id: &str,
    ) -> Result<ListAction<RecordRow>> {
        match kind {
            ResourceKind::Posts => self.posts.begin(pending, mutation, Some(id)),
            ResourceKind::Publications => self.publications.begin(pending, mutation, Some(id)),
        }
    }

    /// Load a resource; `None` when the dashboard closed first
    pub async fn fetch(&self, kind: ResourceKind) -> Option<ListAction<RecordRow>> {
        match kind {
            ResourceKind::Posts => {
                let store = self.posts.store();
                let result = self.posts.fetch().await?;
                Some(settle_fetch(result).map(|p| post_row(store, &p)))
            }
            ResourceKind::Publications => {
                let store = self.publications.store();
                let result = self.publications.fetch().await?;
                Some(settle_fetch(result).map(|p| publication_row(store, &p)))
            }
        }
    }

    pub async fn delete(&self, kind: ResourceKind, id: String) -> Option<ListAction<RecordRow>> {
        match kind {
            ResourceKind::Posts => {
                let store = self.posts.store();
                let result = self.posts.delete(&id).await?;
                Some(settle_mutation(result).map(|p| post_row(store, &p)))
            }
            ResourceKind::Publications => {
                let store = self.publications.store();
                let result = self.publications.delete(&id).await?;
                Some(settle_mutation(result).map(|p| publication_row(store, &p)))
            }
        }
    }

    /// Save a publication's PDF into the configured download directory
    pub async fn download(&self, id: String) -> Option<ListAction<RecordRow>> {
        let result = self.publications.download(&id, &self.download_dir).await?;
        Some(match result {
            Ok(_) => ListAction::Downloaded,
            Err(e) => ListAction::MutationFailed(e.to_string()),
        })
    }
}

fn post_row(store: &HttpStore<Post>, post: &Post) -> RecordRow {
    RecordRow::from_post(post, |path| store.asset_url(path))
}

fn publication_row(store: &HttpStore<Publication>, publication: &Publication) -> RecordRow {
    RecordRow::from_publication(publication, |path| store.asset_url(path))
}
