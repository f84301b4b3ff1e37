//! Request orchestration for list screens
//!
//! [`RemoteCollection`] runs store requests inside a [`ScreenScope`] and
//! turns their results into reducer actions, notifying on success and on
//! failure. [`CollectionScreen`] pairs it with a [`ListState`] for callers
//! that drive one screen sequentially (the CLI and tests); the dashboard
//! uses `RemoteCollection` directly from its async handlers.

use std::future::Future;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::watch;

use crate::entity::Resource;
use crate::error::{PressError, Result};
use crate::notify::Notifier;
use crate::remote::RemoteStore;
use crate::types::Category;

use super::filter::PageView;
use super::model::{ListAction, ListState, MutationKind, Pending, reduce_list_state};

// ============================================================================
// Cancellation
// ============================================================================

/// Lifetime of one screen.
///
/// Requests run through [`ScreenScope::guard`]; once the scope is cancelled,
/// outstanding requests are dropped and late results are discarded instead
/// of being applied to a screen that no longer exists.
#[derive(Debug, Clone)]
pub struct ScreenScope {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the scope is cancelled
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            let cancelled = *rx.borrow_and_update();
            if cancelled {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender gone: nobody can cancel anymore
                std::future::pending::<()>().await;
            }
        }
    }

    /// Run `fut` unless the scope is cancelled first.
    ///
    /// Returns `None` when cancellation won, including when the future
    /// completed but the scope was cancelled in the meantime.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => (!self.is_cancelled()).then_some(out),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reducer action for a finished fetch; failures become `FetchFailed`
pub fn settle_fetch<T>(result: Result<ListAction<T>>) -> ListAction<T> {
    result.unwrap_or_else(|e| ListAction::FetchFailed(e.to_string()))
}

/// Reducer action for a finished mutation; failures become `MutationFailed`
pub fn settle_mutation<T>(result: Result<ListAction<T>>) -> ListAction<T> {
    result.unwrap_or_else(|e| ListAction::MutationFailed(e.to_string()))
}

/// Store requests for one entity family, scoped to one screen
pub struct RemoteCollection<T, S> {
    store: Arc<S>,
    notifier: Arc<dyn Notifier>,
    scope: ScreenScope,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S> Clone for RemoteCollection<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            scope: self.scope.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Resource, S: RemoteStore<T>> RemoteCollection<T, S> {
    pub fn new(store: Arc<S>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            scope: ScreenScope::new(),
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Reserve the screen's single mutation slot.
    ///
    /// Rejects with `Busy` (and a warning) while another mutation is pending.
    /// `pending` is whatever the caller's state currently holds, so callers
    /// keeping their own view model can share the check.
    pub fn begin<U>(
        &self,
        pending: Option<&Pending>,
        kind: MutationKind,
        id: Option<&str>,
    ) -> Result<ListAction<U>> {
        if let Some(pending) = pending {
            let message = format!(
                "Please wait: a {} {} is still in progress",
                T::LABEL,
                pending.kind.verb()
            );
            tracing::warn!("{} {:?} rejected: {message}", kind.verb(), id);
            self.notifier.warning(&message);
            return Err(PressError::Busy(T::LABEL.to_string()));
        }
        Ok(ListAction::MutationStarted(Pending::new(kind, id)))
    }

    fn discarded(&self, what: &str) {
        tracing::warn!("{what} result for {} discarded after screen closed", T::PATH);
    }

    /// Load the whole collection
    pub async fn fetch(&self) -> Option<Result<ListAction<T>>> {
        let Some(result) = self.scope.guard(self.store.list()).await else {
            self.discarded("fetch");
            return None;
        };
        Some(match result {
            Ok(items) => {
                tracing::debug!("loaded {} {}", items.len(), T::PATH);
                Ok(ListAction::FetchSucceeded(items))
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to fetch {}: {e}", T::PATH));
                Err(e)
            }
        })
    }

    pub async fn create(&self, form: T::Form) -> Option<Result<ListAction<T>>> {
        let Some(result) = self.scope.guard(self.store.create(form)).await else {
            self.discarded("create");
            return None;
        };
        Some(match result {
            Ok(entity) => {
                self.notifier
                    .success(&format!("{} added successfully!", capitalize(T::LABEL)));
                Ok(ListAction::Created(entity))
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to add {}: {e}", T::LABEL));
                Err(e)
            }
        })
    }

    pub async fn update(&self, id: &str, form: T::Form) -> Option<Result<ListAction<T>>> {
        let Some(result) = self.scope.guard(self.store.update(id, form)).await else {
            self.discarded("update");
            return None;
        };
        Some(match result {
            Ok(entity) => {
                self.notifier
                    .success(&format!("{} updated successfully!", capitalize(T::LABEL)));
                Ok(ListAction::Updated(entity))
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to update {}: {e}", T::LABEL));
                Err(e)
            }
        })
    }

    pub async fn delete(&self, id: &str) -> Option<Result<ListAction<T>>> {
        let Some(result) = self.scope.guard(self.store.delete(id)).await else {
            self.discarded("delete");
            return None;
        };
        Some(match result {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} deleted successfully", capitalize(T::LABEL)));
                Ok(ListAction::Deleted(id.to_string()))
            }
            Err(e) => {
                self.notifier.error(&format!("Deletion failed: {e}"));
                Err(e)
            }
        })
    }

    async fn fetch_document(&self, id: &str, dir: &Path) -> Result<PathBuf> {
        let download = self.store.download(id).await?;
        download.save_to(dir).await
    }

    /// Fetch a record's document and write it into `dir`
    pub async fn download(&self, id: &str, dir: &Path) -> Option<Result<PathBuf>> {
        let Some(result) = self.scope.guard(self.fetch_document(id, dir)).await else {
            self.discarded("download");
            return None;
        };
        Some(match result {
            Ok(path) => {
                self.notifier
                    .success(&format!("Download successful! Saved to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                self.notifier.error(&format!("Download failed: {e}"));
                Err(e)
            }
        })
    }
}

// ============================================================================
// Screen
// ============================================================================

/// One list screen: state plus the controller that feeds it.
///
/// Dropping the screen cancels its scope.
pub struct CollectionScreen<T: Resource, S: RemoteStore<T>> {
    state: ListState<T>,
    remote: RemoteCollection<T, S>,
}

impl<T: Resource, S: RemoteStore<T>> CollectionScreen<T, S> {
    pub fn new(store: Arc<S>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            state: ListState::new(page_size),
            remote: RemoteCollection::new(store, notifier),
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn remote(&self) -> &RemoteCollection<T, S> {
        &self.remote
    }

    pub fn view(&self) -> PageView<'_, T> {
        self.state.view()
    }

    pub fn dispatch(&mut self, action: ListAction<T>) {
        let page_size = self.state.page_size;
        let state = std::mem::replace(&mut self.state, ListState::new(page_size));
        self.state = reduce_list_state(state, action);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.dispatch(ListAction::SetSearch(term.into()));
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.dispatch(ListAction::SetCategory(category));
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(ListAction::SetPage(page));
    }

    /// Fetch the collection, replacing what the screen holds
    pub async fn load(&mut self) -> Result<()> {
        self.dispatch(ListAction::FetchStarted);
        let outcome = self.remote.fetch().await;
        self.settle(outcome, settle_fetch)
    }

    pub async fn create(&mut self, form: T::Form) -> Result<()> {
        let started = self.remote.begin(self.state.pending.as_ref(), MutationKind::Create, None)?;
        self.dispatch(started);
        let outcome = self.remote.create(form).await;
        self.settle(outcome, settle_mutation)
    }

    pub async fn update(&mut self, id: &str, form: T::Form) -> Result<()> {
        let started = self.remote.begin(self.state.pending.as_ref(), MutationKind::Update, Some(id))?;
        self.dispatch(started);
        let outcome = self.remote.update(id, form).await;
        self.settle(outcome, settle_mutation)
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let started = self.remote.begin(self.state.pending.as_ref(), MutationKind::Delete, Some(id))?;
        self.dispatch(started);
        let outcome = self.remote.delete(id).await;
        self.settle(outcome, settle_mutation)
    }

    /// Download a record's document into `dir`, returning the written path
    pub async fn download(&mut self, id: &str, dir: &Path) -> Result<Option<PathBuf>> {
        let started = self.remote.begin(self.state.pending.as_ref(), MutationKind::Download, Some(id))?;
        self.dispatch(started);
        match self.remote.download(id, dir).await {
            None => Ok(None),
            Some(Ok(path)) => {
                self.dispatch(ListAction::Downloaded);
                Ok(Some(path))
            }
            Some(Err(e)) => {
                self.dispatch(ListAction::MutationFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Apply a finished request, returning the original error on failure
    fn settle(
        &mut self,
        outcome: Option<Result<ListAction<T>>>,
        on_error: fn(Result<ListAction<T>>) -> ListAction<T>,
    ) -> Result<()> {
        match outcome {
            None => Ok(()),
            Some(Ok(action)) => {
                self.dispatch(action);
                Ok(())
            }
            Some(Err(e)) => {
                self.dispatch(on_error(Err(PressError::Other(e.to_string()))));
                Err(e)
            }
        }
    }
}

impl<T: Resource, S: RemoteStore<T>> Drop for CollectionScreen<T, S> {
    fn drop(&mut self) {
        self.remote.scope().cancel();
    }
}
