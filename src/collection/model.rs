//! List state and its reducer
//!
//! `ListState` holds one screen's client-side copy of a remote collection
//! plus the search/category/page selection. All changes go through
//! [`reduce_list_state`], so every transition is testable without a network
//! or a terminal.

use std::collections::HashSet;

use crate::entity::Entity;
use crate::types::Category;

use super::filter::{ListQuery, PageView, paginate};

// ============================================================================
// State Types
// ============================================================================

/// Kind of mutation currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Download,
}

impl MutationKind {
    pub fn verb(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
            MutationKind::Download => "download",
        }
    }
}

/// The single outstanding mutation of a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub kind: MutationKind,
    /// Target record; `None` for creates
    pub id: Option<String>,
}

impl Pending {
    pub fn new(kind: MutationKind, id: Option<&str>) -> Self {
        Self {
            kind,
            id: id.map(str::to_string),
        }
    }

    /// Whether this mutation targets the given record
    pub fn targets(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Client-side state of one list screen
#[derive(Debug, Clone)]
pub struct ListState<T> {
    /// Records in display order, unique by id
    pub collection: Vec<T>,
    /// Current page (1-based)
    pub page: usize,
    /// Search term matched against titles
    pub search: String,
    /// Category filter; `None` shows all
    pub category: Option<Category>,
    pub page_size: usize,
    /// A fetch is outstanding
    pub loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
    /// The outstanding mutation, if any
    pub pending: Option<Pending>,
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: Vec::new(),
            page: 1,
            search: String::new(),
            category: None,
            page_size: page_size.max(1),
            loading: false,
            error: None,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T: Entity> ListState<T> {
    fn query(&self) -> ListQuery<'_> {
        ListQuery {
            search: &self.search,
            category: self.category,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// The visible page under the current filters
    pub fn view(&self) -> PageView<'_, T> {
        paginate(&self.collection, &self.query())
    }

    pub fn page_count(&self) -> usize {
        self.view().page_count
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.collection.iter().find(|e| e.id() == id)
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// Every change a list screen can undergo
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    FetchStarted,
    FetchSucceeded(Vec<T>),
    FetchFailed(String),
    SetSearch(String),
    SetCategory(Option<Category>),
    SetPage(usize),
    NextPage,
    PrevPage,
    MutationStarted(Pending),
    Created(T),
    Updated(T),
    Deleted(String),
    /// A download finished; the collection is untouched
    Downloaded,
    MutationFailed(String),
}

impl<T> ListAction<T> {
    /// Convert the entity payload, keeping the action otherwise intact
    pub fn map<U>(self, f: impl Fn(T) -> U) -> ListAction<U> {
        match self {
            ListAction::FetchStarted => ListAction::FetchStarted,
            ListAction::FetchSucceeded(items) => {
                ListAction::FetchSucceeded(items.into_iter().map(f).collect())
            }
            ListAction::FetchFailed(msg) => ListAction::FetchFailed(msg),
            ListAction::SetSearch(term) => ListAction::SetSearch(term),
            ListAction::SetCategory(c) => ListAction::SetCategory(c),
            ListAction::SetPage(n) => ListAction::SetPage(n),
            ListAction::NextPage => ListAction::NextPage,
            ListAction::PrevPage => ListAction::PrevPage,
            ListAction::MutationStarted(p) => ListAction::MutationStarted(p),
            ListAction::Created(e) => ListAction::Created(f(e)),
            ListAction::Updated(e) => ListAction::Updated(f(e)),
            ListAction::Deleted(id) => ListAction::Deleted(id),
            ListAction::Downloaded => ListAction::Downloaded,
            ListAction::MutationFailed(msg) => ListAction::MutationFailed(msg),
        }
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Drop later entities whose id was already seen
fn dedup_by_id<T: Entity>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|e| seen.insert(e.id().to_string()))
        .collect()
}

fn clamp_page<T: Entity>(state: &ListState<T>, page: usize) -> usize {
    page.clamp(1, state.page_count())
}

/// Apply an action to the list state
pub fn reduce_list_state<T: Entity>(mut state: ListState<T>, action: ListAction<T>) -> ListState<T> {
    match action {
        ListAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        ListAction::FetchSucceeded(items) => {
            state.collection = dedup_by_id(items);
            state.loading = false;
            state.error = None;
            state.page = 1;
        }
        ListAction::FetchFailed(message) => {
            state.collection.clear();
            state.loading = false;
            state.error = Some(message);
            state.page = 1;
        }
        ListAction::SetSearch(term) => {
            state.search = term;
            state.page = 1;
        }
        ListAction::SetCategory(category) => {
            state.category = category;
            state.page = 1;
        }
        ListAction::SetPage(page) => {
            state.page = clamp_page(&state, page);
        }
        ListAction::NextPage => {
            state.page = clamp_page(&state, state.page.saturating_add(1));
        }
        ListAction::PrevPage => {
            state.page = clamp_page(&state, state.page.saturating_sub(1));
        }
        ListAction::MutationStarted(pending) => {
            state.pending = Some(pending);
        }
        ListAction::Created(entity) => {
            state.collection.retain(|e| e.id() != entity.id());
            state.collection.insert(0, entity);
            state.pending = None;
        }
        ListAction::Updated(entity) => {
            if let Some(slot) = state.collection.iter_mut().find(|e| e.id() == entity.id()) {
                *slot = entity;
            } else {
                tracing::debug!("update for unknown id {} ignored", entity.id());
            }
            state.pending = None;
        }
        ListAction::Deleted(id) => {
            state.collection.retain(|e| e.id() != id);
            state.pending = None;
            // Deleting the last row of the last page leaves the page empty
            state.page = clamp_page(&state, state.page);
        }
        ListAction::Downloaded => {
            state.pending = None;
        }
        ListAction::MutationFailed(message) => {
            tracing::debug!("mutation failed: {message}");
            state.pending = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: String,
        category: String,
    }

    impl Entity for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn title(&self) -> &str {
            &self.title
        }
        fn category(&self) -> Option<&str> {
            Some(&self.category)
        }
    }

    fn row(id: &str, title: &str) -> Row {
        Row {
            id: id.to_string(),
            title: title.to_string(),
            category: "Food".to_string(),
        }
    }

    fn ids(state: &ListState<Row>) -> Vec<&str> {
        state.collection.iter().map(|r| r.id.as_str()).collect()
    }

    fn loaded(rows: Vec<Row>, page_size: usize) -> ListState<Row> {
        reduce_list_state(ListState::new(page_size), ListAction::FetchSucceeded(rows))
    }

    fn numbered(n: usize) -> Vec<Row> {
        (1..=n).map(|i| row(&i.to_string(), &format!("post {i}"))).collect()
    }

    #[test]
    fn test_fetch_lifecycle() {
        let state = reduce_list_state(ListState::<Row>::new(6), ListAction::FetchStarted);
        assert!(state.loading);
        assert!(state.error.is_none());

        let state = reduce_list_state(state, ListAction::FetchSucceeded(numbered(3)));
        assert!(!state.loading);
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_fetch_failure_sets_error_and_empties() {
        let state = loaded(numbered(3), 6);
        let state = reduce_list_state(state, ListAction::FetchStarted);
        let state = reduce_list_state(state, ListAction::FetchFailed("offline".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert!(state.collection.is_empty());
    }

    #[test]
    fn test_fetch_drops_duplicate_ids_first_wins() {
        let state = loaded(vec![row("a", "first"), row("b", "b"), row("a", "second")], 6);
        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(state.collection[0].title, "first");
    }

    #[test]
    fn test_fetch_resets_page() {
        let mut state = loaded(numbered(10), 3);
        state = reduce_list_state(state, ListAction::SetPage(3));
        assert_eq!(state.page, 3);
        state = reduce_list_state(state, ListAction::FetchSucceeded(numbered(10)));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_and_category_reset_page() {
        let mut state = loaded(numbered(20), 4);
        state = reduce_list_state(state, ListAction::SetPage(4));
        state = reduce_list_state(state, ListAction::SetSearch("post".to_string()));
        assert_eq!(state.page, 1);

        state = reduce_list_state(state, ListAction::SetPage(2));
        state = reduce_list_state(state, ListAction::SetCategory(Some(Category::Food)));
        assert_eq!(state.page, 1);

        state = reduce_list_state(state, ListAction::SetPage(2));
        state = reduce_list_state(state, ListAction::SetCategory(None));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = loaded(numbered(7), 6);
        state = reduce_list_state(state, ListAction::PrevPage);
        assert_eq!(state.page, 1);
        state = reduce_list_state(state, ListAction::NextPage);
        assert_eq!(state.page, 2);
        state = reduce_list_state(state, ListAction::NextPage);
        assert_eq!(state.page, 2);
        state = reduce_list_state(state, ListAction::SetPage(99));
        assert_eq!(state.page, 2);
        state = reduce_list_state(state, ListAction::SetPage(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_seven_posts_second_page_shows_one() {
        let state = loaded(numbered(7), 6);
        assert_eq!(state.view().items.len(), 6);
        let state = reduce_list_state(state, ListAction::NextPage);
        let view = state.view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "7");
    }

    #[test]
    fn test_create_prepends_exactly_one() {
        let state = loaded(numbered(3), 6);
        let before = state.collection.len();
        let state = reduce_list_state(
            state,
            ListAction::MutationStarted(Pending::new(MutationKind::Create, None)),
        );
        assert!(state.is_busy());

        let state = reduce_list_state(state, ListAction::Created(row("new", "fresh")));
        assert_eq!(state.collection.len(), before + 1);
        assert_eq!(state.collection[0].id, "new");
        assert_eq!(state.collection.iter().filter(|r| r.id == "new").count(), 1);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_create_replaces_stale_copy() {
        let state = loaded(vec![row("a", "a"), row("b", "old b")], 6);
        let state = reduce_list_state(state, ListAction::Created(row("b", "new b")));
        assert_eq!(ids(&state), vec!["b", "a"]);
        assert_eq!(state.collection[0].title, "new b");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let state = loaded(numbered(3), 6);
        let state = reduce_list_state(state, ListAction::Updated(row("2", "edited")));
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        assert_eq!(state.collection[1].title, "edited");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let state = loaded(numbered(3), 6);
        let state = reduce_list_state(
            state,
            ListAction::MutationStarted(Pending::new(MutationKind::Update, Some("9"))),
        );
        let state = reduce_list_state(state, ListAction::Updated(row("9", "ghost")));
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_delete_removes_and_keeps_order() {
        let state = loaded(numbered(5), 6);
        let state = reduce_list_state(state, ListAction::Deleted("3".to_string()));
        assert_eq!(ids(&state), vec!["1", "2", "4", "5"]);
        assert!(state.find("3").is_none());
    }

    #[test]
    fn test_delete_last_item_on_last_page_steps_back() {
        let state = loaded(numbered(7), 6);
        let state = reduce_list_state(state, ListAction::SetPage(2));
        let state = reduce_list_state(state, ListAction::Deleted("7".to_string()));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_failed_mutation_leaves_collection() {
        let state = loaded(numbered(3), 6);
        let state = reduce_list_state(
            state,
            ListAction::MutationStarted(Pending::new(MutationKind::Delete, Some("2"))),
        );
        assert!(state.pending.as_ref().unwrap().targets("2"));
        let state = reduce_list_state(state, ListAction::MutationFailed("500".to_string()));
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_download_clears_pending() {
        let state = loaded(numbered(2), 6);
        let state = reduce_list_state(
            state,
            ListAction::MutationStarted(Pending::new(MutationKind::Download, Some("1"))),
        );
        let state = reduce_list_state(state, ListAction::Downloaded);
        assert!(state.pending.is_none());
        assert_eq!(ids(&state), vec!["1", "2"]);
    }

    #[test]
    fn test_ids_stay_unique_through_mutations() {
        let mut state = loaded(numbered(4), 2);
        let actions = vec![
            ListAction::Created(row("2", "dup create")),
            ListAction::Created(row("9", "nine")),
            ListAction::Updated(row("9", "nine again")),
            ListAction::Deleted("1".to_string()),
            ListAction::Created(row("9", "nine thrice")),
        ];
        for action in actions {
            state = reduce_list_state(state, action);
            let unique: HashSet<&str> = state.collection.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(unique.len(), state.collection.len());
        }
        assert_eq!(ids(&state), vec!["9", "2", "3", "4"]);
    }

    #[test]
    fn test_action_map_converts_payloads() {
        let action: ListAction<Row> = ListAction::FetchSucceeded(numbered(2));
        let mapped = action.map(|r| r.id);
        assert_eq!(
            mapped,
            ListAction::FetchSucceeded(vec!["1".to_string(), "2".to_string()])
        );

        let action: ListAction<Row> = ListAction::Deleted("x".to_string());
        assert_eq!(action.map(|r| r.id), ListAction::Deleted("x".to_string()));
    }
}
