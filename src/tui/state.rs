//! Dashboard view model
//!
//! Both resources are shown through [`RecordRow`], a flattened record that
//! carries what the list and detail panes render. Each resource keeps its own
//! [`ListState`], so switching back and forth preserves search, category and
//! page.

use crate::collection::{ListAction, ListState, reduce_list_state};
use crate::entity::{Entity, Post, Publication};
use crate::types::{Category, ResourceKind};

use super::keymap::BrowseAction;

/// One record as the dashboard renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    /// Raw timestamp as served by the backend
    pub date: Option<String>,
    pub author: Option<String>,
    /// Labelled absolute URLs of the record's files
    pub assets: Vec<(&'static str, String)>,
    pub body: String,
}

impl RecordRow {
    pub fn from_post(post: &Post, asset_url: impl Fn(&str) -> String) -> Self {
        let body = if post.content.is_empty() {
            post.description.clone()
        } else {
            format!("{}\n\n{}", post.description, post.content)
        };
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            category: Some(post.category.clone()),
            date: Some(post.date.clone()),
            author: Some(post.author.clone()),
            assets: vec![("Image", asset_url(&post.image))],
            body,
        }
    }

    pub fn from_publication(publication: &Publication, asset_url: impl Fn(&str) -> String) -> Self {
        Self {
            id: publication.id.clone(),
            title: publication.name.clone(),
            category: None,
            date: None,
            author: None,
            assets: vec![
                ("PDF", asset_url(&publication.pdf_file)),
                ("Cover", asset_url(&publication.image)),
            ],
            body: publication.description.clone(),
        }
    }
}

impl Entity for RecordRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Everything the dashboard shows, for both resources
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub active: ResourceKind,
    pub posts: ListState<RecordRow>,
    pub publications: ListState<RecordRow>,
    /// Highlighted row on the visible page
    pub selected: usize,
    pub search_focused: bool,
    /// Id of the record awaiting delete confirmation
    pub confirm_delete: Option<String>,
}

impl BrowseState {
    pub fn new(active: ResourceKind, posts_page_size: usize, publications_page_size: usize) -> Self {
        Self {
            active,
            posts: ListState::new(posts_page_size),
            publications: ListState::new(publications_page_size),
            selected: 0,
            search_focused: false,
            confirm_delete: None,
        }
    }

    pub fn list(&self, kind: ResourceKind) -> &ListState<RecordRow> {
        match kind {
            ResourceKind::Posts => &self.posts,
            ResourceKind::Publications => &self.publications,
        }
    }

    fn list_mut(&mut self, kind: ResourceKind) -> &mut ListState<RecordRow> {
        match kind {
            ResourceKind::Posts => &mut self.posts,
            ResourceKind::Publications => &mut self.publications,
        }
    }

    pub fn active_list(&self) -> &ListState<RecordRow> {
        self.list(self.active)
    }

    /// Rows on the active resource's visible page
    pub fn visible_rows(&self) -> Vec<RecordRow> {
        self.active_list().view().items.into_iter().cloned().collect()
    }

    pub fn selected_row(&self) -> Option<RecordRow> {
        self.active_list()
            .view()
            .items
            .get(self.selected)
            .map(|row| (*row).clone())
    }

    /// Feed a list action to one resource's state
    pub fn apply(&mut self, kind: ResourceKind, action: ListAction<RecordRow>) {
        let list = self.list_mut(kind);
        let page_size = list.page_size;
        let current = std::mem::replace(list, ListState::new(page_size));
        *list = reduce_list_state(current, action);
        if kind == self.active {
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.active_list().view().items.len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

/// Apply the parts of a key action that only touch local state.
///
/// Requests (delete, download) are started by the component; the reducer
/// only opens and closes the confirmation prompt around them.
pub fn reduce_browse_state(mut state: BrowseState, action: BrowseAction) -> BrowseState {
    let active = state.active;
    match action {
        BrowseAction::MoveDown => {
            state.selected = state.selected.saturating_add(1);
            state.clamp_selection();
        }
        BrowseAction::MoveUp => {
            state.selected = state.selected.saturating_sub(1);
        }
        BrowseAction::NextPage => {
            state.apply(active, ListAction::NextPage);
            state.selected = 0;
        }
        BrowseAction::PrevPage => {
            state.apply(active, ListAction::PrevPage);
            state.selected = 0;
        }
        BrowseAction::CycleCategory => {
            if active == ResourceKind::Posts {
                let next = Category::cycle(state.posts.category);
                state.apply(active, ListAction::SetCategory(next));
                state.selected = 0;
            }
        }
        BrowseAction::FocusSearch => state.search_focused = true,
        BrowseAction::ExitSearch => state.search_focused = false,
        BrowseAction::ClearSearchAndExit => {
            state.search_focused = false;
            state.apply(active, ListAction::SetSearch(String::new()));
            state.selected = 0;
        }
        BrowseAction::RequestDelete => {
            state.confirm_delete = state.selected_row().map(|row| row.id);
        }
        BrowseAction::ConfirmDelete | BrowseAction::CancelDelete => {
            state.confirm_delete = None;
        }
        BrowseAction::SwitchResource => {
            state.active = active.toggle();
            state.selected = 0;
            state.search_focused = false;
            state.confirm_delete = None;
        }
        BrowseAction::Download | BrowseAction::Quit | BrowseAction::Consumed => {}
    }
    state
}
