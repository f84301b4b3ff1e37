//! Full-screen dashboard over posts and publications
//!
//! The component owns a [`BrowseState`] and talks to the backend through
//! [`BrowseServices`]. Requests run in async handlers; their results are fed
//! back as list actions. Notifications land in the shared toast queue and a
//! ticker re-renders while a toast is on screen so it disappears on time.

// State handles are Copy; they are cloned into async closures for clarity
#![allow(clippy::clone_on_copy)]

use std::time::Duration;

use iocraft::prelude::*;

use crate::collection::{ListAction, MutationKind};
use crate::types::{DEFAULT_POSTS_PAGE_SIZE, DEFAULT_PUBLICATIONS_PAGE_SIZE, ResourceKind};

use super::components::{
    DetailPane, EmptyStateKind, Footer, Header, InlineSearchBox, RecordList, browse_shortcuts,
    confirm_shortcuts, render_toast, search_shortcuts,
};
use super::keymap::{BrowseAction, KeySnapshot, key_to_action};
use super::services::BrowseServices;
use super::state::{BrowseState, reduce_browse_state};
use super::theme::theme;

const TOAST_TICK: Duration = Duration::from_millis(250);

/// Props for the Dashboard component
#[derive(Default, Props)]
pub struct DashboardProps {
    /// Resource shown first
    pub resource: ResourceKind,
    pub services: Option<BrowseServices>,
}

/// Decide what replaces the rows when there are none to show
fn empty_state_kind(state: &BrowseState) -> Option<EmptyStateKind> {
    let list = state.active_list();
    if list.loading && list.collection.is_empty() {
        Some(EmptyStateKind::Loading)
    } else if let Some(error) = &list.error {
        Some(EmptyStateKind::Error(error.clone()))
    } else if list.collection.is_empty() {
        Some(EmptyStateKind::NoRecords)
    } else if list.view().is_empty_result() {
        Some(EmptyStateKind::NoResults)
    } else {
        None
    }
}

/// Start a delete or download after checking the mutation slot
fn start_mutation(
    services: &BrowseServices,
    state: &mut State<BrowseState>,
    kind: ResourceKind,
    mutation: MutationKind,
    id: &str,
) -> bool {
    let started = {
        let current = state.read();
        services.begin(kind, current.list(kind).pending.as_ref(), mutation, id)
    };
    match started {
        Ok(action) => {
            state.write().apply(kind, action);
            true
        }
        // Busy: the warning toast is already queued
        Err(_) => false,
    }
}

#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let (posts_page_size, publications_page_size) = props
        .services
        .as_ref()
        .map(|s| (s.posts_page_size, s.publications_page_size))
        .unwrap_or((DEFAULT_POSTS_PAGE_SIZE, DEFAULT_PUBLICATIONS_PAGE_SIZE));
    let initial = props.resource;

    let mut state: State<BrowseState> = hooks
        .use_state(move || BrowseState::new(initial, posts_page_size, publications_page_size));
    let mut search_query = hooks.use_state(String::new);
    let mut should_exit = hooks.use_state(|| false);
    let mut fetch_started = hooks.use_state(|| false);
    let tick = hooks.use_state(|| 0u64);

    // Re-render while a toast is visible, and once more after it expires
    hooks.use_future({
        let toasts = props.services.as_ref().map(|s| s.toasts.clone());
        let mut tick = tick.clone();
        async move {
            let Some(toasts) = toasts else { return };
            let mut was_visible = false;
            loop {
                tokio::time::sleep(TOAST_TICK).await;
                let visible = toasts.current().is_some();
                if visible || was_visible {
                    tick.set(tick.get().wrapping_add(1));
                }
                was_visible = visible;
            }
        }
    });

    let fetch_handler: Handler<ResourceKind> = hooks.use_async_handler({
        let services = props.services.clone();
        let state_setter = state.clone();

        move |kind: ResourceKind| {
            let services = services.clone();
            let mut state_setter = state_setter.clone();

            async move {
                let Some(services) = services else { return };
                if let Some(action) = services.fetch(kind).await {
                    state_setter.write().apply(kind, action);
                }
            }
        }
    });

    let delete_handler: Handler<(ResourceKind, String)> = hooks.use_async_handler({
        let services = props.services.clone();
        let state_setter = state.clone();

        move |(kind, id): (ResourceKind, String)| {
            let services = services.clone();
            let mut state_setter = state_setter.clone();

            async move {
                let Some(services) = services else { return };
                if let Some(action) = services.delete(kind, id).await {
                    state_setter.write().apply(kind, action);
                }
            }
        }
    });

    let download_handler: Handler<String> = hooks.use_async_handler({
        let services = props.services.clone();
        let state_setter = state.clone();

        move |id: String| {
            let services = services.clone();
            let mut state_setter = state_setter.clone();

            async move {
                let Some(services) = services else { return };
                if let Some(action) = services.download(id).await {
                    state_setter.write().apply(ResourceKind::Publications, action);
                }
            }
        }
    });

    // Both resources load once, up front
    if !fetch_started.get() {
        fetch_started.set(true);
        for kind in [ResourceKind::Posts, ResourceKind::Publications] {
            state.write().apply(kind, ListAction::FetchStarted);
            fetch_handler.clone()(kind);
        }
    }

    // Keep the active list's search term in step with the search box
    let term = search_query.to_string();
    let search_changed = state.read().active_list().search != term;
    if search_changed {
        let mut current = state.write();
        let active = current.active;
        current.apply(active, ListAction::SetSearch(term));
        current.selected = 0;
    }

    hooks.use_terminal_events({
        let services = props.services.clone();
        let delete_handler = delete_handler.clone();
        let download_handler = download_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let snapshot = {
                    let current = state.read();
                    KeySnapshot {
                        resource: current.active,
                        search_focused: current.search_focused,
                        confirming_delete: current.confirm_delete.is_some(),
                    }
                };
                let Some(action) = key_to_action(code, modifiers, &snapshot) else {
                    return;
                };

                match action {
                    BrowseAction::Quit => should_exit.set(true),
                    BrowseAction::ClearSearchAndExit => search_query.set(String::new()),
                    BrowseAction::ConfirmDelete => {
                        let target = state.read().confirm_delete.clone();
                        if let (Some(services), Some(id)) = (&services, target) {
                            let resource = snapshot.resource;
                            if start_mutation(services, &mut state, resource, MutationKind::Delete, &id) {
                                delete_handler((resource, id));
                            }
                        }
                    }
                    BrowseAction::Download => {
                        let target = state.read().selected_row().map(|row| row.id);
                        if let (Some(services), Some(id)) = (&services, target) {
                            let resource = ResourceKind::Publications;
                            if start_mutation(services, &mut state, resource, MutationKind::Download, &id) {
                                download_handler(id);
                            }
                        }
                    }
                    _ => {}
                }

                let current = state.read().clone();
                state.set(reduce_browse_state(current, action));

                if action == BrowseAction::SwitchResource {
                    let term = state.read().active_list().search.clone();
                    search_query.set(term);
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        if let Some(services) = &props.services {
            services.cancel();
        }
        system.exit();
    }

    let toast = props.services.as_ref().and_then(|s| s.toasts.current());

    let current = state.read();
    let list = current.active_list();
    let view = list.view();
    let rows = current.visible_rows();
    let selected_record = current.selected_row();
    let empty = empty_state_kind(&current);
    let pending_id = list.pending.as_ref().and_then(|p| p.id.clone());

    let confirm_title = current
        .confirm_delete
        .as_deref()
        .and_then(|id| list.find(id))
        .map(|row| row.title.clone());

    let shortcuts = if current.confirm_delete.is_some() {
        confirm_shortcuts()
    } else if current.search_focused {
        search_shortcuts()
    } else {
        browse_shortcuts(current.active)
    };

    let resource = current.active;
    let total = list.collection.len();
    let (matching, page, page_count) = (view.total, view.page, view.page_count);
    let category = list.category;
    let selected = current.selected;
    let search_focused = current.search_focused;
    let list_width = width.saturating_mul(45) / 100;
    drop(view);
    drop(current);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(resource, total, matching, page, page_count, category)

            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                height: 1,
            ) {
                InlineSearchBox(
                    value: Some(search_query),
                    has_focus: search_focused,
                )
            }

            #(confirm_title.map(|title| element! {
                View(width: 100pct, height: 1, padding_left: 1) {
                    Text(
                        content: format!("Delete \"{title}\"? [y/n]"),
                        color: theme.warning,
                        weight: Weight::Bold,
                    )
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                RecordList(
                    rows,
                    selected,
                    empty,
                    pending_id,
                    has_focus: !search_focused,
                    width: list_width,
                )
                DetailPane(record: selected_record)
            }

            #(render_toast(&toast))

            Footer(shortcuts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::RecordRow;

    fn row(id: &str) -> RecordRow {
        RecordRow {
            id: id.to_string(),
            title: format!("Record {id}"),
            category: None,
            date: None,
            author: None,
            assets: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn test_empty_state_kind_progression() {
        let mut state = BrowseState::new(ResourceKind::Publications, 6, 4);
        state.apply(ResourceKind::Publications, ListAction::FetchStarted);
        assert_eq!(empty_state_kind(&state), Some(EmptyStateKind::Loading));

        state.apply(
            ResourceKind::Publications,
            ListAction::FetchFailed("offline".to_string()),
        );
        assert_eq!(
            empty_state_kind(&state),
            Some(EmptyStateKind::Error("offline".to_string()))
        );

        state.apply(
            ResourceKind::Publications,
            ListAction::FetchSucceeded(vec![row("1")]),
        );
        assert_eq!(empty_state_kind(&state), None);

        state.apply(
            ResourceKind::Publications,
            ListAction::SetSearch("nothing".to_string()),
        );
        assert_eq!(empty_state_kind(&state), Some(EmptyStateKind::NoResults));
    }

    #[test]
    fn test_empty_collection_is_not_a_search_miss() {
        let mut state = BrowseState::new(ResourceKind::Posts, 6, 4);
        state.apply(ResourceKind::Posts, ListAction::FetchSucceeded(Vec::new()));
        assert_eq!(empty_state_kind(&state), Some(EmptyStateKind::NoRecords));
    }
}
