//! Key-to-action mapping for the dashboard
//!
//! Converts raw `(KeyCode, KeyModifiers)` pairs into `BrowseAction` values.
//! The confirmation prompt and the search box each capture the keyboard, so
//! they are checked before normal-mode bindings.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::types::ResourceKind;

/// Everything a key press can ask the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    // Navigation
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,

    // Filters
    FocusSearch,
    ExitSearch,
    ClearSearchAndExit,
    CycleCategory,

    // Operations
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    Download,
    SwitchResource,

    // App
    Quit,

    /// Key was recognised but requires no further action (absorb it).
    Consumed,
}

/// Read-only view of the modes that change how keys are interpreted
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySnapshot {
    pub resource: ResourceKind,
    pub search_focused: bool,
    pub confirming_delete: bool,
}

/// Map a key press to an action.
///
/// Returns `None` for keys with no binding; in search mode that lets the
/// text input handle ordinary typing.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    snapshot: &KeySnapshot,
) -> Option<BrowseAction> {
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c' | 'q')) {
        return Some(BrowseAction::Quit);
    }

    if snapshot.confirming_delete {
        return Some(confirm_key_to_action(code));
    }

    if snapshot.search_focused {
        return search_key_to_action(code);
    }

    normal_key_to_action(code, snapshot.resource)
}

fn confirm_key_to_action(code: KeyCode) -> BrowseAction {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => BrowseAction::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => BrowseAction::CancelDelete,
        _ => BrowseAction::Consumed,
    }
}

fn search_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Esc => Some(BrowseAction::ClearSearchAndExit),
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => Some(BrowseAction::ExitSearch),
        _ => None,
    }
}

fn normal_key_to_action(code: KeyCode, resource: ResourceKind) -> Option<BrowseAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BrowseAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowseAction::MoveUp),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => Some(BrowseAction::NextPage),
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => Some(BrowseAction::PrevPage),
        KeyCode::Char('/') => Some(BrowseAction::FocusSearch),
        KeyCode::Char('c') if resource == ResourceKind::Posts => Some(BrowseAction::CycleCategory),
        KeyCode::Char('d') => Some(BrowseAction::RequestDelete),
        KeyCode::Char('s') if resource == ResourceKind::Publications => {
            Some(BrowseAction::Download)
        }
        KeyCode::Tab => Some(BrowseAction::SwitchResource),
        KeyCode::Char('q') => Some(BrowseAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> KeySnapshot {
        KeySnapshot::default()
    }

    fn publications() -> KeySnapshot {
        KeySnapshot {
            resource: ResourceKind::Publications,
            ..KeySnapshot::default()
        }
    }

    #[test]
    fn test_key_to_action_navigation() {
        let s = posts();
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, &s),
            Some(BrowseAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE, &s),
            Some(BrowseAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('n'), KeyModifiers::NONE, &s),
            Some(BrowseAction::NextPage)
        );
        assert_eq!(
            key_to_action(KeyCode::Left, KeyModifiers::NONE, &s),
            Some(BrowseAction::PrevPage)
        );
        assert_eq!(
            key_to_action(KeyCode::Tab, KeyModifiers::NONE, &s),
            Some(BrowseAction::SwitchResource)
        );
    }

    #[test]
    fn test_key_to_action_resource_specific_keys() {
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::NONE, &posts()),
            Some(BrowseAction::CycleCategory)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::NONE, &publications()),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE, &publications()),
            Some(BrowseAction::Download)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::NONE, &posts()),
            None
        );
    }

    #[test]
    fn test_key_to_action_search_mode() {
        let s = KeySnapshot {
            search_focused: true,
            ..posts()
        };
        // Typing goes to the text input, including letters bound in normal mode
        assert_eq!(key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &s), None);
        assert_eq!(key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, &s), None);
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &s),
            Some(BrowseAction::ClearSearchAndExit)
        );
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, &s),
            Some(BrowseAction::ExitSearch)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, &s),
            Some(BrowseAction::Quit)
        );
    }

    #[test]
    fn test_key_to_action_confirm_delete() {
        let s = KeySnapshot {
            confirming_delete: true,
            ..posts()
        };
        assert_eq!(
            key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, &posts()),
            Some(BrowseAction::RequestDelete)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('y'), KeyModifiers::NONE, &s),
            Some(BrowseAction::ConfirmDelete)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &s),
            Some(BrowseAction::CancelDelete)
        );
        // Everything else is swallowed while the prompt is open
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &s),
            Some(BrowseAction::Consumed)
        );
    }

    #[test]
    fn test_key_to_action_quit() {
        assert_eq!(
            key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &posts()),
            Some(BrowseAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, &posts()),
            Some(BrowseAction::Quit)
        );
    }
}
