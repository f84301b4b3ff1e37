//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::ResourceKind;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab")
    pub key: String,
    /// Description of the action (e.g., "quit", "switch")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the list, depending on the resource shown
pub fn browse_shortcuts(resource: ResourceKind) -> Vec<Shortcut> {
    let mut shortcuts = vec![
        Shortcut::new("j/k", "select"),
        Shortcut::new("n/p", "page"),
        Shortcut::new("/", "search"),
    ];
    match resource {
        ResourceKind::Posts => shortcuts.push(Shortcut::new("c", "category")),
        ResourceKind::Publications => shortcuts.push(Shortcut::new("s", "download")),
    }
    shortcuts.push(Shortcut::new("d", "delete"));
    shortcuts.push(Shortcut::new("Tab", "switch"));
    shortcuts.push(Shortcut::new("q", "quit"));
    shortcuts
}

/// Shortcuts while the search box has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "done"),
        Shortcut::new("Esc", "clear"),
        Shortcut::new("C-q", "quit"),
    ]
}

/// Shortcuts while a delete is awaiting confirmation
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    vec![Shortcut::new("y", "delete"), Shortcut::new("n/Esc", "keep")]
}
