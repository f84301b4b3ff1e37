//! Placeholder shown in place of the record list

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Why the list has nothing to show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The collection is being fetched
    #[default]
    Loading,
    /// The last fetch failed
    Error(String),
    /// The collection is empty
    NoRecords,
    /// Nothing matches the search and category filters
    NoResults,
}

impl EmptyStateKind {
    fn describe(&self) -> (&'static str, &'static str, String) {
        match self {
            EmptyStateKind::Loading => ("~", "Loading", "Fetching records...".to_string()),
            EmptyStateKind::Error(message) => ("!", "Could not load", message.clone()),
            EmptyStateKind::NoRecords => ("i", "Empty", "Nothing has been published yet.".to_string()),
            EmptyStateKind::NoResults => (
                "?",
                "No results found.",
                "Try a different search, or press / then Esc to clear it.".to_string(),
            ),
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

/// Centered icon, title and message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, message) = props.kind.describe();
    let accent = match props.kind {
        EmptyStateKind::Error(_) => theme.error,
        _ => theme.border,
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 1,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
            ) {
                Text(content: icon, color: accent, weight: Weight::Bold)
            }
            View(margin_top: 1) {
                Text(content: title, color: theme.text, weight: Weight::Bold)
            }
            Text(content: message, color: theme.text_dimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_uses_list_wording() {
        let (_, title, _) = EmptyStateKind::NoResults.describe();
        assert_eq!(title, crate::display::NO_RESULTS);
    }

    #[test]
    fn test_error_shows_message() {
        let (_, _, message) = EmptyStateKind::Error("server down".to_string()).describe();
        assert_eq!(message, "server down");
    }
}
