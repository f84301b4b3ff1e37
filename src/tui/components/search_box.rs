//! Inline search input

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the InlineSearchBox component
#[derive(Default, Props)]
pub struct InlineSearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Single-line search input with a "/" prompt
#[component]
pub fn InlineSearchBox(props: &InlineSearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;

    let Some(mut value) = props.value else {
        return element! {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let is_empty = value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }
            #(if is_empty && !has_focus {
                Some(element! {
                    Text(content: "search by title", color: theme.text_dimmed)
                })
            } else {
                None
            })
            #(if !is_empty || has_focus {
                Some(element! {
                    View(flex_grow: 1.0) {
                        TextInput(
                            value: value.to_string(),
                            has_focus: has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
