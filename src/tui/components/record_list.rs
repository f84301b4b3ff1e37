//! List pane with the visible page of records

use iocraft::prelude::*;

use crate::display::{format_date, truncate};
use crate::tui::state::RecordRow;
use crate::tui::theme::theme;

use super::empty_state::{EmptyState, EmptyStateKind};

/// Props for the RecordList component
#[derive(Default, Props)]
pub struct RecordListProps {
    /// Rows on the visible page
    pub rows: Vec<RecordRow>,
    pub selected: usize,
    /// Shown instead of the rows when set
    pub empty: Option<EmptyStateKind>,
    /// Id of a row with a request in flight
    pub pending_id: Option<String>,
    pub has_focus: bool,
    pub width: u16,
}

#[component]
pub fn RecordList(props: &RecordListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let title_width = (props.width as usize).saturating_sub(6).max(8);

    element! {
        View(
            width: 45pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: if props.has_focus { theme.border_focused } else { theme.border },
        ) {
            #(props.empty.clone().map(|kind| element! { EmptyState(kind) }))
            #(if props.empty.is_none() {
                Some(element! {
                    View(width: 100pct, flex_direction: FlexDirection::Column) {
                        #(props.rows.iter().enumerate().map(|(i, row)| {
                            let is_selected = i == props.selected;
                            let busy = props.pending_id.as_deref() == Some(row.id.as_str());
                            let indicator = if busy { "~" } else if is_selected { ">" } else { " " };
                            let secondary = match (&row.category, &row.date) {
                                (Some(category), Some(date)) => {
                                    format!("{category} | {}", format_date(date))
                                }
                                (Some(category), None) => category.clone(),
                                _ => truncate(row.body.lines().next().unwrap_or_default(), title_width),
                            };
                            let category_color = row
                                .category
                                .as_deref()
                                .map(|c| theme.category_color(c))
                                .unwrap_or(theme.text_dimmed);
                            element! {
                                View(
                                    width: 100pct,
                                    flex_direction: FlexDirection::Column,
                                    padding_left: 1,
                                    background_color: if is_selected { theme.highlight } else { Color::Reset },
                                ) {
                                    Text(
                                        content: format!("{indicator} {}", truncate(&row.title, title_width)),
                                        color: theme.text,
                                        weight: if is_selected { Weight::Bold } else { Weight::Normal },
                                    )
                                    Text(
                                        content: format!("  {secondary}"),
                                        color: if is_selected { theme.text } else { category_color },
                                    )
                                }
                            }
                        }))
                    }
                })
            } else {
                None
            })
        }
    }
}
