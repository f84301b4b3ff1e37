//! Detail pane for the selected record

use iocraft::prelude::*;

use crate::display::format_date;
use crate::tui::state::RecordRow;
use crate::tui::theme::theme;

/// Props for the DetailPane component
#[derive(Default, Props)]
pub struct DetailPaneProps {
    pub record: Option<RecordRow>,
}

#[component]
pub fn DetailPane(props: &DetailPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(record) = props.record.clone() else {
        return element! {
            View(
                flex_grow: 1.0,
                height: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
            ) {
                Text(content: "Nothing selected", color: theme.text_dimmed)
            }
        };
    };

    let mut metadata = Vec::new();
    if let Some(category) = &record.category {
        metadata.push(("Category", category.clone(), theme.category_color(category)));
    }
    if let Some(date) = &record.date {
        metadata.push(("Date", format_date(date), theme.text));
    }
    if let Some(author) = &record.author {
        metadata.push(("Author", author.clone(), theme.text));
    }
    for (label, url) in &record.assets {
        metadata.push((*label, url.clone(), theme.link));
    }
    let body = if record.body.trim().is_empty() {
        "No description".to_string()
    } else {
        record.body.clone()
    };

    element! {
        View(
            flex_grow: 1.0,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            overflow: Overflow::Hidden,
        ) {
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Column,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(content: record.id.clone(), color: theme.id_color)
                Text(content: record.title.clone(), color: theme.text, weight: Weight::Bold)
            }

            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(metadata.into_iter().map(|(label, value, color)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: format!("{label}: "), color: theme.text_dimmed)
                        Text(content: value, color: color)
                    }
                }))
            }

            View(
                flex_grow: 1.0,
                width: 100pct,
                padding: 1,
                overflow: Overflow::Hidden,
            ) {
                Text(content: body, color: theme.text)
            }
        }
    }
}
