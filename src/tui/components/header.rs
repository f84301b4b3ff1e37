//! Dashboard header: resource tabs, counts and active filters

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Category, ResourceKind};

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    pub resource: ResourceKind,
    /// Records on the server (after dedup)
    pub total: usize,
    /// Records matching the filters
    pub matching: usize,
    pub page: usize,
    pub page_count: usize,
    pub category: Option<Category>,
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let tab = |kind: ResourceKind| {
        let active = kind == props.resource;
        element! {
            View(margin_right: 2) {
                Text(
                    content: kind.to_string(),
                    color: if active { theme.highlight } else { theme.text_dimmed },
                    weight: if active { Weight::Bold } else { Weight::Normal },
                )
            }
        }
    };

    let category = match props.resource {
        ResourceKind::Posts => Some(
            props
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_else(|| "all".to_string()),
        ),
        ResourceKind::Publications => None,
    };
    let counts = format!(
        "{} of {} | page {} of {}",
        props.matching, props.total, props.page, props.page_count
    );

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "pressroom", color: theme.id_color, weight: Weight::Bold)
            View(margin_left: 2, flex_direction: FlexDirection::Row) {
                #(Some(tab(ResourceKind::Posts)))
                #(Some(tab(ResourceKind::Publications)))
            }
            View(flex_grow: 1.0)
            #(category.map(|name| {
                let color = theme.category_color(&name);
                element! {
                    View(margin_right: 2) {
                        Text(content: format!("category: {name}"), color: color)
                    }
                }
            }))
            Text(content: counts, color: theme.text_dimmed)
        }
    }
}
