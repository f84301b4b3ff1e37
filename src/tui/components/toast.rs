//! Toast line showing the latest notification

use iocraft::prelude::*;

use crate::notify::Toast;
use crate::tui::theme::theme;

/// Render the current toast, if any, as a bordered line
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    let theme = theme();
    toast.as_ref().map(|t| {
        let color = theme.notification_color(t.kind);
        element! {
            View(
                width: 100pct,
                height: 2,
                justify_content: JustifyContent::Center,
                flex_shrink: 0.0,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(content: t.message.clone(), color: color)
            }
        }
        .into_any()
    })
}
