//! Dashboard components

pub mod detail_pane;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod record_list;
pub mod search_box;
pub mod toast;

pub use detail_pane::{DetailPane, DetailPaneProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, browse_shortcuts, confirm_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use record_list::{RecordList, RecordListProps};
pub use search_box::{InlineSearchBox, InlineSearchBoxProps};
pub use toast::render_toast;
