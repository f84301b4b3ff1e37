//! Terminal dashboard for browsing and managing both resources
//!
//! - `state` - view model and the pure key-action reducer
//! - `keymap` - key press to action mapping
//! - `services` - backend requests feeding the view model
//! - `dashboard` - the iocraft component tying them together

pub mod components;
pub mod dashboard;
pub mod keymap;
pub mod services;
pub mod state;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use keymap::{BrowseAction, KeySnapshot, key_to_action};
pub use services::BrowseServices;
pub use state::{BrowseState, RecordRow, reduce_browse_state};
pub use theme::Theme;
