pub mod cli;
pub mod collection;
pub mod commands;
pub mod config;
pub mod display;
pub mod entity;
pub mod error;
pub mod notify;
pub mod remote;
pub mod tui;
pub mod types;

pub use collection::{
    CollectionScreen, ListAction, ListState, RemoteCollection, ScreenScope, reduce_list_state,
};
pub use config::Config;
pub use entity::{Entity, Post, Publication, Resource};
pub use error::{PressError, Result};
pub use notify::{ConsoleNotifier, NotificationKind, Notifier, Toast, ToastQueue};
pub use remote::{HttpStore, PostForm, PublicationForm, RemoteStore, Upload};
pub use types::{Category, ResourceKind};
