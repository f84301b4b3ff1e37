//! Client-side list handling shared by every resource screen

pub mod controller;
pub mod filter;
pub mod model;

pub use controller::{
    CollectionScreen, RemoteCollection, ScreenScope, settle_fetch, settle_mutation,
};
pub use filter::{ListQuery, PageView, filter_entities, page_count, paginate};
pub use model::{ListAction, ListState, MutationKind, Pending, reduce_list_state};
