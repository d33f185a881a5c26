//! # DevConnect Client
//!
//! The posts view: an HTTP client for the API, an explicit view state with
//! reducer-style transitions, and text rendering of the form and post list.

pub mod api;
pub mod format;
pub mod render;
pub mod state;
pub mod view;

pub use api::{ClientError, HttpPostsApi, Operation, PostsApi};
pub use state::{Action, Draft, ViewState};
pub use view::PostsView;
