//! # DevConnect Shared
//!
//! Wire types shared between the API server and the client view.

pub mod dto;
pub mod response;

pub use dto::{PostRequest, PostResponse};
pub use response::MessageResponse;
