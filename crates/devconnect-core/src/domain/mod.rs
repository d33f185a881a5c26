//! Domain entities - the core business objects.

mod post;

pub use post::{CONTENT_MAX_CHARS, Post, PostContent, TITLE_MAX_CHARS};
