//! Relative timestamps for the post list, with an `(edited)` marker.

use chrono::{DateTime, Local, Utc};

use devconnect_shared::PostResponse;

/// The time a post was last changed by its author. Likes do not count.
pub fn reference_time(post: &PostResponse) -> DateTime<Utc> {
    post.content_updated_at.unwrap_or(post.updated_at)
}

/// Relative age of the post, with an `(edited)` marker once it has been
/// changed after creation.
pub fn format_timestamp(post: &PostResponse, now: DateTime<Utc>) -> String {
    let reference = reference_time(post);
    let minutes = (now - reference).num_minutes();

    let age = if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} mins ago")
    } else if minutes < 24 * 60 {
        format!("{} hours ago", minutes / 60)
    } else {
        reference
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    };

    if reference > post.created_at {
        format!("{age} (edited)")
    } else {
        age
    }
}
