//! Plain-text rendering of the posts view.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::format::format_timestamp;
use crate::state::ViewState;

pub fn render(state: &ViewState, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    // Writes into a String cannot fail.
    let _ = write_view(&mut out, state, now);
    out
}

fn write_view(out: &mut String, state: &ViewState, now: DateTime<Utc>) -> std::fmt::Result {
    writeln!(out, "DevConnect Posts")?;
    writeln!(out, "================")?;

    for error in state.errors() {
        writeln!(out, "! {error}")?;
    }

    let draft = state.draft();
    writeln!(out)?;
    writeln!(out, "Title: {}", draft.title)?;
    writeln!(out, "{} characters left", state.title_chars_left())?;
    writeln!(out, "Content ({} rows):", state.content_rows())?;
    for line in draft.content.lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "{} characters left", state.content_chars_left())?;
    writeln!(out, "[{}]", state.submit_label())?;
    writeln!(out)?;

    if state.is_loading() {
        writeln!(out, "Loading posts...")?;
        return Ok(());
    }
    if state.posts().is_empty() {
        writeln!(out, "No posts yet!")?;
        return Ok(());
    }

    for post in state.posts() {
        writeln!(out, "## {}", post.title)?;
        writeln!(out, "{}", post.content)?;
        writeln!(out, "{}", format_timestamp(post, now))?;
        writeln!(out, "[Like {}] [Edit] [Delete]  id: {}", post.likes, post.id)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use devconnect_shared::PostResponse;
    use uuid::Uuid;

    use super::*;
    use crate::state::Action;

    #[test]
    fn test_loading_and_empty_states() {
        let mut state = ViewState::new();
        let now = Utc::now();
        assert!(render(&state, now).contains("Loading posts..."));

        state.apply(Action::LoadFinished);
        let text = render(&state, now);
        assert!(text.contains("No posts yet!"));
        assert!(text.contains("[Add Post]"));
        assert!(text.contains("50 characters left"));
    }

    #[test]
    fn test_post_lines() {
        let now = Utc::now();
        let post = PostResponse {
            id: Uuid::new_v4(),
            title: "Hello".into(),
            content: "World".into(),
            likes: 3,
            created_at: now,
            updated_at: now,
            content_updated_at: None,
        };
        let mut state = ViewState::new();
        state.apply(Action::PostsLoaded(vec![post]));
        state.apply(Action::LoadFinished);
        state.apply(Action::Failed("Cannot reach server.".into()));

        let text = render(&state, now);
        assert!(text.contains("! Cannot reach server."));
        assert!(text.contains("## Hello"));
        assert!(text.contains("Just now"));
        assert!(text.contains("[Like 3]"));
    }
}
