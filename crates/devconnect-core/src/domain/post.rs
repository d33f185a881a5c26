use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 500;

/// Post entity - a short text post with a like counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only set by edits. Likes never touch it.
    pub content_updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with no likes and matching creation/update stamps.
    pub fn new(content: PostContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: content.title,
            content: content.content,
            likes: 0,
            created_at: now,
            updated_at: now,
            content_updated_at: None,
        }
    }

    /// Replace title and content, stamping both edit timestamps.
    pub fn apply_edit(&mut self, content: PostContent, at: DateTime<Utc>) {
        self.title = content.title;
        self.content = content.content;
        self.updated_at = at;
        self.content_updated_at = Some(at);
    }
}

/// Title and content that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    title: String,
    content: String,
}

impl PostContent {
    /// Validate raw input. A missing field counts as blank.
    ///
    /// Every violated rule is collected, so a caller sees all problems at once.
    pub fn parse(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        let title = title.unwrap_or_default();
        let content = content.unwrap_or_default();
        let mut errors = Vec::new();

        if title.trim().is_empty() {
            errors.push("Title is required.".to_string());
        }
        if content.trim().is_empty() {
            errors.push("Content is required.".to_string());
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            errors.push(format!(
                "Title must be at most {TITLE_MAX_CHARS} characters."
            ));
        }
        if content.chars().count() > CONTENT_MAX_CHARS {
            errors.push(format!(
                "Content must be at most {CONTENT_MAX_CHARS} characters."
            ));
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str, body: &str) -> PostContent {
        PostContent::parse(Some(title.to_string()), Some(body.to_string())).unwrap()
    }

    #[test]
    fn test_new_post_starts_unliked_and_unedited() {
        let post = Post::new(content("T", "C"));
        assert_eq!(post.likes, 0);
        assert_eq!(post.created_at, post.updated_at);
        assert!(post.content_updated_at.is_none());
    }

    #[test]
    fn test_apply_edit_stamps_both_timestamps_and_keeps_likes() {
        let mut post = Post::new(content("T", "C"));
        post.likes = 4;
        let created = post.created_at;
        let later = created + chrono::Duration::minutes(5);

        post.apply_edit(content("T2", "C2"), later);

        assert_eq!(post.title, "T2");
        assert_eq!(post.content, "C2");
        assert_eq!(post.likes, 4);
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, later);
        assert_eq!(post.content_updated_at, Some(later));
    }

    #[test]
    fn test_blank_fields_are_rejected_together() {
        let err = PostContent::parse(Some("   ".into()), None).unwrap_err();
        assert_eq!(err.message(), "Title is required. Content is required.");
    }

    #[test]
    fn test_oversized_fields_are_rejected_not_truncated() {
        let err = PostContent::parse(Some("t".repeat(51)), Some("c".repeat(501))).unwrap_err();
        assert_eq!(
            err.message(),
            "Title must be at most 50 characters. Content must be at most 500 characters."
        );
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        let parsed = PostContent::parse(Some(title.clone()), Some("body".into())).unwrap();
        assert_eq!(parsed.title(), title);
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let parsed = PostContent::parse(Some(" T ".into()), Some("C\n".into())).unwrap();
        assert_eq!(parsed.title(), " T ");
        assert_eq!(parsed.content(), "C\n");
    }
}
