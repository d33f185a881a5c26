//! View state and its transitions.
//!
//! All mutation goes through [`ViewState::apply`]. Network results enter as
//! actions; the state never performs I/O itself.

use uuid::Uuid;

use devconnect_core::domain::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use devconnect_shared::PostResponse;

/// Shown when submit is attempted with a blank field.
pub const DRAFT_REQUIRED: &str = "Title and content is required.";

/// The edit buffer behind the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.content.trim().is_empty()
    }
}

/// A single user-visible transition.
#[derive(Debug, Clone)]
pub enum Action {
    TitleInput(String),
    ContentInput(String),
    /// List succeeded.
    PostsLoaded(Vec<PostResponse>),
    /// The initial List finished, whatever its outcome.
    LoadFinished,
    Created(PostResponse),
    Updated(PostResponse),
    Liked(PostResponse),
    Deleted(Uuid),
    StartEdit(Uuid),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    posts: Vec<PostResponse>,
    draft: Draft,
    editing_id: Option<Uuid>,
    loading: bool,
    errors: Vec<String>,
    scroll_to_top: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh state, loading until the first List completes.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            draft: Draft::default(),
            editing_id: None,
            loading: true,
            errors: Vec::new(),
            scroll_to_top: false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TitleInput(value) => {
                self.draft.title = clamp_chars(value, TITLE_MAX_CHARS);
            }
            Action::ContentInput(value) => {
                self.draft.content = clamp_chars(value, CONTENT_MAX_CHARS);
            }
            Action::PostsLoaded(posts) => {
                self.posts = posts;
            }
            Action::LoadFinished => {
                self.loading = false;
            }
            Action::Created(post) => {
                self.posts.insert(0, post);
                self.finish_submit();
            }
            Action::Updated(post) => {
                let previous = self.editing_id.take().unwrap_or(post.id);
                self.move_to_front(previous, post);
                self.finish_submit();
            }
            Action::Liked(post) => {
                self.replace_in_place(post);
            }
            Action::Deleted(id) => {
                self.posts.retain(|p| p.id != id);
            }
            Action::StartEdit(id) => {
                if let Some(post) = self.posts.iter().find(|p| p.id == id) {
                    self.draft = Draft {
                        title: post.title.clone(),
                        content: post.content.clone(),
                    };
                    self.editing_id = Some(id);
                    self.scroll_to_top = true;
                }
            }
            Action::Failed(message) => {
                if !self.errors.contains(&message) {
                    self.errors.push(message);
                }
            }
        }
    }

    /// Edit result: drop the old copy and put the new one first.
    fn move_to_front(&mut self, previous: Uuid, post: PostResponse) {
        self.posts.retain(|p| p.id != previous);
        self.posts.insert(0, post);
    }

    /// Like result: same slot, new copy.
    fn replace_in_place(&mut self, post: PostResponse) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *slot = post;
        }
    }

    fn finish_submit(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
    }

    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Visible height of the content input.
    pub fn content_rows(&self) -> usize {
        let newlines = self.draft.content.matches('\n').count();
        (1 + newlines).max(2)
    }

    pub fn title_chars_left(&self) -> usize {
        TITLE_MAX_CHARS.saturating_sub(self.draft.title.chars().count())
    }

    pub fn content_chars_left(&self) -> usize {
        CONTENT_MAX_CHARS.saturating_sub(self.draft.content.chars().count())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update Post"
        } else {
            "Add Post"
        }
    }

    /// Returns true once after an edit starts.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}

fn clamp_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value,
    }
}
