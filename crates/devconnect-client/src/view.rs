//! The posts view controller: user interactions in, API calls out.

use uuid::Uuid;

use devconnect_shared::PostRequest;

use crate::api::{ClientError, PostsApi};
use crate::state::{Action, DRAFT_REQUIRED, ViewState};

pub struct PostsView<A> {
    api: A,
    state: ViewState,
}

impl<A: PostsApi> PostsView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Initial load. Clears the loading flag whatever happens.
    pub async fn mount(&mut self) {
        match self.api.list().await {
            Ok(posts) => self.state.apply(Action::PostsLoaded(posts)),
            Err(e) => self.fail(e),
        }
        self.state.apply(Action::LoadFinished);
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.state.apply(Action::TitleInput(value.into()));
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.state.apply(Action::ContentInput(value.into()));
    }

    pub fn start_edit(&mut self, id: Uuid) {
        self.state.apply(Action::StartEdit(id));
    }

    /// Create or update, depending on whether an edit is in progress.
    pub async fn submit(&mut self) {
        let draft = self.state.draft();
        if draft.is_blank() {
            self.state.apply(Action::Failed(DRAFT_REQUIRED.to_string()));
            return;
        }
        let req = PostRequest::new(draft.title.clone(), draft.content.clone());

        let action = match self.state.editing_id() {
            Some(id) => self.api.update(id, &req).await.map(Action::Updated),
            None => self.api.create(&req).await.map(Action::Created),
        };

        match action {
            Ok(action) => self.state.apply(action),
            Err(e) => self.fail(e),
        }
    }

    pub async fn like(&mut self, id: Uuid) {
        match self.api.like(id).await {
            Ok(post) => self.state.apply(Action::Liked(post)),
            Err(e) => self.fail(e),
        }
    }

    pub async fn delete(&mut self, id: Uuid) {
        match self.api.delete(id).await {
            Ok(_) => self.state.apply(Action::Deleted(id)),
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: ClientError) {
        if let ClientError::Unreachable { detail } = &err {
            tracing::warn!(error = %detail, "Request got no response");
        }
        self.state.apply(Action::Failed(err.to_string()));
    }
}
