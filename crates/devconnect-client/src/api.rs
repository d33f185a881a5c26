//! HTTP access to the posts API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use devconnect_shared::{MessageResponse, PostRequest, PostResponse};

/// The API call a failure came from. Picks the fallback banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
    Like,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch posts.",
            Operation::Create => "Failed to create post.",
            Operation::Update => "Failed to update post.",
            Operation::Delete => "Failed to delete post.",
            Operation::Like => "Failed to like post.",
        }
    }
}

/// Client-side failures. `Display` is the text shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response at all.
    #[error("Cannot reach server.")]
    Unreachable { detail: String },
}

/// The five API operations the view needs.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<PostResponse>, ClientError>;

    async fn create(&self, req: &PostRequest) -> Result<PostResponse, ClientError>;

    async fn update(&self, id: Uuid, req: &PostRequest) -> Result<PostResponse, ClientError>;

    async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError>;

    async fn like(&self, id: Uuid) -> Result<PostResponse, ClientError>;
}

/// `reqwest`-backed API client.
pub struct HttpPostsApi {
    base_url: String,
    client: Client,
}

impl HttpPostsApi {
    /// `base_url` is the server root, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Same as [`HttpPostsApi::new`] with a preconfigured `reqwest` client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/posts{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        op: Operation,
        req: RequestBuilder,
    ) -> Result<T, ClientError> {
        let res = req.send().await.map_err(|e| ClientError::Unreachable {
            detail: e.to_string(),
        })?;

        let status = res.status();
        if status.is_success() {
            return res.json::<T>().await.map_err(|e| {
                tracing::warn!(error = %e, ?op, "Undecodable response body");
                ClientError::Server {
                    status: status.as_u16(),
                    message: op.failure_message().to_string(),
                }
            });
        }

        let message = res
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| op.failure_message().to_string());

        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<PostResponse>, ClientError> {
        self.send(Operation::Fetch, self.client.get(self.url("")))
            .await
    }

    async fn create(&self, req: &PostRequest) -> Result<PostResponse, ClientError> {
        self.send(Operation::Create, self.client.post(self.url("")).json(req))
            .await
    }

    async fn update(&self, id: Uuid, req: &PostRequest) -> Result<PostResponse, ClientError> {
        let url = self.url(&format!("/{id}"));
        self.send(Operation::Update, self.client.put(url).json(req))
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let url = self.url(&format!("/{id}"));
        self.send(Operation::Delete, self.client.delete(url)).await
    }

    async fn like(&self, id: Uuid) -> Result<PostResponse, ClientError> {
        let url = self.url(&format!("/{id}/like"));
        self.send(Operation::Like, self.client.post(url)).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response on a local port and returns the base URL.
    async fn one_shot_server(
        status: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}")
    }

    fn local_api(base_url: String) -> HttpPostsApi {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpPostsApi::with_client(base_url, client)
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let api = HttpPostsApi::new("http://localhost:5000/");
        assert_eq!(api.url(""), "http://localhost:5000/api/posts");
        assert_eq!(api.url("/abc/like"), "http://localhost:5000/api/posts/abc/like");
    }

    #[test]
    fn test_error_display_is_banner_text() {
        let err = ClientError::Unreachable {
            detail: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "Cannot reach server.");

        let err = ClientError::Server {
            status: 404,
            message: "Post not found.".into(),
        };
        assert_eq!(err.to_string(), "Post not found.");
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced() {
        let base = one_shot_server(
            "404 Not Found",
            "application/json",
            r#"{"message":"Post not found."}"#,
        )
        .await;

        let err = local_api(base).like(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Server {
                status: 404,
                message: "Post not found.".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_uses_operation_fallback() {
        let base = one_shot_server("500 Internal Server Error", "text/plain", "boom").await;

        let err = local_api(base).delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete post.");
        assert!(matches!(err, ClientError::Server { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_uses_operation_fallback() {
        let base = one_shot_server("200 OK", "application/json", r#"{"unexpected":true}"#).await;

        let err = local_api(base).list().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch posts.");
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = local_api(format!("http://{addr}")).list().await.unwrap_err();
        assert!(matches!(err, ClientError::Unreachable { .. }), "{err:?}");
        assert_eq!(err.to_string(), "Cannot reach server.");
    }
}
