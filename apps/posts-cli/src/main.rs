//! # posts-cli
//!
//! Drives the posts view against a running API server and prints the result.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use devconnect_client::render::render;
use devconnect_client::{HttpPostsApi, PostsView};
use devconnect_core::domain::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};

#[derive(Parser)]
#[command(name = "posts-cli", version, about = "DevConnect posts from the terminal")]
struct Cli {
    /// API server root.
    #[arg(
        long,
        env = "DEVCONNECT_API_URL",
        default_value = "http://localhost:5000"
    )]
    server: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show all posts (default).
    List,
    /// Add a new post.
    Add {
        #[arg(long, value_parser = parse_title)]
        title: String,
        #[arg(long, value_parser = parse_content)]
        content: String,
    },
    /// Edit an existing post. Omitted fields keep their current value.
    Edit {
        id: Uuid,
        #[arg(long, value_parser = parse_title)]
        title: Option<String>,
        #[arg(long, value_parser = parse_content)]
        content: Option<String>,
    },
    /// Like a post.
    Like { id: Uuid },
    /// Delete a post.
    Delete { id: Uuid },
}

// Over-long values are an error here; the view itself would clamp them.
fn within_limit(value: &str, field: &str, max: usize) -> Result<String, String> {
    let len = value.chars().count();
    if len > max {
        return Err(format!("{field} is {len} characters, at most {max} allowed"));
    }
    Ok(value.to_string())
}

fn parse_title(value: &str) -> Result<String, String> {
    within_limit(value, "title", TITLE_MAX_CHARS)
}

fn parse_content(value: &str) -> Result<String, String> {
    within_limit(value, "content", CONTENT_MAX_CHARS)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(server = %cli.server, "Connecting");

    let mut view = PostsView::new(HttpPostsApi::new(cli.server));
    view.mount().await;

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { title, content } => {
            view.set_title(title);
            view.set_content(content);
            view.submit().await;
        }
        Command::Edit { id, title, content } => {
            if !view.state().posts().iter().any(|p| p.id == id) {
                print!("{}", render(view.state(), chrono::Utc::now()));
                bail!("post {id} is not in the current list");
            }
            view.start_edit(id);
            if let Some(title) = title {
                view.set_title(title);
            }
            if let Some(content) = content {
                view.set_content(content);
            }
            view.submit().await;
        }
        Command::Like { id } => view.like(id).await,
        Command::Delete { id } => view.delete(id).await,
    }

    print!("{}", render(view.state(), chrono::Utc::now()));

    if let Some(first) = view.state().errors().first() {
        bail!("request failed: {first}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_add_rejects_overlong_title() {
        let title = "t".repeat(TITLE_MAX_CHARS + 1);
        let args = ["posts-cli", "add", "--title", title.as_str(), "--content", "c"];
        let err = Cli::try_parse_from(args)
            .err()
            .expect("overlong title must be rejected");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("at most 50"));
    }

    #[test]
    fn test_edit_rejects_overlong_content() {
        let id = Uuid::new_v4().to_string();
        let content = "é".repeat(CONTENT_MAX_CHARS + 1);
        let args = ["posts-cli", "edit", id.as_str(), "--content", content.as_str()];
        let result = Cli::try_parse_from(args);

        assert!(matches!(result, Err(e) if e.kind() == ErrorKind::ValueValidation));
    }

    #[test]
    fn test_values_at_the_limit_are_kept_whole() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        let content = "c".repeat(CONTENT_MAX_CHARS);
        let args = [
            "posts-cli",
            "add",
            "--title",
            title.as_str(),
            "--content",
            content.as_str(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Some(Command::Add { title: t, content: c }) => {
                assert_eq!(t, title);
                assert_eq!(c, content);
            }
            _ => panic!("expected the add command"),
        }
    }
}
