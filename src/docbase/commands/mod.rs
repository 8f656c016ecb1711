//! # Commands
//!
//! One module per user-facing operation. Each `run` function takes the client
//! (and the capture engine when it may open an editor), performs the work, and
//! returns a [`CmdResult`]. Nothing here prints; presentation belongs to the CLI.

use crate::model::{PageMeta, Post, Tag};
use std::path::PathBuf;

pub mod create;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod tags;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The single post a command fetched, created or updated.
    pub post: Option<Post>,
    pub listed_posts: Vec<Post>,
    pub meta: Option<PageMeta>,
    pub tags: Vec<Tag>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.post = Some(post);
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>, meta: PageMeta) -> Self {
        self.listed_posts = posts;
        self.meta = Some(meta);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }
}

/// Where a post body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    Inline(String),
    File(PathBuf),
    /// Open the user's editor, seeded with the current body if there is one.
    Editor,
}

impl BodySource {
    /// Inline text wins over a file; with neither, the editor is used.
    /// Empty values count as absent.
    pub fn from_flags(body: Option<String>, body_file: Option<PathBuf>) -> Self {
        match (body, body_file) {
            (Some(body), _) if !body.is_empty() => BodySource::Inline(body),
            (_, Some(path)) if !path.as_os_str().is_empty() => BodySource::File(path),
            _ => BodySource::Editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_source_precedence() {
        assert_eq!(
            BodySource::from_flags(Some("x".into()), Some("f.md".into())),
            BodySource::Inline("x".into())
        );
        assert_eq!(
            BodySource::from_flags(Some(String::new()), Some("f.md".into())),
            BodySource::File("f.md".into())
        );
        assert_eq!(BodySource::from_flags(None, None), BodySource::Editor);
        assert_eq!(
            BodySource::from_flags(None, Some(PathBuf::new())),
            BodySource::Editor
        );
    }
}
