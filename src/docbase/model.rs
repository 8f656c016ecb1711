use crate::error::{DocbaseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a post on DocBase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// Fixed-width form used when naming scratch files.
    pub fn padded(&self) -> String {
        format!("{:010}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DocbaseError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DocbaseError::Validation(
                "need to specify target post id".to_string(),
            ));
        }
        match trimmed.parse::<u64>() {
            Ok(n) if n > 0 => Ok(PostId(n)),
            _ => Err(DocbaseError::Validation(format!("illegal post id: {s:?}"))),
        }
    }
}

/// Visibility of a post. Values the service adds later are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    #[default]
    Everyone,
    Group,
    Private,
    Unknown(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Everyone => "everyone",
            Scope::Group => "group",
            Scope::Private => "private",
            Scope::Unknown(s) => s,
        }
    }
}

impl From<String> for Scope {
    fn from(s: String) -> Self {
        match s.as_str() {
            "everyone" => Scope::Everyone,
            "group" => Scope::Group,
            "private" => Scope::Private,
            _ => Scope::Unknown(s),
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A post as returned by the DocBase API.
///
/// Timestamps are kept as the ISO-8601 strings the service sends so they are
/// displayed exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub archived: bool,
    pub url: String,
    pub scope: Scope,
    pub tags: Vec<Tag>,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    pub fn post_id(&self) -> PostId {
        PostId(self.id)
    }

    /// One-line summary used in listings:
    /// `[archived][private] Title #tag-a #tag-b`.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if self.archived {
            out.push_str("[archived]");
        }
        if self.scope == Scope::Private {
            out.push('[');
            out.push_str(self.scope.as_str());
            out.push(']');
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&self.title);
        for tag in &self.tags {
            out.push_str(" #");
            out.push_str(&tag.name);
        }
        out
    }

    /// Body split into lines with DOS line endings normalized.
    pub fn body_lines(&self) -> Vec<String> {
        self.body
            .replace("\r\n", "\n")
            .split('\n')
            .map(str::to_string)
            .collect()
    }
}

/// Pagination data returned alongside a post listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(rename = "previous_page")]
    pub previous_page_url: Option<String>,
    #[serde(rename = "next_page")]
    pub next_page_url: Option<String>,
    pub total: u64,
}

/// Search parameters for listing posts. Unset fields are left off the request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Options applied when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostOptions {
    pub draft: bool,
    pub notice: bool,
    pub tags: Vec<String>,
    pub scope: Scope,
    pub groups: Vec<u64>,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            draft: true,
            notice: false,
            tags: Vec::new(),
            scope: Scope::Private,
            groups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub options: PostOptions,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            options: PostOptions::default(),
        }
    }
}

/// Fields sent when updating a post. Only the body is changed by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostUpdate {
    pub body: String,
}
