//! # DocBase Client
//!
//! The remote service is reached through the [`DocbaseClient`] trait so the
//! command layer never depends on HTTP directly.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: production client for the DocBase v2 REST API
//!   - `X-DocBaseToken` authentication
//!   - blocking, one request at a time, no retries
//!
//! - [`memory::InMemoryClient`]: in-memory service for testing
//!   - assigns ids, filters and paginates like the real service
//!
//! Every call takes the team `domain` explicitly, mirroring the API's
//! `/teams/{domain}/...` paths.

use crate::error::Result;
use crate::model::{ListQuery, NewPost, PageMeta, Post, PostId, PostUpdate, Tag};

pub mod http;
pub mod memory;

pub trait DocbaseClient {
    /// Fetch a single post. Fails with `NotFound` when the id does not exist.
    fn get_post(&self, domain: &str, id: PostId) -> Result<Post>;

    /// Search posts, returning one page plus pagination metadata.
    fn list_posts(&self, domain: &str, query: &ListQuery) -> Result<(Vec<Post>, PageMeta)>;

    fn create_post(&mut self, domain: &str, post: &NewPost) -> Result<Post>;

    fn update_post(&mut self, domain: &str, id: PostId, update: &PostUpdate) -> Result<Post>;

    fn list_tags(&self, domain: &str) -> Result<Vec<Tag>>;
}
