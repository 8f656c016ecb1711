use super::DocbaseClient;
use crate::error::{DocbaseError, Result};
use crate::logging::Logger;
use crate::model::{ListQuery, NewPost, PageMeta, Post, PostId, PostUpdate, Tag};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.docbase.io";

const TOKEN_HEADER: &str = "X-DocBaseToken";
const API_VERSION_HEADER: &str = "X-Api-Version";
const API_VERSION: &str = "2";
const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct PostsPage {
    posts: Vec<Post>,
    meta: PageMeta,
}

/// Blocking client for the DocBase REST API.
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
    logger: Logger,
}

impl HttpClient {
    pub fn new(token: impl Into<String>, logger: Logger) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(TIMEOUT)
            .user_agent(concat!("docbase-cli/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            logger,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, domain: &str, path: &str) -> String {
        format!(
            "{}/teams/{}/{}",
            self.base_url.trim_end_matches('/'),
            domain,
            path
        )
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        self.logger.debug(format_args!("{} {}", method, url));
        self.agent
            .request(method, url)
            .set(TOKEN_HEADER, &self.token)
            .set(API_VERSION_HEADER, API_VERSION)
    }
}

/// Query-string pairs for a listing; unset fields are omitted.
fn query_pairs(query: &ListQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(q) = &query.query {
        pairs.push(("q", q.clone()));
    }
    if let Some(page) = query.page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(per_page) = query.per_page {
        pairs.push(("per_page", per_page.to_string()));
    }
    pairs
}

fn map_error(err: ureq::Error, id: Option<PostId>) -> DocbaseError {
    match (err, id) {
        (ureq::Error::Status(404, _), Some(id)) => DocbaseError::NotFound(id),
        (ureq::Error::Status(code, response), _) => {
            let text = response.status_text().to_string();
            let body = response.into_string().unwrap_or_default();
            DocbaseError::Transport(format!("{} {}: {}", code, text, body.trim()))
        }
        (ureq::Error::Transport(transport), _) => DocbaseError::Transport(transport.to_string()),
    }
}

fn decode<T: DeserializeOwned>(response: ureq::Response) -> Result<T> {
    serde_json::from_reader(response.into_reader())
        .map_err(|e| DocbaseError::Transport(format!("invalid response body: {}", e)))
}

impl DocbaseClient for HttpClient {
    fn get_post(&self, domain: &str, id: PostId) -> Result<Post> {
        let url = self.url(domain, &format!("posts/{}", id));
        let response = self
            .request("GET", &url)
            .call()
            .map_err(|e| map_error(e, Some(id)))?;
        decode(response)
    }

    fn list_posts(&self, domain: &str, query: &ListQuery) -> Result<(Vec<Post>, PageMeta)> {
        let url = self.url(domain, "posts");
        let mut request = self.request("GET", &url);
        for (key, value) in query_pairs(query) {
            request = request.query(key, &value);
        }
        let response = request.call().map_err(|e| map_error(e, None))?;
        let page: PostsPage = decode(response)?;
        Ok((page.posts, page.meta))
    }

    fn create_post(&mut self, domain: &str, post: &NewPost) -> Result<Post> {
        let url = self.url(domain, "posts");
        let response = self
            .request("POST", &url)
            .send_json(post)
            .map_err(|e| map_error(e, None))?;
        decode(response)
    }

    fn update_post(&mut self, domain: &str, id: PostId, update: &PostUpdate) -> Result<Post> {
        let url = self.url(domain, &format!("posts/{}", id));
        let response = self
            .request("PATCH", &url)
            .send_json(update)
            .map_err(|e| map_error(e, Some(id)))?;
        decode(response)
    }

    fn list_tags(&self, domain: &str) -> Result<Vec<Tag>> {
        let url = self.url(domain, "tags");
        let response = self
            .request("GET", &url)
            .call()
            .map_err(|e| map_error(e, None))?;
        decode(response)
    }
}
