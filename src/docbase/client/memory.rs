use super::http::DEFAULT_BASE_URL;
use super::DocbaseClient;
use crate::error::{DocbaseError, Result};
use crate::model::{ListQuery, NewPost, PageMeta, Post, PostId, PostUpdate, Tag};
use std::collections::{BTreeMap, BTreeSet};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 20;

/// In-memory DocBase service for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    posts: BTreeMap<(String, u64), Post>,
    extra_tags: BTreeMap<String, BTreeSet<String>>,
    last_id: u64,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a post as-is, assigning an id when it has none.
    pub fn insert(&mut self, domain: &str, mut post: Post) -> PostId {
        if post.id == 0 {
            self.last_id += 1;
            post.id = self.last_id;
        } else {
            self.last_id = self.last_id.max(post.id);
        }
        let id = post.post_id();
        self.posts.insert((domain.to_string(), post.id), post);
        id
    }

    pub fn with_post(mut self, domain: &str, title: &str, body: &str) -> Self {
        self.insert(
            domain,
            Post {
                title: title.to_string(),
                body: body.to_string(),
                ..Default::default()
            },
        );
        self
    }

    /// Registers a tag that no post carries yet.
    pub fn with_tag(mut self, domain: &str, name: &str) -> Self {
        self.extra_tags
            .entry(domain.to_string())
            .or_default()
            .insert(name.to_string());
        self
    }

    fn team_posts<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts
            .iter()
            .filter(move |((d, _), _)| d == domain)
            .map(|(_, post)| post)
    }

    fn page_url(domain: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}/teams/{}/posts?page={}&per_page={}",
            DEFAULT_BASE_URL, domain, page, per_page
        )
    }
}

fn now() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}

fn matches(post: &Post, q: &str) -> bool {
    q.split_whitespace()
        .all(|word| post.title.contains(word) || post.body.contains(word))
}

impl DocbaseClient for InMemoryClient {
    fn get_post(&self, domain: &str, id: PostId) -> Result<Post> {
        self.posts
            .get(&(domain.to_string(), id.0))
            .cloned()
            .ok_or(DocbaseError::NotFound(id))
    }

    /// Newest posts first, like the real service.
    fn list_posts(&self, domain: &str, query: &ListQuery) -> Result<(Vec<Post>, PageMeta)> {
        let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);

        let mut hits: Vec<&Post> = self
            .team_posts(domain)
            .filter(|post| query.query.as_deref().map_or(true, |q| matches(post, q)))
            .collect();
        hits.reverse();

        let total = hits.len() as u64;
        let start = ((page - 1) as usize).saturating_mul(per_page as usize);
        let posts: Vec<Post> = hits
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        let has_next = (page as u64) * (per_page as u64) < total;
        let meta = PageMeta {
            previous_page_url: (page > 1).then(|| Self::page_url(domain, page - 1, per_page)),
            next_page_url: has_next.then(|| Self::page_url(domain, page + 1, per_page)),
            total,
        };
        Ok((posts, meta))
    }

    fn create_post(&mut self, domain: &str, post: &NewPost) -> Result<Post> {
        if post.title.trim().is_empty() {
            return Err(DocbaseError::Validation("title is required".to_string()));
        }
        let stamp = now();
        let mut created = Post {
            title: post.title.clone(),
            body: post.body.clone(),
            draft: post.options.draft,
            scope: post.options.scope.clone(),
            tags: post.options.tags.iter().map(Tag::new).collect(),
            created_at: stamp.clone(),
            updated_at: stamp,
            ..Default::default()
        };
        let id = self.insert(domain, created.clone());
        created.id = id.0;
        created.url = format!("https://{}.docbase.io/posts/{}", domain, id);
        self.posts
            .insert((domain.to_string(), id.0), created.clone());
        Ok(created)
    }

    fn update_post(&mut self, domain: &str, id: PostId, update: &PostUpdate) -> Result<Post> {
        let post = self
            .posts
            .get_mut(&(domain.to_string(), id.0))
            .ok_or(DocbaseError::NotFound(id))?;
        post.body = update.body.clone();
        post.updated_at = now();
        Ok(post.clone())
    }

    /// Every tag used by the team's posts plus registered ones, sorted by name.
    fn list_tags(&self, domain: &str) -> Result<Vec<Tag>> {
        let mut names: BTreeSet<String> = self
            .team_posts(domain)
            .flat_map(|post| post.tags.iter().map(|t| t.name.clone()))
            .collect();
        if let Some(extra) = self.extra_tags.get(domain) {
            names.extend(extra.iter().cloned());
        }
        Ok(names.into_iter().map(Tag::new).collect())
    }
}
