//! # Rendering
//!
//! Turns command results into terminal text through the templates in
//! [`super::templates`]. Line splitting and truncation stay in Rust; templates
//! only lay out and style what they are given.
//!
//! Every public `render_*` function detects color support on stdout. The
//! `*_internal` variants take `use_color` explicitly so tests can pin it.

use super::styles::{names, DOCBASE_THEME};
use super::templates::{
    MESSAGES_TEMPLATE, META_TEMPLATE, POST_BODY_TEMPLATE, POST_DETAIL_TEMPLATE, POST_LIST_TEMPLATE,
    POST_URL_TEMPLATE, TAG_LIST_TEMPLATE,
};
use docbase::commands::{CmdMessage, MessageLevel};
use docbase::error::Result;
use docbase::model::{PageMeta, Post, Tag};
use docbase::terminal;
use minijinja::{Environment, Value};
use serde::Serialize;

#[derive(Serialize)]
struct PostDetailData<'a> {
    id: u64,
    title: &'a str,
    tags: Vec<&'a str>,
    created_at: &'a str,
    updated_at: &'a str,
    draft: bool,
    archived: bool,
    lines: Vec<String>,
    shown: usize,
    total: usize,
}

#[derive(Serialize)]
struct PostBodyData {
    body: String,
}

#[derive(Serialize)]
struct PostLineData {
    id: u64,
    summary: String,
}

#[derive(Serialize)]
struct PostListData {
    posts: Vec<PostLineData>,
}

#[derive(Serialize)]
struct MetaData<'a> {
    total: u64,
    next: Option<&'a str>,
    prev: Option<&'a str>,
}

#[derive(Serialize)]
struct TagListData<'a> {
    tags: Vec<&'a str>,
}

#[derive(Serialize)]
struct PostUrlData<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String> {
    let use_color = use_color.unwrap_or_else(terminal::colors_enabled);
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        DOCBASE_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("output", template)?;
    let rendered = env.get_template("output")?.render(data)?;
    Ok(rendered)
}

/// Header block, the first `lines` body lines (all when 0), and a count footer.
pub fn render_post_detail(post: &Post, lines: usize) -> Result<String> {
    render_post_detail_internal(post, lines, None)
}

fn render_post_detail_internal(
    post: &Post,
    lines: usize,
    use_color: Option<bool>,
) -> Result<String> {
    let mut body = post.body_lines();
    let total = body.len();
    if lines > 0 {
        body.truncate(lines);
    }
    let data = PostDetailData {
        id: post.id,
        title: &post.title,
        tags: post.tags.iter().map(|t| t.name.as_str()).collect(),
        created_at: &post.created_at,
        updated_at: &post.updated_at,
        draft: post.draft,
        archived: post.archived,
        shown: body.len(),
        lines: body,
        total,
    };
    render_template(POST_DETAIL_TEMPLATE, &data, use_color)
}

/// Just the body, for piping into other programs.
pub fn render_post_body(post: &Post) -> Result<String> {
    render_post_body_internal(post, None)
}

fn render_post_body_internal(post: &Post, use_color: Option<bool>) -> Result<String> {
    let normalized = post.body.replace("\r\n", "\n");
    let body = normalized
        .strip_suffix('\n')
        .unwrap_or(&normalized)
        .to_string();
    render_template(POST_BODY_TEMPLATE, &PostBodyData { body }, use_color)
}

pub fn render_post_list(posts: &[Post]) -> Result<String> {
    render_post_list_internal(posts, None)
}

fn render_post_list_internal(posts: &[Post], use_color: Option<bool>) -> Result<String> {
    let data = PostListData {
        posts: posts
            .iter()
            .map(|post| PostLineData {
                id: post.id,
                summary: post.summary(),
            })
            .collect(),
    };
    render_template(POST_LIST_TEMPLATE, &data, use_color)
}

pub fn render_meta(meta: &PageMeta) -> Result<String> {
    render_meta_internal(meta, None)
}

fn render_meta_internal(meta: &PageMeta, use_color: Option<bool>) -> Result<String> {
    let data = MetaData {
        total: meta.total,
        next: meta.next_page_url.as_deref().filter(|u| !u.is_empty()),
        prev: meta.previous_page_url.as_deref().filter(|u| !u.is_empty()),
    };
    render_template(META_TEMPLATE, &data, use_color)
}

pub fn render_tags(tags: &[Tag]) -> Result<String> {
    render_tags_internal(tags, None)
}

fn render_tags_internal(tags: &[Tag], use_color: Option<bool>) -> Result<String> {
    let data = TagListData {
        tags: tags.iter().map(|t| t.name.as_str()).collect(),
    };
    render_template(TAG_LIST_TEMPLATE, &data, use_color)
}

pub fn render_post_url(post: &Post) -> Result<String> {
    render_post_url_internal(post, None)
}

fn render_post_url_internal(post: &Post, use_color: Option<bool>) -> Result<String> {
    render_template(
        POST_URL_TEMPLATE,
        &PostUrlData { url: &post.url },
        use_color,
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> Result<String> {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> Result<String> {
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}
