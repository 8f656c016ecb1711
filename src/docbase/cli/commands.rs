//! # CLI Layer
//!
//! One possible UI client for the docbase library. This is the only place that:
//! - Knows about stdout/stderr
//! - Decides between decorated and plain output
//! - Turns configuration into a live API client
//!
//! ## Structure
//!
//! - `run()`: Main dispatch (called by `main.rs`)
//! - `init_context()`: Loads the profile and builds the logger-aware context
//! - `handle_*()`: Per-command handlers that call the API and print rendered output

use super::render::{
    render_messages, render_meta, render_post_body, render_post_detail, render_post_list,
    render_post_url, render_tags,
};
use super::setup::{Cli, Commands};
use docbase::api::{parse_post_id, DocbaseApi};
use docbase::browser;
use docbase::client::http::HttpClient;
use docbase::commands::{create, BodySource, CmdResult};
use docbase::config::Config;
use docbase::editor::{CaptureEngine, EditorPreference};
use docbase::error::Result;
use docbase::logging::Logger;
use docbase::model::{ListQuery, PostId, PostOptions};
use docbase::terminal::{self, Stream};
use std::path::PathBuf;

struct AppContext {
    config: Config,
    logger: Logger,
}

impl AppContext {
    /// Builds the API; fails when the domain or token is missing.
    fn api(&self) -> Result<DocbaseApi<HttpClient>> {
        let domain = self.config.require_domain()?;
        let token = self.config.require_token()?;
        let client = HttpClient::new(token, self.logger.clone());
        let engine = CaptureEngine::new(
            EditorPreference::from_env(self.config.editor()),
            self.logger.clone(),
        )
        .with_temp_dir_from_env();
        Ok(DocbaseApi::new(
            client,
            domain,
            engine,
            self.logger.clone(),
        ))
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let logger = Logger::new(cli.is_verbose());

    match &cli.command {
        Commands::View { id, lines, web } => {
            let id = parse_post_id(id.as_deref())?;
            let ctx = init_context(&cli, logger)?;
            handle_view(&ctx, id, *lines, *web)
        }
        Commands::List {
            query,
            page,
            per_page,
            meta,
        } => {
            let ctx = init_context(&cli, logger)?;
            let query = list_query(query.clone(), *page, *per_page);
            handle_list(&ctx, &query, *meta)
        }
        Commands::New {
            title,
            body,
            body_file,
        } => {
            let ctx = init_context(&cli, logger)?;
            let source = BodySource::from_flags(body.clone(), body_file.clone());
            handle_new(&ctx, title.clone(), &source)
        }
        Commands::Edit {
            id,
            body,
            body_file,
        } => {
            let id = parse_post_id(id.as_deref())?;
            let ctx = init_context(&cli, logger)?;
            let source = BodySource::from_flags(body.clone(), body_file.clone());
            handle_edit(&ctx, id, &source)
        }
        Commands::Tags => {
            let ctx = init_context(&cli, logger)?;
            handle_tags(&ctx)
        }
    }
}

fn init_context(cli: &Cli, logger: Logger) -> Result<AppContext> {
    let path: Option<PathBuf> = cli.config.clone().or_else(Config::default_path);
    let config = match &path {
        Some(path) => {
            logger.debug(format_args!(
                "loading profile '{}' from {}",
                cli.profile,
                path.display()
            ));
            Config::load_path(path, &cli.profile)?
        }
        None => {
            logger.debug(format_args!("no config directory; using flags only"));
            Config::default()
        }
    };
    let config = config.with_overrides(cli.token.clone(), cli.domain.clone());
    Ok(AppContext { config, logger })
}

/// Zero values mean "let the service decide", as does an empty query.
fn list_query(query: Option<String>, page: u32, per_page: u32) -> ListQuery {
    ListQuery {
        query: query.filter(|q| !q.is_empty()),
        page: (page != 0).then_some(page),
        per_page: (per_page != 0).then_some(per_page),
    }
}

fn handle_view(ctx: &AppContext, id: PostId, lines: usize, web: bool) -> Result<()> {
    let result = ctx.api()?.view_post(id)?;
    let Some(post) = &result.post else {
        return Ok(());
    };

    if web {
        ctx.logger
            .debug(format_args!("opening {} in the browser", post.url));
        return browser::open_url(&post.url);
    }

    if terminal::is_interactive(Stream::Stdout) {
        print!("{}", render_post_detail(post, lines)?);
    } else {
        print!("{}", render_post_body(post)?);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, query: &ListQuery, with_meta: bool) -> Result<()> {
    let result = ctx.api()?.list_posts(query)?;
    print!("{}", render_post_list(&result.listed_posts)?);
    if with_meta {
        if let Some(meta) = &result.meta {
            print!("{}", render_meta(meta)?);
        }
    }
    Ok(())
}

fn handle_new(ctx: &AppContext, title: Option<String>, source: &BodySource) -> Result<()> {
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(create::default_title);
    let result = ctx
        .api()?
        .create_post(title, source, PostOptions::default())?;
    print_post_result(&result)
}

fn handle_edit(ctx: &AppContext, id: PostId, source: &BodySource) -> Result<()> {
    let result = ctx.api()?.edit_post(id, source)?;
    print_post_result(&result)
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api()?.list_tags()?;
    print!("{}", render_tags(&result.tags)?);
    Ok(())
}

/// Messages first, then the URL of the post that was written.
fn print_post_result(result: &CmdResult) -> Result<()> {
    print!("{}", render_messages(&result.messages)?);
    if let Some(post) = &result.post {
        print!("{}", render_post_url(post)?);
    }
    Ok(())
}
