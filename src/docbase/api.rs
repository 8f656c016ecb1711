//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! docbase operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** ([`parse_post_id`] turns user text into a `PostId`)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! `DocbaseApi<C: DocbaseClient>` is generic over the client:
//! - Production: `DocbaseApi<HttpClient>`
//! - Testing: `DocbaseApi<InMemoryClient>`

use crate::client::DocbaseClient;
use crate::commands::{self, BodySource, CmdResult};
use crate::editor::CaptureEngine;
use crate::error::Result;
use crate::logging::Logger;
use crate::model::{ListQuery, PostId, PostOptions};

pub struct DocbaseApi<C: DocbaseClient> {
    client: C,
    domain: String,
    engine: CaptureEngine,
    logger: Logger,
}

impl<C: DocbaseClient> DocbaseApi<C> {
    pub fn new(
        client: C,
        domain: impl Into<String>,
        engine: CaptureEngine,
        logger: Logger,
    ) -> Self {
        Self {
            client,
            domain: domain.into(),
            engine,
            logger,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn view_post(&self, id: PostId) -> Result<CmdResult> {
        self.logger
            .debug(format_args!("fetching post {} from {}", id, self.domain));
        commands::view::run(&self.client, &self.domain, id)
    }

    pub fn list_posts(&self, query: &ListQuery) -> Result<CmdResult> {
        self.logger.debug(format_args!(
            "listing posts in {}: {:?}",
            self.domain, query
        ));
        commands::list::run(&self.client, &self.domain, query)
    }

    pub fn create_post(
        &mut self,
        title: String,
        source: &BodySource,
        options: PostOptions,
    ) -> Result<CmdResult> {
        commands::create::run(
            &mut self.client,
            &self.engine,
            &self.domain,
            title,
            source,
            options,
        )
    }

    pub fn edit_post(&mut self, id: PostId, source: &BodySource) -> Result<CmdResult> {
        commands::edit::run(&mut self.client, &self.engine, &self.domain, id, source)
    }

    pub fn list_tags(&self) -> Result<CmdResult> {
        commands::tags::run(&self.client, &self.domain)
    }
}

/// Parses a post id typed by the user. A missing id is reported as such.
pub fn parse_post_id(input: Option<&str>) -> Result<PostId> {
    input.unwrap_or_default().parse()
}
