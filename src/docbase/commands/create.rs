use crate::client::DocbaseClient;
use crate::commands::helpers::resolve_body;
use crate::commands::{BodySource, CmdResult};
use crate::editor::{CaptureEngine, ScratchName};
use crate::error::Result;
use crate::model::{NewPost, PostOptions};
use chrono::{Local, NaiveDate};

/// Title used when none is given: `<YYYY-MM-DD> memo`.
pub fn default_title() -> String {
    title_for(Local::now().date_naive())
}

fn title_for(date: NaiveDate) -> String {
    format!("{} memo", date.format("%Y-%m-%d"))
}

pub fn run<C: DocbaseClient>(
    client: &mut C,
    engine: &CaptureEngine,
    domain: &str,
    title: String,
    source: &BodySource,
    options: PostOptions,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let body = resolve_body(source, engine, None, ScratchName::Fresh, &mut result)?;

    let post = NewPost {
        title,
        body,
        options,
    };
    let created = client.create_post(domain, &post)?;
    result.post = Some(created);
    Ok(result)
}
