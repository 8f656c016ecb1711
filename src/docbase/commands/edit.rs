use crate::client::DocbaseClient;
use crate::commands::helpers::resolve_body;
use crate::commands::{BodySource, CmdMessage, CmdResult};
use crate::editor::{CaptureEngine, ScratchName};
use crate::error::Result;
use crate::model::{PostId, PostUpdate};

/// Replaces the body of an existing post.
///
/// The post is fetched first so a missing id fails before any editor opens,
/// and so the editor can be seeded with the current body.
pub fn run<C: DocbaseClient>(
    client: &mut C,
    engine: &CaptureEngine,
    domain: &str,
    id: PostId,
    source: &BodySource,
) -> Result<CmdResult> {
    let existing = client.get_post(domain, id)?;

    let mut result = CmdResult::default();
    let body = resolve_body(
        source,
        engine,
        Some(&existing.body),
        ScratchName::Post(id),
        &mut result,
    )?;

    let updated = client.update_post(domain, id, &PostUpdate { body })?;
    result.add_message(CmdMessage::success("Updated."));
    result.post = Some(updated);
    Ok(result)
}
