use crate::client::DocbaseClient;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::PostId;

pub fn run<C: DocbaseClient>(client: &C, domain: &str, id: PostId) -> Result<CmdResult> {
    let post = client.get_post(domain, id)?;
    Ok(CmdResult::default().with_post(post))
}
