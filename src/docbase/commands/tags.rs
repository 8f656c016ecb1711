use crate::client::DocbaseClient;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<C: DocbaseClient>(client: &C, domain: &str) -> Result<CmdResult> {
    let tags = client.list_tags(domain)?;
    Ok(CmdResult::default().with_tags(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::InMemoryClient;

    #[test]
    fn lists_team_tags() {
        let client = InMemoryClient::new()
            .with_tag("kray", "rust")
            .with_tag("kray", "go");
        let names: Vec<_> = run(&client, "kray")
            .unwrap()
            .tags
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["go", "rust"]);
    }
}
