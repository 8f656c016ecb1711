use crate::client::DocbaseClient;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ListQuery;

pub fn run<C: DocbaseClient>(client: &C, domain: &str, query: &ListQuery) -> Result<CmdResult> {
    let (posts, meta) = client.list_posts(domain, query)?;
    Ok(CmdResult::default().with_listed_posts(posts, meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::InMemoryClient;

    #[test]
    fn lists_a_page_with_meta() {
        let client = (1..=3).fold(InMemoryClient::new(), |c, i| {
            c.with_post("kray", &format!("post {i}"), "")
        });
        let query = ListQuery {
            query: None,
            page: Some(1),
            per_page: Some(2),
        };
        let result = run(&client, "kray", &query).unwrap();
        assert_eq!(result.listed_posts.len(), 2);
        let meta = result.meta.unwrap();
        assert_eq!(meta.total, 3);
        assert!(meta.next_page_url.is_some());
    }

    #[test]
    fn empty_team_lists_nothing() {
        let result = run(&InMemoryClient::new(), "kray", &ListQuery::default()).unwrap();
        assert!(result.listed_posts.is_empty());
        assert_eq!(result.meta.unwrap().total, 0);
    }
}
