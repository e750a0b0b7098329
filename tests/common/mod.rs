#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};

use github_search_page::RepositoryService;

pub const REPOSITORY_NAMES: [&str; 5] = ["go", "freeCodeCamp", "laravel", "Python", "Java"];

pub fn make_fake_repo(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "owner": { "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4" },
        "html_url": "https://github.com/facebook/react",
        "updated_at": "2021-04-19",
        "stargazers_count": 167107,
        "forks_count": 33599,
        "open_issues_count": 707
    })
}

pub fn make_fake_response(total_count: u64, items: Vec<Value>) -> String {
    json!({ "total_count": total_count, "items": items }).to_string()
}

pub fn make_fake_error(message: &str) -> String {
    json!({ "message": message }).to_string()
}

pub fn repositories_by_name(name: &str) -> Vec<Value> {
    REPOSITORY_NAMES
        .iter()
        .filter(|candidate| **candidate == name)
        .map(|name| make_fake_repo(name, name))
        .collect()
}

/// `per_page` repositories named `repo-<page + 1>-<index>`.
pub fn repositories_for_page(page: u32, per_page: u32) -> Vec<Value> {
    (0..per_page)
        .map(|index| {
            let name = format!("repo-{}-{index}", page + 1);
            make_fake_repo(&name, &name)
        })
        .collect()
}

pub fn service(server: &ServerGuard) -> RepositoryService {
    RepositoryService::new(&server.url()).expect("client builds")
}

/// Any query gets `body` with `status`.
pub async fn mock_any(server: &mut ServerGuard, status: usize, body: String) -> Mock {
    server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// One page of a 1000-result search.
pub async fn mock_page(server: &mut ServerGuard, page: u32, per_page: u32) -> Mock {
    server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("per_page".into(), per_page.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(make_fake_response(1000, repositories_for_page(page, per_page)))
        .create_async()
        .await
}
