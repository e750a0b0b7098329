mod common;

use mockito::Matcher;

use common::*;
use github_search_page::app::{run_fetch, run_once};
use github_search_page::content::{NO_RESULTS_MESSAGE, PROMPT_MESSAGE};
use github_search_page::page::{PageView, ResultsView};
use github_search_page::table::{Cell, LinkTarget};
use github_search_page::{PageSize, RepositoryService, SearchPage};

fn mounted() -> SearchPage {
    let mut page = SearchPage::new();
    assert!(page.mount().is_none());
    page
}

fn results(view: &PageView) -> &ResultsView {
    view.content.results().expect("results table is shown")
}

fn first_cell_text(page: &SearchPage) -> String {
    let view = page.view();
    results(&view).table.rows[0].cells[0].text().to_string()
}

async fn search(page: &mut SearchPage, service: &RepositoryService) {
    let request = page.click_search().expect("search starts a fetch");
    run_fetch(page, service, request).await;
}

#[test]
fn mounted_page_shows_the_prompt_and_no_table() {
    let page = mounted();
    let view = page.view();

    assert_eq!(view.title, "Github search page");
    assert_eq!(view.filter_label, "Filter by");
    assert_eq!(view.search_button.label, "Search");
    assert!(!view.search_button.disabled);
    assert_eq!(view.content.message(), Some(PROMPT_MESSAGE));
    assert!(view.content.results().is_none());
}

#[tokio::test]
async fn search_button_is_disabled_until_the_search_is_done() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 200, make_fake_response(1, vec![make_fake_repo("10270250", "react")])).await;
    let service = service(&server);

    let mut page = mounted();
    page.set_filter("test");
    assert!(!page.view().search_button.disabled);

    let request = page.click_search().unwrap();
    assert!(page.view().search_button.disabled);

    run_fetch(&mut page, &service, request).await;
    assert!(!page.view().search_button.disabled);
}

#[tokio::test]
async fn results_are_shown_in_a_table_with_every_field() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 200, make_fake_response(1, vec![make_fake_repo("10270250", "react")])).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;

    let view = page.view();
    let shown = results(&view);
    assert_eq!(shown.table.headers, ["Repository", "Stars", "Forks", "Open issues", "Updated at"]);
    assert_eq!(shown.table.rows.len(), 1);

    let [repository, stars, forks, open_issues, updated_at] = &shown.table.rows[0].cells;
    let Cell::Repository { avatar, link } = repository else {
        panic!("first cell must hold avatar and link");
    };
    assert_eq!(avatar.alt, "react");
    assert_eq!(avatar.src, "https://avatars.githubusercontent.com/u/69631?v=4");
    assert_eq!(link.text, "react");
    assert_eq!(link.href, "https://github.com/facebook/react");
    assert_eq!(link.target, LinkTarget::NewContext);
    assert_eq!(stars.text(), "167107");
    assert_eq!(forks.text(), "33599");
    assert_eq!(open_issues.text(), "707");
    assert_eq!(updated_at.text(), "2021-04-19");
}

#[tokio::test]
async fn pagination_shows_totals_sizes_and_buttons() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 200, make_fake_response(1, vec![make_fake_repo("10270250", "react")])).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;

    let view = page.view();
    let pagination = &results(&view).pagination;
    assert_eq!(pagination.summary(), "1-1 of 1");
    assert_eq!(pagination.options, [PageSize::Thirty, PageSize::Fifty, PageSize::Hundred]);
    assert_eq!(pagination.rows_per_page, PageSize::Thirty);
    assert!(!pagination.previous_enabled);
}

#[tokio::test]
async fn empty_search_shows_the_no_results_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 200, make_fake_response(0, vec![])).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;

    let view = page.view();
    assert!(page.has_searched());
    assert_eq!(view.content.message(), Some(NO_RESULTS_MESSAGE));
    assert!(view.content.results().is_none());
}

#[tokio::test]
async fn filter_text_is_sent_as_the_query() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "laravel".into()),
            Matcher::UrlEncoded("page".into(), "0".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(make_fake_response(1, repositories_by_name("laravel")))
        .create_async()
        .await;
    let service = service(&server);

    let mut page = mounted();
    page.set_filter("laravel");
    search(&mut page, &service).await;

    m.assert_async().await;
    assert_eq!(first_cell_text(&page), "laravel");
    let view = page.view();
    let Cell::Repository { link, .. } = &results(&view).table.rows[0].cells[0] else {
        panic!("first cell must hold the link");
    };
    assert_eq!(link.target, LinkTarget::NewContext);
}

#[tokio::test]
async fn selecting_fifty_rows_fetches_fifty() {
    let mut server = mockito::Server::new_async().await;
    let _p30 = mock_page(&mut server, 0, 30).await;
    let _p50 = mock_page(&mut server, 0, 50).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;
    assert_eq!(results(&page.view()).table.rows.len(), 30);

    let request = page.change_rows_per_page(PageSize::Fifty).unwrap();
    assert!(page.view().search_button.disabled);
    run_fetch(&mut page, &service, request).await;

    assert!(!page.view().search_button.disabled);
    assert_eq!(results(&page.view()).table.rows.len(), 50);
    assert_eq!(results(&page.view()).pagination.summary(), "1-50 of 1000");
}

#[tokio::test]
async fn next_then_previous_returns_to_the_first_page() {
    let mut server = mockito::Server::new_async().await;
    let _p0 = mock_page(&mut server, 0, 30).await;
    let _p1 = mock_page(&mut server, 1, 30).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;
    assert_eq!(first_cell_text(&page), "repo-1-0");
    assert!(results(&page.view()).pagination.next_enabled);

    let request = page.next_page().unwrap();
    assert!(page.view().search_button.disabled);
    run_fetch(&mut page, &service, request).await;
    assert_eq!(first_cell_text(&page), "repo-2-0");
    assert_eq!(results(&page.view()).pagination.summary(), "31-60 of 1000");

    let request = page.previous_page().unwrap();
    run_fetch(&mut page, &service, request).await;
    assert_eq!(first_cell_text(&page), "repo-1-0");
}

#[tokio::test]
async fn next_then_fifty_rows_shows_the_first_page() {
    let mut server = mockito::Server::new_async().await;
    let _p0 = mock_page(&mut server, 0, 30).await;
    let _p1 = mock_page(&mut server, 1, 30).await;
    let _p50 = mock_page(&mut server, 0, 50).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;
    let request = page.next_page().unwrap();
    run_fetch(&mut page, &service, request).await;
    assert_eq!(first_cell_text(&page), "repo-2-0");

    let request = page.change_rows_per_page(PageSize::Fifty).unwrap();
    assert_eq!(page.current_page(), 0);
    run_fetch(&mut page, &service, request).await;
    assert_eq!(first_cell_text(&page), "repo-1-0");
}

#[tokio::test]
async fn next_then_search_again_shows_the_first_page_with_one_request() {
    let mut server = mockito::Server::new_async().await;
    let p0 = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(make_fake_response(1000, repositories_for_page(0, 30)))
        .expect(2)
        .create_async()
        .await;
    let _p1 = mock_page(&mut server, 1, 30).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;
    let request = page.next_page().unwrap();
    run_fetch(&mut page, &service, request).await;
    assert_eq!(first_cell_text(&page), "repo-2-0");

    search(&mut page, &service).await;

    p0.assert_async().await;
    assert_eq!(first_cell_text(&page), "repo-1-0");
}

#[tokio::test]
async fn unprocessable_entity_is_shown_in_a_notification() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 422, make_fake_error("Unprocessable Entity")).await;
    let service = service(&server);

    let mut page = mounted();
    assert_eq!(page.view().notification, None);

    search(&mut page, &service).await;

    assert_eq!(page.view().notification.as_deref(), Some("Unprocessable Entity"));
    assert!(!page.is_searching());
    assert!(!page.has_searched());
}

#[tokio::test]
async fn unexpected_error_is_shown_in_a_notification() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_any(&mut server, 500, make_fake_error("Unexpected error")).await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;

    assert_eq!(page.notification_message(), Some("Unexpected error"));
}

#[tokio::test]
async fn failed_search_keeps_the_previous_results() {
    let mut server = mockito::Server::new_async().await;
    let _p0 = mock_page(&mut server, 0, 30).await;
    let _err = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(422)
        .with_body(make_fake_error("Validation Failed"))
        .create_async()
        .await;
    let service = service(&server);

    let mut page = mounted();
    search(&mut page, &service).await;
    let request = page.next_page().unwrap();
    run_fetch(&mut page, &service, request).await;

    assert_eq!(page.notification_message(), Some("Validation Failed"));
    assert_eq!(first_cell_text(&page), "repo-1-0");
    assert_eq!(page.current_page(), 1);
}

#[tokio::test]
async fn unreachable_server_becomes_a_notification() {
    let service = RepositoryService::new("http://127.0.0.1:1").unwrap();

    let mut page = mounted();
    search(&mut page, &service).await;

    let message = page.notification_message().expect("notification is open");
    assert!(message.starts_with("network error"), "{message}");
    assert!(!page.is_searching());
}

#[tokio::test]
async fn get_repos_returns_the_raw_response() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "rust async".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .with_status(503)
        .with_body("not json at all")
        .expect(1)
        .create_async()
        .await;
    let service = service(&server);

    let raw = service.get_repos("rust async", 2, PageSize::Hundred).await.unwrap();

    m.assert_async().await;
    assert_eq!(raw.status.as_u16(), 503);
    assert_eq!(raw.body, "not json at all");
}

#[tokio::test]
async fn run_once_walks_to_the_requested_page() {
    let mut server = mockito::Server::new_async().await;
    let _p0 = mock_page(&mut server, 0, 50).await;
    let _p2 = mock_page(&mut server, 2, 50).await;
    let service = service(&server);

    let page = run_once(&service, "repo", PageSize::Fifty, 2).await;

    assert_eq!(page.current_page(), 2);
    assert_eq!(page.rows_per_page(), PageSize::Fifty);
    assert_eq!(first_cell_text(&page), "repo-3-0");
    assert_eq!(page.notification_message(), None);
}
