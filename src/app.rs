//! Drives a [`SearchPage`] from the terminal.

use std::time::Instant;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};

use crate::api_client::{FetchRequest, RepositoryService};
use crate::boundary::ErrorBoundary;
use crate::commands::{Command, help, joined};
use crate::errors::SearchError;
use crate::models::SearchResponse;
use crate::page::SearchPage;
use crate::pagination::PageSize;
use crate::terminal::{RenderOptions, render};

type FetchOutcome = Result<SearchResponse, SearchError>;

/// Feeds one command to the page. Returns the fetch it asks for, if any.
pub fn apply(page: &mut SearchPage, command: Command) -> Option<FetchRequest> {
    match command {
        Command::Filter { text } => {
            page.set_filter(joined(&text));
            None
        }
        Command::Search { text } => {
            if !text.is_empty() {
                page.set_filter(joined(&text));
            }
            page.click_search()
        }
        Command::Next => page.next_page(),
        Command::Prev => page.previous_page(),
        Command::Page { number } => page.change_page(number - 1),
        Command::Rows { size } => page.change_rows_per_page(size),
        Command::Close => {
            page.close_notification();
            None
        }
        Command::Reload | Command::Quit => None,
    }
}

/// Hands a finished fetch task to the page, or trips the boundary when the
/// task died without producing an outcome.
pub fn settle(boundary: &mut ErrorBoundary, finished: Result<FetchOutcome, JoinError>) {
    match finished {
        Ok(outcome) => match boundary.page_mut() {
            Some(page) => page.finish_fetch(outcome, Instant::now()),
            None => tracing::debug!("dropping search result for a crashed page"),
        },
        Err(err) => boundary.fail(err),
    }
}

/// Runs a request to completion and hands the outcome to the page.
pub async fn run_fetch(page: &mut SearchPage, service: &RepositoryService, request: FetchRequest) {
    let outcome = service.search(&request).await;
    page.finish_fetch(outcome, Instant::now());
}

/// Single search without the prompt: first page at `per_page`, then `page`
/// if the result count reaches it.
pub async fn run_once(
    service: &RepositoryService,
    query: &str,
    per_page: PageSize,
    page_index: u32,
) -> SearchPage {
    let mut page = SearchPage::new();
    let _ = page.mount();
    page.set_filter(query);

    let first = if per_page == page.rows_per_page() {
        page.click_search()
    } else {
        page.change_rows_per_page(per_page)
    };
    if let Some(request) = first {
        run_fetch(&mut page, service, request).await;
    }

    if page_index > 0 && page.notification_message().is_none() {
        match page.change_page(page_index) {
            Some(request) => run_fetch(&mut page, service, request).await,
            None => tracing::warn!(page = page_index + 1, "requested page is past the last page"),
        }
    }

    page
}

/// Interactive loop: reads commands from stdin and reprints the page after
/// every change. Fetches run on their own tasks; outcomes are applied in the
/// order they arrive.
pub async fn run_interactive(service: RepositoryService, options: RenderOptions) -> anyhow::Result<()> {
    let mut boundary = ErrorBoundary::new();
    let mut fetches: JoinSet<FetchOutcome> = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", help());
    print!("{}", render(&boundary.view(), options));

    loop {
        let deadline = boundary
            .page()
            .and_then(SearchPage::notification_deadline)
            .map(tokio::time::Instant::from_std);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    break;
                };
                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        err.print().context("failed to write to the terminal")?;
                        continue;
                    }
                };
                match command {
                    Command::Quit => break,
                    Command::Reload => {
                        // Dropping the set aborts fetches started by the old page.
                        fetches = JoinSet::new();
                        boundary.reload();
                    }
                    command => {
                        let Some(page) = boundary.page_mut() else {
                            eprintln!("the page has crashed, type reload");
                            continue;
                        };
                        if let Some(request) = apply(page, command) {
                            let service = service.clone();
                            fetches.spawn(async move { service.search(&request).await });
                        }
                    }
                }
            }
            Some(finished) = fetches.join_next(), if !fetches.is_empty() => {
                settle(&mut boundary, finished);
            }
            _ = sleep_until(deadline), if deadline.is_some() => {
                if let Some(page) = boundary.page_mut() {
                    page.tick(Instant::now());
                }
            }
        }

        println!();
        print!("{}", render(&boundary.view(), options));
    }

    tracing::debug!("leaving search page");
    Ok(())
}

async fn sleep_until(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
