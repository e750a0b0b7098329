//! The search page controller.
//!
//! Owns every piece of UI state and decides when a fetch must happen. It never
//! talks to the network itself: operations that need data return a
//! [`FetchRequest`], and whoever runs it reports back through
//! [`SearchPage::finish_fetch`].

use std::time::Instant;

use crate::api_client::FetchRequest;
use crate::content::{Content, content};
use crate::errors::SearchError;
use crate::models::{Repository, SearchResponse};
use crate::notification::Notification;
use crate::pagination::{PageSize, PaginationView, is_reachable};
use crate::table::ResultsTable;

pub const TITLE: &str = "Github search page";
pub const FILTER_LABEL: &str = "Filter by";
pub const SEARCH_LABEL: &str = "Search";

const FIRST_PAGE: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub table: ResultsTable,
    pub pagination: PaginationView,
}

/// Everything the page shows at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    pub filter_label: &'static str,
    pub filter: String,
    pub search_button: Button,
    pub content: Content<ResultsView>,
    pub notification: Option<String>,
}

#[derive(Debug, Default)]
pub struct SearchPage {
    filter: String,
    is_searching: bool,
    has_searched: bool,
    repositories: Vec<Repository>,
    rows_per_page: PageSize,
    current_page: u32,
    total_count: u64,
    notification: Notification,
    did_mount: bool,
    // (page, rows per page) the fetch effect last ran with
    effect_deps: Option<(u32, PageSize)>,
}

impl SearchPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// First render. The fetch effect runs but the mount guard swallows it.
    pub fn mount(&mut self) -> Option<FetchRequest> {
        self.run_effect()
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn click_search(&mut self) -> Option<FetchRequest> {
        if self.is_searching {
            tracing::debug!("search button is disabled while a search is running");
            return None;
        }

        if self.current_page == FIRST_PAGE {
            return Some(self.start_fetch());
        }

        // Going back to the first page fires the effect, which fetches once.
        self.current_page = FIRST_PAGE;
        self.run_effect()
    }

    pub fn change_rows_per_page(&mut self, rows_per_page: PageSize) -> Option<FetchRequest> {
        self.current_page = FIRST_PAGE;
        self.rows_per_page = rows_per_page;
        self.run_effect()
    }

    /// Moves to `page` if the pagination control allows it.
    pub fn change_page(&mut self, page: u32) -> Option<FetchRequest> {
        if !is_reachable(page, self.total_count, self.rows_per_page) {
            tracing::debug!(page, total = self.total_count, "page out of range");
            return None;
        }

        self.current_page = page;
        self.run_effect()
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination().next_enabled {
            return None;
        }
        let next = self.current_page.checked_add(1)?;
        self.change_page(next)
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if !self.pagination().previous_enabled {
            return None;
        }
        self.change_page(self.current_page - 1)
    }

    /// Applies the outcome of a fetch started by this page.
    pub fn finish_fetch(&mut self, outcome: Result<SearchResponse, SearchError>, now: Instant) {
        match outcome {
            Ok(response) => {
                tracing::info!(
                    total = response.total_count,
                    items = response.items.len(),
                    page = self.current_page,
                    "results updated"
                );
                self.repositories = response.items;
                self.total_count = response.total_count;
                self.has_searched = true;
            }
            Err(err) => {
                let message = err.notification_message();
                tracing::warn!(%message, "showing search error");
                self.notification.open(message, now);
            }
        }
        self.is_searching = false;
    }

    pub fn close_notification(&mut self) {
        self.notification.close();
    }

    /// Auto-hides the notification. Returns true when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notification.tick(now)
    }

    pub fn view(&self) -> PageView {
        PageView {
            title: TITLE,
            filter_label: FILTER_LABEL,
            filter: self.filter.clone(),
            search_button: Button {
                label: SEARCH_LABEL,
                disabled: self.is_searching,
            },
            content: content(self.has_searched, self.repositories.len(), || ResultsView {
                table: ResultsTable::new(&self.repositories),
                pagination: self.pagination(),
            }),
            notification: self.notification.message().map(str::to_string),
        }
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(self.total_count, self.current_page, self.rows_per_page)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn rows_per_page(&self) -> PageSize {
        self.rows_per_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn notification_message(&self) -> Option<&str> {
        self.notification.message()
    }

    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notification.deadline()
    }

    fn start_fetch(&mut self) -> FetchRequest {
        self.is_searching = true;
        let request = FetchRequest {
            query: self.filter.clone(),
            page: self.current_page,
            per_page: self.rows_per_page,
        };
        tracing::info!(query = %request.query, page = request.page, per_page = %request.per_page, "search started");
        request
    }

    fn run_effect(&mut self) -> Option<FetchRequest> {
        let deps = (self.current_page, self.rows_per_page);
        if self.effect_deps == Some(deps) {
            return None;
        }
        self.effect_deps = Some(deps);

        if !self.did_mount {
            self.did_mount = true;
            return None;
        }

        Some(self.start_fetch())
    }
}
