//! Catches failures the page itself cannot handle (a fetch task that dies,
//! for instance) and swaps the whole page for an "Unexpected error" screen
//! with a Reload action.

use std::fmt::Display;

use crate::page::{PageView, SearchPage};

pub const FALLBACK_MESSAGE: &str = "Unexpected error";
pub const RELOAD_LABEL: &str = "Reload";

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Page(PageView),
    Crashed { message: &'static str, reload: &'static str },
}

#[derive(Debug)]
pub struct ErrorBoundary {
    page: SearchPage,
    crashed: bool,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorBoundary {
    /// Wraps a freshly mounted page.
    pub fn new() -> Self {
        Self {
            page: mounted_page(),
            crashed: false,
        }
    }

    /// The page, unless the fallback is showing.
    pub fn page(&self) -> Option<&SearchPage> {
        (!self.crashed).then_some(&self.page)
    }

    pub fn page_mut(&mut self) -> Option<&mut SearchPage> {
        (!self.crashed).then_some(&mut self.page)
    }

    pub fn fail(&mut self, reason: impl Display) {
        tracing::error!(%reason, "page crashed");
        self.crashed = true;
    }

    pub fn has_error(&self) -> bool {
        self.crashed
    }

    /// Throws the old page away and mounts a new one.
    pub fn reload(&mut self) {
        tracing::info!("reloading page");
        self.page = mounted_page();
        self.crashed = false;
    }

    pub fn view(&self) -> Screen {
        if self.crashed {
            Screen::Crashed {
                message: FALLBACK_MESSAGE,
                reload: RELOAD_LABEL,
            }
        } else {
            Screen::Page(self.page.view())
        }
    }
}

fn mounted_page() -> SearchPage {
    let mut page = SearchPage::new();
    // The mount guard swallows the first effect; there is nothing to fetch.
    let _ = page.mount();
    page
}
