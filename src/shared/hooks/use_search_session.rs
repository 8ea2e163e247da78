use dioxus::prelude::*;

use crate::domain::models::{SearchQuery, SearchResultPage, Speech};
use crate::shared::errors::ApiError;
use crate::shared::logging::{self, LogOperation};

#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Search session state machine.
///
/// Idle until the first successful search, Loaded afterwards. Filter edits
/// mutate the pending query but never fetch; only `begin_submit` /
/// `begin_go_to_page` start a gateway call. Every fetch carries a
/// monotonically increasing token and a response is applied only when its
/// token is still the most recently issued one, so a late reply can never
/// overwrite a newer page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub query: SearchQuery,
    pub results: Vec<Speech>,
    pub page: u32,
    pub total_pages: u32,
    /// False while no search has succeeded yet (the Idle state).
    pub loaded: bool,
    pub in_flight: bool,
    /// User-visible failure notice for the latest fetch.
    pub notice: Option<String>,
    latest_token: u64,
}

impl SearchSession {
    pub fn set_text(&mut self, text: &str) {
        self.query.set_text(text);
    }

    pub fn set_from_date(&mut self, from: Option<chrono::NaiveDate>) {
        self.query.set_from_date(from);
    }

    pub fn set_to_date(&mut self, to: Option<chrono::NaiveDate>) {
        self.query.set_to_date(to);
    }

    fn begin(&mut self, page: u32) -> (u64, SearchQuery) {
        self.latest_token += 1;
        self.in_flight = true;
        self.notice = None;
        let mut query = self.query.clone();
        query.page = page;
        (self.latest_token, query)
    }

    /// A fresh submission always restarts from page 1, whatever page was on
    /// screen before.
    pub fn begin_submit(&mut self) -> (u64, SearchQuery) {
        self.begin(1)
    }

    /// Page navigation keeps the filters untouched. Targets outside
    /// `1..=total_pages` (including any page while still Idle) are rejected.
    pub fn begin_go_to_page(&mut self, page: u32) -> Option<(u64, SearchQuery)> {
        if !self.loaded || page < 1 || page > self.total_pages {
            return None;
        }
        Some(self.begin(page))
    }

    /// Applies a successful response. Stale tokens are dropped silently and
    /// leave the session exactly as it was.
    pub fn apply_page(&mut self, token: u64, page: SearchResultPage) -> bool {
        if token != self.latest_token {
            logging::log_stale_response_dropped(LogOperation::Search, token, self.latest_token);
            return false;
        }
        self.in_flight = false;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.results = page.results;
        self.loaded = true;
        // Keep the pending query aligned with what is on screen.
        self.query.page = page.page;
        true
    }

    /// A failed fetch surfaces a notice and leaves prior results untouched,
    /// never showing partial data as if it were fresh.
    pub fn apply_error(&mut self, token: u64, error: &ApiError) -> bool {
        if token != self.latest_token {
            logging::log_stale_response_dropped(LogOperation::Search, token, self.latest_token);
            return false;
        }
        self.in_flight = false;
        self.notice = Some(error.to_string());
        true
    }
}

/// Search session hook handle.
#[derive(Clone, Copy, PartialEq)]
pub struct UseSearchSession {
    pub session: Signal<SearchSession>,
}

impl UseSearchSession {
    #[cfg(target_arch = "wasm32")]
    fn fetch(&self, token: u64, query: SearchQuery) {
        let mut session = self.session;
        logging::log_request_issued(LogOperation::Search, token);
        spawn(async move {
            let api = ApiService::new();
            match api.search(&query).await {
                Ok(page) => {
                    let count = page.results.len();
                    if session.write().apply_page(token, page) {
                        logging::log_response_applied(LogOperation::Search, token, count);
                    }
                }
                Err(e) => {
                    logging::log_request_failed(LogOperation::Search, token, &e);
                    session.write().apply_error(token, &e);
                }
            }
        });
    }

    /// Submits the current filters, restarting from page 1.
    #[cfg(target_arch = "wasm32")]
    pub fn submit(&self) {
        let mut session = self.session;
        let (token, query) = session.write().begin_submit();
        self.fetch(token, query);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn submit(&self) {}

    /// Navigates to page `n` with the filters unchanged.
    #[cfg(target_arch = "wasm32")]
    pub fn go_to_page(&self, page: u32) {
        let mut session = self.session;
        let begun = session.write().begin_go_to_page(page);
        if let Some((token, query)) = begun {
            self.fetch(token, query);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn go_to_page(&self, _page: u32) {}
}

/// Hook owning all query/result/pagination state for one search session.
pub fn use_search_session() -> UseSearchSession {
    let session = use_signal(SearchSession::default);
    UseSearchSession { session }
}
