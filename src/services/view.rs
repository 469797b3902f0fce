//! State of the lead search view.
//!
//! Mutators only change criteria and page state and hand back a
//! [`RefreshRequest`]; responses are fed back through [`LeadViewState::apply_count`]
//! and [`LeadViewState::apply_records`] in whatever order they arrive.

use crate::backend::LeadListQuery;
use crate::backend::errors::RemoteResult;
use crate::domain::criteria::{PageState, PagingMode, SearchCriteria};
use crate::domain::lead::Lead;
use crate::domain::types::PageSize;
use crate::pagination::{self, PageWindow};
use crate::services::errors::ViewError;

/// Pair of queries issued by one refresh, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub generation: u64,
    pub count_query: LeadListQuery,
    pub records_query: LeadListQuery,
}

#[derive(Debug, Clone)]
pub struct LeadViewState {
    criteria: SearchCriteria,
    page: PageState,
    mode: PagingMode,
    total_count: Option<usize>,
    records: Vec<Lead>,
    visible: Vec<Lead>,
    error: Option<ViewError>,
    generation: u64,
}

impl Default for LeadViewState {
    fn default() -> Self {
        Self::new(PageSize::default(), PagingMode::default())
    }
}

impl LeadViewState {
    pub fn new(page_size: PageSize, mode: PagingMode) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            page: PageState::new(page_size),
            mode,
            total_count: None,
            records: Vec::new(),
            visible: Vec::new(),
            error: None,
            generation: 0,
        }
    }

    pub fn set_search_key(&mut self, value: impl Into<String>) -> RefreshRequest {
        self.criteria.search_key = value.into();
        self.reset_to_first_page()
    }

    pub fn set_lead_source(&mut self, value: impl Into<String>) -> RefreshRequest {
        self.criteria.lead_source = value.into();
        self.reset_to_first_page()
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> RefreshRequest {
        self.page.page_size = page_size;
        self.reset_to_first_page()
    }

    /// Steps back one page; `None` when already on the first page.
    pub fn go_to_previous_page(&mut self) -> Option<RefreshRequest> {
        if self.page.page_number > 1 {
            Some(self.turn_page(self.page.page_number - 1))
        } else {
            None
        }
    }

    /// Steps forward one page; `None` on the last page or while the count is unknown.
    pub fn go_to_next_page(&mut self) -> Option<RefreshRequest> {
        match self.total_pages() {
            Some(total_pages) if self.page.page_number < total_pages => {
                Some(self.turn_page(self.page.page_number + 1))
            }
            _ => None,
        }
    }

    /// Starts a new generation and builds its count and records queries.
    ///
    /// Responses tagged with an older generation are dropped from then on.
    pub fn begin_refresh(&mut self) -> RefreshRequest {
        self.generation += 1;
        self.error = None;

        let count_query = LeadListQuery::from(&self.criteria);
        let records_query = match self.mode {
            PagingMode::Client => count_query.clone(),
            PagingMode::Server => count_query
                .clone()
                .paginate(self.page.page_number, self.page.page_size.get()),
        };

        log::info!(
            "Refreshing leads #{} (search: {:?}, source: {:?}, page {} of size {})",
            self.generation,
            self.criteria.search_key,
            self.criteria.lead_source,
            self.page.page_number,
            self.page.page_size
        );

        RefreshRequest {
            generation: self.generation,
            count_query,
            records_query,
        }
    }

    /// Applies a count response; returns `false` when it belonged to a stale refresh.
    pub fn apply_count(&mut self, generation: u64, result: RemoteResult<usize>) -> bool {
        if self.is_stale(generation, "count") {
            return false;
        }
        match result {
            Ok(total) => {
                self.total_count = Some(total);
                self.recompute();
            }
            Err(err) => {
                log::error!("Failed to count leads: {err}");
                self.error = Some(ViewError::CountFetch(err));
            }
        }
        true
    }

    /// Applies a records response; returns `false` when it belonged to a stale refresh.
    pub fn apply_records(&mut self, generation: u64, result: RemoteResult<Vec<Lead>>) -> bool {
        if self.is_stale(generation, "records") {
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.recompute();
            }
            Err(err) => {
                log::error!("Failed to fetch leads: {err}");
                self.error = Some(ViewError::RecordsFetch(err));
            }
        }
        true
    }

    pub fn record_error(&mut self, err: ViewError) {
        self.error = Some(err);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn page_number(&self) -> usize {
        self.page.page_number
    }

    pub fn page_size(&self) -> PageSize {
        self.page.page_size
    }

    pub fn paging_mode(&self) -> PagingMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total matching leads as last reported by the count request.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    /// Page count derived from the last reported total; `None` until a count arrives.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_count
            .map(|total| pagination::total_pages(total, self.page.page_size))
    }

    pub fn records(&self) -> &[Lead] {
        &self.records
    }

    pub fn visible(&self) -> &[Lead] {
        &self.visible
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn is_first_page(&self) -> bool {
        self.page.page_number <= 1
    }

    /// True on the last page, and while the page count is still unknown.
    pub fn is_last_page(&self) -> bool {
        self.total_pages()
            .is_none_or(|total_pages| self.page.page_number >= total_pages)
    }

    /// Current page as a window, with page links for renderers.
    pub fn window(&self) -> PageWindow<Lead> {
        PageWindow {
            page_number: self.page.page_number,
            total_pages: self.total_pages().unwrap_or(0),
            visible: self.visible.clone(),
        }
    }

    /// New criteria or page size: nothing fetched so far describes the new result.
    fn reset_to_first_page(&mut self) -> RefreshRequest {
        self.page.page_number = 1;
        self.total_count = None;
        self.records.clear();
        self.visible.clear();
        self.begin_refresh()
    }

    fn turn_page(&mut self, page_number: usize) -> RefreshRequest {
        self.page.page_number = page_number;
        match self.mode {
            PagingMode::Client => self.recompute(),
            // The buffer holds the page being left.
            PagingMode::Server => {
                self.records.clear();
                self.visible.clear();
            }
        }
        self.begin_refresh()
    }

    fn is_stale(&self, generation: u64, leg: &str) -> bool {
        if generation != self.generation {
            log::debug!(
                "Discarding {leg} response #{generation}, latest refresh is #{}",
                self.generation
            );
            true
        } else {
            false
        }
    }

    fn recompute(&mut self) {
        let page_size = self.page.page_size;
        let page_number = self.page.page_number;

        let window = match self.mode {
            PagingMode::Client => {
                let total = self.total_count.unwrap_or(self.records.len());
                pagination::window(&self.records, total, page_number, page_size)
            }
            PagingMode::Server => {
                let total = self.total_count.unwrap_or_else(|| {
                    (page_number.max(1) - 1) * page_size.get() + self.records.len()
                });
                pagination::server_window(&self.records, total, page_number, page_size)
            }
        };

        self.page.page_number = window.page_number;
        self.visible = window.visible;
    }
}
