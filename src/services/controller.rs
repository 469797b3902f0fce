//! Async driver wiring the view state to the remote lead and contact services.

use crate::backend::{ContactSyncer, LeadReader};
use crate::domain::criteria::PagingMode;
use crate::domain::types::PageSize;
use crate::dto::view::LeadPageData;
use crate::services::errors::{ViewError, ViewResult};
use crate::services::sync;
use crate::services::sync::Notifier;
use crate::services::view::{LeadViewState, RefreshRequest};

/// Lead search view bound to a backend and a notification sink.
pub struct LeadSearchController<B, N> {
    backend: B,
    notifier: N,
    state: LeadViewState,
}

impl<B, N> LeadSearchController<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self::with_state(backend, notifier, LeadViewState::default())
    }

    pub fn with_options(backend: B, notifier: N, page_size: PageSize, mode: PagingMode) -> Self {
        Self::with_state(backend, notifier, LeadViewState::new(page_size, mode))
    }

    fn with_state(backend: B, notifier: N, state: LeadViewState) -> Self {
        Self {
            backend,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &LeadViewState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Snapshot of the current page for rendering.
    pub fn page_data(&self) -> LeadPageData {
        LeadPageData::from(&self.state)
    }
}

impl<B, N> LeadSearchController<B, N>
where
    B: LeadReader,
{
    /// Initial load when the view is attached.
    pub async fn connect(&mut self) {
        self.refresh().await;
    }

    /// Issues the count and records requests concurrently and applies both results.
    pub async fn refresh(&mut self) {
        let request = self.state.begin_refresh();
        self.run(request).await;
    }

    pub async fn set_search_key(&mut self, value: impl Into<String>) {
        let request = self.state.set_search_key(value);
        self.run(request).await;
    }

    pub async fn set_lead_source(&mut self, value: impl Into<String>) {
        let request = self.state.set_lead_source(value);
        self.run(request).await;
    }

    pub async fn set_page_size(&mut self, page_size: PageSize) {
        let request = self.state.set_page_size(page_size);
        self.run(request).await;
    }

    /// Applies a raw page size picker value such as `"25"`.
    ///
    /// Unsupported values are recorded as the view error and nothing is fetched.
    pub async fn select_page_size(&mut self, raw: &str) -> ViewResult<()> {
        match PageSize::try_from(raw) {
            Ok(page_size) => {
                self.set_page_size(page_size).await;
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected page size {raw:?}: {err}");
                let err = ViewError::from(err);
                self.state.record_error(err.clone());
                Err(err)
            }
        }
    }

    /// Returns `true` when the page changed and a refresh ran.
    pub async fn go_to_previous_page(&mut self) -> bool {
        match self.state.go_to_previous_page() {
            Some(request) => {
                self.run(request).await;
                true
            }
            None => false,
        }
    }

    /// Returns `true` when the page changed and a refresh ran.
    pub async fn go_to_next_page(&mut self) -> bool {
        match self.state.go_to_next_page() {
            Some(request) => {
                self.run(request).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, request: RefreshRequest) {
        let (count, records) = tokio::join!(
            self.backend.count_leads(&request.count_query),
            self.backend.list_leads(&request.records_query),
        );

        self.state.apply_count(request.generation, count);
        self.state.apply_records(request.generation, records);
    }
}

impl<B, N> LeadSearchController<B, N>
where
    B: ContactSyncer,
    N: Notifier,
{
    /// Triggers the contact synchronization; failures are also kept as the view error.
    pub async fn sync_contacts(&mut self) -> ViewResult<()> {
        let result = sync::sync_contacts(&self.backend, &self.notifier).await;
        match &result {
            Ok(()) => self.state.clear_error(),
            Err(err) => self.state.record_error(err.clone()),
        }
        result
    }
}
