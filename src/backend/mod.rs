//! Contracts for the remote lead and contact services consumed by the view.

use async_trait::async_trait;

use crate::backend::errors::RemoteResult;
use crate::domain::criteria::SearchCriteria;
use crate::domain::lead::Lead;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Payload the contact synchronization returns when it completed.
pub const SYNC_SUCCESS: &str = "Success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadListQuery {
    pub search_key: String,
    pub lead_source: String,
    pub pagination: Option<Pagination>,
}

impl LeadListQuery {
    pub fn new(search_key: impl Into<String>, lead_source: impl Into<String>) -> Self {
        Self {
            search_key: search_key.into(),
            lead_source: lead_source.into(),
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl From<&SearchCriteria> for LeadListQuery {
    fn from(criteria: &SearchCriteria) -> Self {
        Self::new(criteria.search_key.as_str(), criteria.lead_source.as_str())
    }
}

#[async_trait]
pub trait LeadReader: Send + Sync {
    /// Counts leads matching the query; pagination is ignored.
    async fn count_leads(&self, query: &LeadListQuery) -> RemoteResult<usize>;
    /// Lists matching leads, one page when `query.pagination` is set, all otherwise.
    async fn list_leads(&self, query: &LeadListQuery) -> RemoteResult<Vec<Lead>>;
}

#[async_trait]
pub trait ContactSyncer: Send + Sync {
    /// Runs the contact synchronization, returning the service's status payload.
    async fn sync_contacts(&self) -> RemoteResult<String>;
}
