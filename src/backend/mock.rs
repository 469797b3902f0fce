//! Mock backend implementations for isolating the view in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::RemoteResult;
use crate::backend::{ContactSyncer, LeadListQuery, LeadReader};
use crate::domain::lead::Lead;

mock! {
    pub Backend {}

    #[async_trait]
    impl LeadReader for Backend {
        async fn count_leads(&self, query: &LeadListQuery) -> RemoteResult<usize>;
        async fn list_leads(&self, query: &LeadListQuery) -> RemoteResult<Vec<Lead>>;
    }

    #[async_trait]
    impl ContactSyncer for Backend {
        async fn sync_contacts(&self) -> RemoteResult<String>;
    }
}
