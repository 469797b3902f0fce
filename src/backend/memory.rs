//! In-process lead service used by the lead browser and integration tests.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use async_trait::async_trait;

use crate::backend::errors::{RemoteError, RemoteResult};
use crate::backend::{ContactSyncer, LeadListQuery, LeadReader, SYNC_SUCCESS};
use crate::domain::lead::{Lead, NewLead};

/// Serves leads from memory with the same filtering rules as the remote controller.
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    leads: Vec<Lead>,
    sync_outcome: String,
}

impl InMemoryBackend {
    /// Serves `leads` in the given order.
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            sync_outcome: SYNC_SUCCESS.to_string(),
        }
    }

    /// Payload returned by [`ContactSyncer::sync_contacts`].
    pub fn with_sync_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.sync_outcome = outcome.into();
        self
    }

    /// Parses leads from CSV with `FirstName,LastName,Company,LeadSource,Status` headers.
    ///
    /// Rows keep file order and get their 1-based row number as id.
    pub fn from_csv_reader<R: Read>(reader: R) -> RemoteResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut leads = Vec::new();

        for (index, row) in rdr.deserialize::<NewLead>().enumerate() {
            leads.push(row?.into_lead((index + 1).to_string()));
        }

        log::info!("Loaded {} leads", leads.len());
        Ok(Self::new(leads))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> RemoteResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            RemoteError::Unexpected(format!("Cannot open {}: {err}", path.display()))
        })?;
        Self::from_csv_reader(file)
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    fn matching<'a>(&'a self, query: &'a LeadListQuery) -> impl Iterator<Item = &'a Lead> + 'a {
        let needle = query.search_key.trim().to_lowercase();
        let source = query.lead_source.trim();

        self.leads.iter().filter(move |lead| {
            let source_matches =
                source.is_empty() || lead.lead_source.as_deref() == Some(source);
            let key_matches = needle.is_empty()
                || [&lead.first_name, &lead.last_name, &lead.company]
                    .into_iter()
                    .flatten()
                    .any(|value| value.to_lowercase().contains(&needle));
            source_matches && key_matches
        })
    }
}

#[async_trait]
impl LeadReader for InMemoryBackend {
    async fn count_leads(&self, query: &LeadListQuery) -> RemoteResult<usize> {
        Ok(self.matching(query).count())
    }

    async fn list_leads(&self, query: &LeadListQuery) -> RemoteResult<Vec<Lead>> {
        let matching = self.matching(query);
        let leads = match &query.pagination {
            Some(pagination) => {
                let page = if pagination.page == 0 { 1 } else { pagination.page };
                matching
                    .skip((page - 1) * pagination.per_page)
                    .take(pagination.per_page)
                    .cloned()
                    .collect()
            }
            None => matching.cloned().collect(),
        };
        Ok(leads)
    }
}

#[async_trait]
impl ContactSyncer for InMemoryBackend {
    async fn sync_contacts(&self) -> RemoteResult<String> {
        Ok(self.sync_outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
FirstName,LastName,Company,LeadSource,Status
Ada,Lovelace,Analytical Engines,Web,Open
Grace,Hopper,Navy,Phone Inquiry,Working
,Turing,Bletchley Park,Web,Closed
Linus,Torvalds,Kernel Org,,Open
";

    fn backend() -> InMemoryBackend {
        InMemoryBackend::from_csv_reader(CSV.as_bytes()).expect("valid csv")
    }

    #[tokio::test]
    async fn loads_rows_in_file_order() {
        let backend = backend();

        let ids: Vec<&str> = backend.leads().iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(backend.leads()[2].first_name, None);
        assert_eq!(backend.leads()[3].lead_source, None);
    }

    #[tokio::test]
    async fn serves_opaque_ids_in_given_order() {
        let leads = vec![
            NewLead {
                company: Some("Initech".into()),
                ..NewLead::default()
            }
            .into_lead("00Q5e00000ZZZZZAAA"),
            NewLead {
                last_name: Some("Lumbergh".into()),
                ..NewLead::default()
            }
            .into_lead("00Q5e00000AAAAAAAA"),
        ];
        let backend = InMemoryBackend::new(leads);

        let all = backend.list_leads(&LeadListQuery::new("", "")).await.expect("leads");
        let ids: Vec<&str> = all.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["00Q5e00000ZZZZZAAA", "00Q5e00000AAAAAAAA"]);

        let by_company = LeadListQuery::new("initech", "");
        assert_eq!(backend.count_leads(&by_company).await, Ok(1));
    }

    #[tokio::test]
    async fn filters_by_key_and_source() {
        let backend = backend();

        let by_key = LeadListQuery::new("ENGINE", "");
        assert_eq!(backend.count_leads(&by_key).await, Ok(1));

        let by_source = LeadListQuery::new("", "Web");
        let leads = backend.list_leads(&by_source).await.expect("leads");
        let names: Vec<&str> = leads.iter().filter_map(|l| l.last_name.as_deref()).collect();
        assert_eq!(names, vec!["Lovelace", "Turing"]);

        let both = LeadListQuery::new("grace", "Web");
        assert_eq!(backend.count_leads(&both).await, Ok(0));
    }

    #[tokio::test]
    async fn pagination_returns_one_page() {
        let backend = backend();

        let query = LeadListQuery::new("", "").paginate(2, 3);
        let page = backend.list_leads(&query).await.expect("leads");

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].last_name.as_deref(), Some("Torvalds"));
        assert_eq!(backend.count_leads(&query).await, Ok(4));
    }

    #[tokio::test]
    async fn sync_reports_configured_outcome() {
        assert_eq!(backend().sync_contacts().await.as_deref(), Ok("Success"));
        let failing = backend().with_sync_outcome("Failed");
        assert_eq!(failing.sync_contacts().await.as_deref(), Ok("Failed"));
    }

    #[test]
    fn malformed_csv_is_reported() {
        let result = InMemoryBackend::from_csv_reader("FirstName,LastName\nAda\n".as_bytes());

        assert!(matches!(result, Err(RemoteError::Unexpected(_))));
    }
}
