use serde::{Deserialize, Serialize};

use crate::domain::types::PageSize;

/// Free-text and lead source filter driving both count and record queries.
///
/// An empty `lead_source` matches every source.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    pub search_key: String,
    pub lead_source: String,
}

impl SearchCriteria {
    pub fn new(search_key: impl Into<String>, lead_source: impl Into<String>) -> Self {
        Self {
            search_key: search_key.into(),
            lead_source: lead_source.into(),
        }
    }
}

/// Requested page size and 1-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageState {
    pub page_size: PageSize,
    pub page_number: usize,
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_number: 1,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

/// Which side cuts the lead list into pages.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PagingMode {
    /// The backend returns every matching lead and the view windows it locally.
    #[default]
    Client,
    /// The backend returns exactly the requested page, shown as-is.
    Server,
}
