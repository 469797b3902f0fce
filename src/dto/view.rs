use serde::Serialize;

use crate::domain::criteria::SearchCriteria;
use crate::domain::lead::{Lead, LeadColumn};
use crate::domain::types::PageSize;
use crate::services::view::LeadViewState;

/// Everything a renderer needs to draw the lead table.
#[derive(Debug, Clone, Serialize)]
pub struct LeadPageData {
    pub criteria: SearchCriteria,
    pub columns: Vec<LeadColumn>,
    pub page_size_options: Vec<usize>,
    pub page_size: PageSize,
    pub page_number: usize,
    /// Unknown until the first count response arrives.
    pub total_pages: Option<usize>,
    pub total_count: Option<usize>,
    /// Page links, `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    pub leads: Vec<Lead>,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub error: Option<String>,
}

impl From<&LeadViewState> for LeadPageData {
    fn from(state: &LeadViewState) -> Self {
        Self {
            criteria: state.criteria().clone(),
            columns: Lead::COLUMNS.to_vec(),
            page_size_options: PageSize::OPTIONS.to_vec(),
            page_size: state.page_size(),
            page_number: state.page_number(),
            total_pages: state.total_pages(),
            total_count: state.total_count(),
            pages: state.window().links(),
            leads: state.visible().to_vec(),
            is_first_page: state.is_first_page(),
            is_last_page: state.is_last_page(),
            error: state.error().map(ToString::to_string),
        }
    }
}
