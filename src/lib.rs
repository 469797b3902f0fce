//! Paginated, filterable lead search view over a remote lead service.
//!
//! [`services::controller::LeadSearchController`] owns the search criteria and
//! page state, fetches counts and records through [`backend::LeadReader`] and
//! windows them with [`pagination::window`].

pub mod backend;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod services;
