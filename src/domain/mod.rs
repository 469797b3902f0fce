//! Domain values shared by the lead view and its backends.

pub mod criteria;
pub mod lead;
pub mod types;
