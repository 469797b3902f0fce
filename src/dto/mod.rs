//! DTO modules that bridge the view state with renderers.

pub mod notification;
pub mod view;
