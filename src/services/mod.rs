pub mod controller;
pub mod errors;
pub mod sync;
pub mod view;

pub use errors::{ViewError, ViewResult};
