//! Strongly-typed value objects used by the lead view.
//!
//! These wrappers enforce basic invariants (supported page sizes) so that
//! once a value reaches the view state it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page size is not one of the offered options.
    #[error("unsupported page size: {0}")]
    UnsupportedPageSize(usize),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Number of leads shown per page, restricted to the offered options.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Page sizes offered to the user, in display order.
    pub const OPTIONS: [usize; 4] = [5, 10, 25, 50];

    /// Page size used when nothing else was configured.
    pub const DEFAULT: PageSize = PageSize(10);

    /// Accepts only values listed in [`PageSize::OPTIONS`].
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if Self::OPTIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::UnsupportedPageSize(value))
        }
    }

    /// Returns the raw number of rows per page.
    pub const fn get(self) -> usize {
        self.0
    }

    /// `(label, value)` pairs for a page size picker.
    pub fn options() -> Vec<(String, PageSize)> {
        Self::OPTIONS
            .iter()
            .map(|&value| (value.to_string(), PageSize(value)))
            .collect()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parsed = value
            .trim()
            .parse::<usize>()
            .map_err(|_| TypeConstraintError::InvalidValue(value.to_string()))?;
        Self::new(parsed)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}
