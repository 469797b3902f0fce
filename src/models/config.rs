//! Configuration model loaded from external sources.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::backend::SYNC_SUCCESS;
use crate::domain::criteria::PagingMode;
use crate::domain::types::PageSize;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "cli")]
    #[error("Error loading settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    Validation(#[from] ValidationErrors),
}

fn default_sync_outcome() -> String {
    SYNC_SUCCESS.to_string()
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the lead browser.
pub struct ViewConfig {
    #[serde(default)]
    pub default_page_size: PageSize,
    #[serde(default)]
    pub paging_mode: PagingMode,
    /// CSV file seeding the in-memory lead service.
    #[validate(length(min = 1))]
    pub leads_csv: String,
    /// Payload the in-memory contact sync answers with.
    #[serde(default = "default_sync_outcome")]
    #[validate(length(min = 1))]
    pub sync_outcome: String,
}

#[cfg(feature = "cli")]
impl ViewConfig {
    /// Layers `{dir}/default`, the optional `{dir}/{app_env}` profile and `APP_*` variables.
    pub fn load(config_dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")))
            .add_source(
                config::File::with_name(&format!("{config_dir}/{app_env}")).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let view_config = settings.try_deserialize::<ViewConfig>()?;
        view_config.validate()?;
        Ok(view_config)
    }
}
