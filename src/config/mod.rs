#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_distinct, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRODUCTS_PATH: &str = "products.txt";
pub const DEFAULT_LISTINGS_PATH: &str = "listings.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "matches.txt";

/// Resolved run settings, passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub products_path: String,
    pub listings_path: String,
    pub output_path: String,
    pub monitoring: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            listings_path: DEFAULT_LISTINGS_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            monitoring: false,
        }
    }
}

impl ConfigProvider for MatchConfig {
    fn products_path(&self) -> &str {
        &self.products_path
    }

    fn listings_path(&self) -> &str {
        &self.listings_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.products", &self.products_path)?;
        validate_path("input.listings", &self.listings_path)?;
        validate_path("output.path", &self.output_path)?;
        validate_output_distinct(
            "output.path",
            &self.output_path,
            &[self.products_path.as_str(), self.listings_path.as_str()],
        )
    }
}
