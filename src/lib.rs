pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, MatchConfig};
pub use core::{
    engine::is_matched,
    matcher::{match_all, ManufacturerIndex, MatchSummary},
    pipeline::MatchPipeline,
    runner::BatchRunner,
};
pub use domain::model::{Catalog, Listing, MatchResult, Product};
pub use utils::error::{MatchError, Result};
