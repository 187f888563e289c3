pub mod engine;
pub mod matcher;
pub mod normalizer;
pub mod pattern;
pub mod pipeline;
pub mod records;
pub mod runner;

pub use crate::domain::model::{Catalog, Listing, MatchResult, Product};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
