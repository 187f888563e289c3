use crate::config::toml_config::TomlConfig;
use crate::config::MatchConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "listing-matcher")]
#[command(about = "Match product catalog entries against marketplace listings")]
pub struct CliConfig {
    /// Line-delimited JSON products file
    #[arg(long)]
    pub products: Option<String>,

    /// Line-delimited JSON listings file
    #[arg(long)]
    pub listings: Option<String>,

    /// Where to write the matches
    #[arg(long)]
    pub output: Option<String>,

    /// TOML configuration file; explicit path flags override it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Match without writing output")]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merge defaults, the optional TOML file and command line flags (highest priority).
    pub fn resolve(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.into_match_config()
            }
            None => MatchConfig::default(),
        };

        if let Some(products) = &self.products {
            config.products_path = products.clone();
        }
        if let Some(listings) = &self.listings {
            config.listings_path = listings.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        config.monitoring |= self.monitor;

        Ok(config)
    }
}
