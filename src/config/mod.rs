mod file_config;

pub use file_config::{DatasetConfig, FileConfig};

use crate::dataset::DEFAULT_SAMPLE_SIZE;
use crate::server::RequestsLoggingLevel;
use crate::view::TopN;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_top_n: usize,
    pub sample_size: usize,
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            port: 3001,
            logging_level: RequestsLoggingLevel::default(),
            default_top_n: TopN::DEFAULT,
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_top_n: TopN,
    pub sample_size: usize,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let dataset = file.dataset.unwrap_or_default();

        let logging_level = match file.logging_level {
            Some(name) => match RequestsLoggingLevel::from_str(&name, true) {
                Ok(level) => level,
                Err(_) => bail!("Unknown logging_level in config file: \"{}\"", name),
            },
            None => cli.logging_level.clone(),
        };

        let default_top_n = file.default_top_n.unwrap_or(cli.default_top_n);
        let default_top_n = match TopN::new(default_top_n) {
            Ok(top_n) => top_n,
            Err(err) => bail!("Invalid default_top_n: {}", err),
        };

        let sample_size = dataset.sample_size.unwrap_or(cli.sample_size);
        if sample_size < 2 {
            bail!("sample_size must be at least 2, got {}", sample_size);
        }

        Ok(AppConfig {
            port: file.port.unwrap_or(cli.port),
            logging_level,
            default_top_n,
            sample_size,
            seed: dataset.seed.or(cli.seed),
        })
    }
}
