use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trackboard::config::{AppConfig, CliConfig, FileConfig};
use trackboard::dataset::{DatasetProvider, SyntheticSource, DEFAULT_SAMPLE_SIZE};
use trackboard::server::{run_server, RequestsLoggingLevel};
use trackboard::view::TopN;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to an optional TOML config file. File values override CLI values.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Row limit applied to ranked views when a request carries no top_n.
    #[clap(long, default_value_t = TopN::DEFAULT)]
    pub default_top_n: usize,

    /// Number of correlation observations drawn per dataset build.
    #[clap(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Fixed RNG seed for the correlation sample; omit for a fresh
    /// sample on every rebuild.
    #[clap(long)]
    pub seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file at {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        default_top_n: cli_args.default_top_n,
        sample_size: cli_args.sample_size,
        seed: cli_args.seed,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let mut source = SyntheticSource::new().with_sample_size(config.sample_size);
    if let Some(seed) = config.seed {
        info!("Using fixed dataset seed {}", seed);
        source = source.with_seed(seed);
    }
    let provider = Arc::new(DatasetProvider::new(Box::new(source)));

    // Warm the cache so the first navigation event is served instantly.
    let dataset = provider.get()?;
    info!(
        "Dataset ready: {} tracks, {} correlation samples, generated at {}",
        dataset.tracks.len(),
        dataset.correlation_samples.len(),
        dataset.generated_at
    );

    info!("Ready to serve at port {}!", config.port);
    run_server(
        provider,
        config.logging_level,
        config.port,
        config.default_top_n,
    )
    .await
}
