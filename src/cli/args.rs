use crate::core::{PipelineResult, Transform};
use crate::services::{try_transform_fn, ConfigPreset, DefaultPipelineConfig, Identity};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "bounded_pipeline")]
#[command(about = "Run a bounded-queue producer/consumer pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push integers through the pipeline and print source and destination
    Run(RunArgs),

    /// Print the resolved pipeline configuration as JSON
    ShowConfig(ConfigArgs),

    /// List the available configuration presets
    Presets,
}

/// Options shared by every command that builds a configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration preset
    #[arg(short = 'p', long, value_enum, conflicts_with = "config")]
    pub preset: Option<ConfigPreset>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of messages held by the queue
    #[arg(short = 'q', long)]
    pub queue_size: Option<usize>,

    /// Upper bound for the whole run in milliseconds
    #[arg(long, conflicts_with = "no_timeout")]
    pub timeout_ms: Option<u64>,

    /// Wait for the run without an upper bound
    #[arg(long)]
    pub no_timeout: bool,
}

impl ConfigArgs {
    /// Config file (or preset) first, then the individual flags on top
    pub fn resolve(&self) -> PipelineResult<DefaultPipelineConfig> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => DefaultPipelineConfig::from_json_file(path)?,
            (None, Some(preset)) => preset.config(),
            (None, None) => ConfigPreset::Default.config(),
        };

        if let Some(queue_size) = self.queue_size {
            config = config.with_max_queue_size(queue_size);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(timeout_ms));
        }
        if self.no_timeout {
            config = config.without_timeout();
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Use 0..COUNT as the source
    #[arg(short = 'n', long, default_value = "10")]
    pub count: u64,

    /// Explicit comma separated source (overrides --count)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub items: Option<Vec<i64>>,

    /// Transform applied to every item
    #[arg(short, long, value_enum, default_value = "square")]
    pub transform: TransformKind,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,
}

impl RunArgs {
    pub fn source(&self) -> Vec<i64> {
        match &self.items {
            Some(items) => items.clone(),
            None => (0..self.count as i64).collect(),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Identity,
    Square,
    Double,
    Negate,
}

impl TransformKind {
    /// Integer transforms fail on overflow instead of wrapping
    pub fn build(self) -> Box<dyn Transform<i64, Output = i64>> {
        match self {
            Self::Identity => Box::new(Identity),
            Self::Square => Box::new(try_transform_fn("square", |x: i64| {
                x.checked_mul(x)
                    .ok_or_else(|| anyhow::anyhow!("square of {x} overflows i64"))
            })),
            Self::Double => Box::new(try_transform_fn("double", |x: i64| {
                x.checked_mul(2)
                    .ok_or_else(|| anyhow::anyhow!("double of {x} overflows i64"))
            })),
            Self::Negate => Box::new(try_transform_fn("negate", |x: i64| {
                x.checked_neg()
                    .ok_or_else(|| anyhow::anyhow!("negation of {x} overflows i64"))
            })),
        }
    }
}
