use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bounded_pipeline::cli::{execute_presets, execute_run, execute_show_config, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout は結果出力専用にするため、ログは stderr へ
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => execute_run(args).await,
        Commands::ShowConfig(args) => execute_show_config(&args),
        Commands::Presets => {
            execute_presets();
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("❌ エラー: {error}");
        std::process::exit(1);
    }

    Ok(())
}
