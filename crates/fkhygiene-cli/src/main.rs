use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod export;
mod inputs;
mod pipeline;
mod store;

#[derive(Debug, Parser)]
#[command(name = "fkhygiene")]
#[command(about = "Flipkart PDP hygiene collector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch raw page payloads for every (FSN, pincode) pair not yet on disk
    Fetch {
        /// File with one FSN per line
        #[arg(long)]
        products: PathBuf,

        /// File with one pincode per line
        #[arg(long)]
        pincodes: PathBuf,

        /// Override the configured artifact directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Extract hygiene records from stored payloads and write the CSV report
    Export {
        /// Override the configured artifact directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Report path (defaults to the artifact directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fetch, then export, in one invocation
    Run {
        /// File with one FSN per line
        #[arg(long)]
        products: PathBuf,

        /// File with one pincode per line
        #[arg(long)]
        pincodes: PathBuf,

        /// Override the configured artifact directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Report path (defaults to the artifact directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

const REPORT_BASENAME: &str = "hygiene_report.csv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = fkhygiene_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch {
            products,
            pincodes,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            pipeline::run_fetch(&config, &products, &pincodes, &output_dir).await?;
        }
        Commands::Export { output_dir, out } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let out = out.unwrap_or_else(|| output_dir.join(REPORT_BASENAME));
            export::run_export(&output_dir, &out)?;
        }
        Commands::Run {
            products,
            pincodes,
            output_dir,
            out,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            pipeline::run_fetch(&config, &products, &pincodes, &output_dir).await?;
            let out = out.unwrap_or_else(|| output_dir.join(REPORT_BASENAME));
            export::run_export(&output_dir, &out)?;
        }
    }

    Ok(())
}
