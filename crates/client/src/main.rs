//! D.E.R.P. character sheet builder.
//!
//! Loads the reference catalog, replays a saved selections document and
//! prints the finished sheet.
//!
//! # Examples
//!
//! ```bash
//! # Blank sheet
//! derps-sheet --catalog derps.json
//!
//! # Replay selections, write the export to a file
//! DERPS_CATALOG=derps.json derps-sheet -s rogan.json -o rogan.md
//!
//! # Inspect every derived field
//! derps-sheet --catalog derps.json -s rogan.json --format draft
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sheet_cli::{CliConfig, OutputFormat, SheetApp};

/// Build a D.E.R.P. character sheet from saved selections
#[derive(Parser, Debug)]
#[command(name = "derps-sheet")]
#[command(about = "Build a D.E.R.P. character sheet", long_about = None)]
#[command(version)]
struct Args {
    /// JSON catalog document (overrides DERPS_CATALOG)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// TOML sheet configuration (overrides DERPS_CONFIG)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of ability rows (overrides DERPS_ABILITY_SLOTS)
    #[arg(long, value_name = "N")]
    ability_slots: Option<usize>,

    /// JSON selections document to replay
    #[arg(short, long, value_name = "FILE")]
    selections: Option<PathBuf>,

    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = CliConfig::from_env().merge(CliConfig {
        catalog_path: args.catalog,
        config_path: args.config,
        ability_slots: args.ability_slots,
    });

    let mut builder = SheetApp::builder(config);
    if let Some(path) = args.selections {
        builder = builder.selections(path);
    }

    let app = builder.build().await?;
    app.write(args.format, args.output.as_deref())
}
