//! API Guide - An interactive terminal guide to API fundamentals
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use apiguide_app::config::resolve_settings;
use apiguide_core::{logging, Catalog, Section};
use clap::Parser;
use color_eyre::eyre::Result;

/// API Guide - An interactive terminal guide to API fundamentals
#[derive(Parser, Debug)]
#[command(name = "apiguide")]
#[command(about = "An interactive terminal guide to API fundamentals", long_about = None)]
struct Args {
    /// Section to open first (intro, types, rest, json, status, best-practices, openapi)
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Settings file to use instead of the default config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in content catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Run in headless mode (stdin commands, NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Print the active catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let mut settings = resolve_settings(args.config.as_deref());
    if let Some(id) = &args.section {
        settings.behavior.start_section = Section::from_id(id)?;
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    if args.print_catalog {
        println!("{}", catalog.to_json_pretty()?);
        return Ok(());
    }

    if args.headless {
        apiguide::run_headless(catalog, settings).await?;
    } else {
        apiguide::run(catalog, settings).await?;
    }

    Ok(())
}
