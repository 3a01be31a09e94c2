mod cli;

use filemeta::config::{self, Config};
use filemeta::metadata::{
    AggregatedMetadata, ExtensionClassifier, LocalFileSystemProvider, MetadataAggregator,
};
use filemeta_common::Entry;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One line of `get` output: the entry's URL next to its metadata groups.
#[derive(Serialize)]
struct EntryReport<'a> {
    entry: &'a Entry,
    #[serde(flatten)]
    metadata: &'a AggregatedMetadata,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "filemeta=trace,filemeta_common=debug".to_string()
        } else {
            "filemeta=warn".to_string()
        }
    });

    // stdout carries JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Get { paths, pretty } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(get_metadata(&paths, &config, pretty))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("filemeta {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn get_metadata(paths: &[PathBuf], config: &Config, pretty: bool) -> Result<()> {
    let entries = paths
        .iter()
        .map(|path| entry_for_path(path))
        .collect::<Result<Vec<_>>>()?;

    let provider = LocalFileSystemProvider::new().with_orientation(config.provider.read_orientation);
    let classifier = ExtensionClassifier::with_extensions(&config.classifier.image_extensions);
    let aggregator = MetadataAggregator::new(Arc::new(provider), Arc::new(classifier));

    tracing::info!(entries = entries.len(), "Aggregating metadata");
    let metadata = aggregator.get(&entries).await?;

    let reports: Vec<EntryReport<'_>> = entries
        .iter()
        .zip(&metadata)
        .map(|(entry, metadata)| EntryReport { entry, metadata })
        .collect();

    let json = if pretty || config.output.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", json);

    Ok(())
}

/// Resolve a command-line path to a `file:` entry.
///
/// Existing paths are canonicalized; missing ones are joined onto the current
/// directory so they still report as not present.
fn entry_for_path(path: &Path) -> Result<Entry> {
    let absolute = if path.exists() {
        std::fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve path: {:?}", path))?
    } else {
        std::env::current_dir()
            .context("Failed to read current directory")?
            .join(path)
    };
    Ok(Entry::from_path(&absolute)?)
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!(
        "  Image extensions: {}",
        config.classifier.image_extensions.join(", ")
    );
    println!("  Read orientation: {}", config.provider.read_orientation);
    println!("  Pretty output: {}", config.output.pretty);
}
