//! Databind CLI
//!
//! Local stand-in for the editor's document provider and configuration
//! surface:
//! - Listing the bindable field paths of a sample response
//! - Resolving a single path against a document
//! - Rendering every component of a widget configuration against documents

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use databind_core::{FieldCatalogue, PathResolver, WidgetConfig};

mod input;
mod report;

#[derive(Parser)]
#[command(name = "databind")]
#[command(
    author,
    version,
    about = "Databind: bind JSON API response fields to dashboard components"
)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bindable field paths of a sample response (`-` reads stdin).
    Paths {
        /// Sample response JSON
        input: PathBuf,
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one field path against a document (exit status 1 when not found).
    Resolve {
        /// Document JSON (`-` reads stdin)
        input: PathBuf,
        /// Field path, e.g. `items[0].id`
        path: String,
        /// Collapse geolocation objects into "<name>, <region>, <country>"
        #[arg(long)]
        location_summary: bool,
    },

    /// Render every component of a widget configuration.
    Render {
        /// Widget configuration JSON
        #[arg(short, long)]
        config: PathBuf,
        /// Document for an API, as `<api-id>=<file>` (repeatable)
        #[arg(short, long = "document", value_parser = input::parse_document_arg)]
        documents: Vec<(String, PathBuf)>,
        /// Enable the geolocation collapse regardless of the configuration
        #[arg(long)]
        location_summary: bool,
        /// Print rendered components as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Paths { input, json } => cmd_paths(&input, json),
        Commands::Resolve {
            input,
            path,
            location_summary,
        } => cmd_resolve(&input, &path, location_summary),
        Commands::Render {
            config,
            documents,
            location_summary,
            json,
        } => cmd_render(&config, &documents, location_summary, json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_paths(sample_path: &PathBuf, json: bool) -> Result<ExitCode> {
    let sample = input::read_sample(sample_path)?;
    let catalogue = FieldCatalogue::from_sample(&sample);
    tracing::info!(paths = catalogue.len(), "built field catalogue");

    if json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
    } else {
        report::print_catalogue(&catalogue);
    }
    eprintln!(
        "{} {} field paths in {}",
        "found".green().bold(),
        catalogue.len(),
        sample_path.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_resolve(document_path: &PathBuf, path: &str, location_summary: bool) -> Result<ExitCode> {
    let document = input::read_document(document_path)?;
    let resolver = if location_summary {
        PathResolver::with_location_summary()
    } else {
        PathResolver::new()
    };

    match resolver.resolve(&document, path) {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&*value)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!(
                "{} {} not found in {}",
                "error:".red().bold(),
                path,
                document_path.display()
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_render(
    config_path: &PathBuf,
    documents: &[(String, PathBuf)],
    location_summary: bool,
    json: bool,
) -> Result<ExitCode> {
    let text = input::read_text(config_path)?;
    let config = WidgetConfig::from_json_str(&text)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let mut loaded = BTreeMap::new();
    for (api_id, path) in documents {
        if loaded.contains_key(api_id) {
            return Err(anyhow!("document for api `{api_id}` given more than once"));
        }
        loaded.insert(api_id.clone(), input::read_document(path)?);
    }

    let mut options = config.options.clone();
    options.location_summary |= location_summary;
    let resolver = options.resolver();

    let rendered = config.render_all(&resolver, &loaded);
    tracing::info!(
        widget = %config.name,
        components = rendered.len(),
        documents = loaded.len(),
        "rendered widget"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        report::print_rendered(&rendered)?;
    }
    Ok(ExitCode::SUCCESS)
}
