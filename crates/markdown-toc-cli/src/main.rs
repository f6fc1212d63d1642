//! Reads a markdown document from a file or stdin and writes it to stdout with
//! its table of contents regenerated.
//!
//! Usage:
//!   markdown-toc [FILE]            - whole document with the ToC block refreshed
//!   markdown-toc --toc [FILE]      - only the rendered ToC list
//!   markdown-toc --init-config     - write the default config file

use anyhow::{Context, Result};
use clap::Parser;
use markdown_toc_config::Config;
use markdown_toc_engine::{Mode, io};
use std::io::BufRead;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "markdown-toc", version, about)]
struct Cli {
    /// Markdown document to read; stdin when omitted
    file: Option<PathBuf>,

    /// Print only the table of contents list
    #[arg(long)]
    toc: bool,

    /// Config file to use instead of ~/.config/markdown-toc/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long, conflicts_with_all = ["file", "toc"])]
    init_config: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            log::debug!("Config path: {}", path.display());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(loaded.unwrap_or_default())
}

fn init_config(cli: &Cli) -> Result<()> {
    let path = match &cli.config {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.clone()),
        None => Config::config_path(),
    };
    if path.exists() {
        anyhow::bail!("Config file already exists at {}", path.display());
    }
    let config = Config::default();
    let saved = match &cli.config {
        Some(_) => config.save_to_path(&path),
        None => config.save(),
    };
    saved.with_context(|| format!("Failed to write config file at {}", path.display()))?;
    eprintln!("Wrote default config to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        return init_config(&cli);
    }

    let config = load_config(&cli)?;
    let mode = Mode::from_toc_only(cli.toc);
    log::info!("Rewriting in {mode:?} mode");

    let reader: Box<dyn BufRead> = match &cli.file {
        Some(path) => Box::new(
            io::open_document(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin().lock()),
    };

    io::rewrite_stream(reader, std::io::stdout().lock(), mode, config.rewriter_options())
        .context("Failed to rewrite document")?;
    Ok(())
}

fn main() {
    // Logs go to stderr; stdout carries the document
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
