#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use byggservice_core::logging::LoggingBuilder;
use byggservice_core::parse_max_words;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Word limit of the description, set from command line
static MAX_WORDS: OnceLock<usize> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the description's word limit
pub fn get_max_words() -> usize {
    MAX_WORDS
        .get()
        .copied()
        .unwrap_or(byggservice_core::DEFAULT_MAX_WORDS)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("byggservice")
}

/// Gjøvik Byggservice - contact form
#[derive(Parser, Debug)]
#[command(name = "byggservice-desktop")]
#[command(about = "Gjøvik Byggservice - contact form with local submission limits")]
struct Args {
    /// Data directory for the submission history and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Word limit of the description, read like its data-max-words attribute
    #[arg(long)]
    max_words: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let log_path = LoggingBuilder::new(data_dir.join("logs"))
        .init()
        .context("failed to initialize logging")?;

    let max_words = parse_max_words(args.max_words.as_deref());
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = MAX_WORDS.set(max_words);

    tracing::info!(
        data_dir = %data_dir.display(),
        log_path = %log_path.display(),
        max_words,
        "Starting contact form"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gjøvik Byggservice")
            .with_inner_size(dioxus::desktop::LogicalSize::new(640.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
