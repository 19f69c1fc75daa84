mod cli;
mod config;
mod render;

use crate::cli::{Args, Command, OutputFormat};
use crate::config::{load_file_config, resolve_service_config};
use anyhow::Context;
use clap::Parser;
use scam_analyzer::Analyzer;
use scam_protocol::{AnalysisInput, ImageMediaType};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let file_config = load_file_config(args.config.as_deref())?;
    let service = resolve_service_config(file_config, args.api_key, args.base_url)?;
    let input = read_input(args.command).await?;
    info!(
        modality = input.modality().as_str(),
        base_url = service.effective_base_url(),
        "scam check starting"
    );

    let result = Analyzer::http().analyze(&service, &input).await?;
    let rendered = match args.format {
        OutputFormat::Json => render::render_json(&result)?,
        OutputFormat::Summary => render::render_summary(&result),
    };
    println!("{rendered}");
    Ok(())
}

async fn read_input(command: Command) -> anyhow::Result<AnalysisInput> {
    let input = match command {
        Command::Text { text } => {
            let text = if text == "-" {
                let mut buffer = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .context("failed to read text from stdin")?;
                buffer
            } else {
                text
            };
            AnalysisInput::text(text)?
        }
        Command::Image { path, media_type } => {
            let media_type = match media_type {
                Some(mime) => ImageMediaType::from_mime(&mime)?,
                None => media_type_from_path(&path)?,
            };
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read image {}", path.display()))?;
            AnalysisInput::image(bytes, media_type)?
        }
        Command::Url { url } => AnalysisInput::url(&url)?,
    };
    Ok(input)
}

fn media_type_from_path(path: &Path) -> anyhow::Result<ImageMediaType> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .with_context(|| format!("cannot infer media type of {}; pass --media-type", path.display()))?;
    Ok(ImageMediaType::from_extension(ext)?)
}

// stdout carries the result, so logs always go to stderr.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
