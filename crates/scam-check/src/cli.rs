use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scam-check", version, about = "Scam-risk assessment for text, images and URLs")]
pub(crate) struct Args {
    /// Defaults to config/scam-check.toml, which may be absent.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, env = "SCAM_CHECK_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,
    #[arg(long, env = "SCAM_CHECK_BASE_URL")]
    pub(crate) base_url: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    /// Log at debug level instead of warn.
    #[arg(long, short, default_value_t = false)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze a message; `-` reads it from stdin.
    Text { text: String },
    /// Analyze a JPG, PNG, WEBP or GIF image.
    Image {
        path: PathBuf,
        /// Overrides the media type guessed from the file extension.
        #[arg(long)]
        media_type: Option<String>,
    },
    /// Analyze a URL without fetching it.
    Url { url: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Summary,
}
