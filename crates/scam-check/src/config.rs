use anyhow::Context;
use scam_protocol::ServiceConfig;
use serde::Deserialize;
use std::path::Path;

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/scam-check.toml";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

/// Reads the TOML config. Only the implicit default path may be missing;
/// an explicit `--config` path that does not exist is an error.
pub(crate) fn load_file_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    match explicit {
        Some(path) => read_file_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if !path.exists() {
                return Ok(FileConfig::default());
            }
            read_file_config(path)
        }
    }
}

fn read_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    if !path.exists() {
        anyhow::bail!("config file {} does not exist", path.display());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: FileConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Flag and env values (already merged by clap) win over the file.
pub(crate) fn resolve_service_config(
    file: FileConfig,
    api_key: Option<String>,
    base_url: Option<String>,
) -> anyhow::Result<ServiceConfig> {
    let api_key = non_blank(api_key)
        .or_else(|| non_blank(file.api_key))
        .context("please provide an API key (--api-key, SCAM_CHECK_API_KEY or api_key in the config file)")?;
    let base_url = non_blank(base_url).or_else(|| non_blank(file.base_url));
    Ok(ServiceConfig::new(api_key, base_url))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            base_url: Some("https://file.example".to_string()),
        };
        let config =
            resolve_service_config(file, Some("flag-key".to_string()), None).expect("config");
        assert_eq!(config.api_key, "flag-key");
        assert_eq!(config.base_url.as_deref(), Some("https://file.example"));
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = resolve_service_config(FileConfig::default(), Some("  ".to_string()), None)
            .expect_err("missing key");
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn parses_toml_file() {
        let config: FileConfig =
            toml::from_str("api_key = \"k\"\nbase_url = \"http://localhost:8080\"\n")
                .expect("parse");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn missing_default_file_is_empty_config() {
        assert!(!Path::new(DEFAULT_CONFIG_PATH).exists());
        let config = load_file_config(None).expect("empty config");
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn missing_explicit_file_is_rejected() {
        let err = load_file_config(Some(Path::new("/nonexistent/typo-scam-check.toml")))
            .expect_err("explicit path must exist");
        assert!(err.to_string().contains("typo-scam-check.toml"));
    }
}
