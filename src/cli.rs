use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "catgallery",
    version,
    about = "Browse and favorite cat images in the terminal"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/catgallery/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API key sent as the x-api-key header
    #[arg(long, env = "CATGALLERY_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the image API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Number of images in the first page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file, then apply command-line overrides and validate.
    ///
    /// A missing default config file yields defaults; a missing file passed
    /// with `--config` is an error.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(key) = &self.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(url) = &self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(size) = self.page_size {
            config.query.initial_page_size = size;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "catgallery",
            "--api-key",
            "secret",
            "--base-url",
            "http://localhost:9000/v1",
            "--page-size",
            "10",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api.base_url, "http://localhost:9000/v1");
        assert_eq!(config.query.initial_page_size, 10);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from(["catgallery", "--config", "/nonexistent/catgallery.toml"])
            .unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_page_size() {
        assert!(Cli::try_parse_from(["catgallery", "--page-size", "many"]).is_err());
    }
}
