pub mod default;
pub mod types;

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use crate::config::types::{Config, GithubConfig, TerminalConfig};
use crate::debug;

impl Config {
    /// Read the config file. A missing file is not an error, it means all
    /// defaults.
    pub fn load() -> Result<Config> {
        let path = Self::get_path();
        debug!("[config] Read config file {}", path.display());
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("[config] Config file not found, using defaults");
                return Ok(default::config());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read config file {}", path.display()));
            }
        };
        let cfg: Config = toml::from_str(&data)
            .with_context(|| format!("parse config file {}", path.display()))?;
        debug!("[config] Config: {cfg:?}");
        Ok(cfg)
    }

    pub fn get_path() -> PathBuf {
        if let Ok(path) = env::var("OPSKIT_CONFIG") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        let dir = shellexpand::tilde("~/.config/opskit").to_string();
        PathBuf::from(dir).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, default::config());
    }

    #[test]
    fn test_overrides() {
        let data = r#"
[github]
token = "abc"
list_limit = 30

[terminal]
control_url = "http://127.0.0.1:9000"
"#;
        let cfg: Config = toml::from_str(data).unwrap();
        assert_eq!(cfg.github.token, "abc");
        assert_eq!(cfg.github.list_limit, 30);
        assert_eq!(cfg.github.api_url, "https://api.github.com");
        assert_eq!(cfg.github.api_timeout, 10);
        assert_eq!(cfg.terminal.control_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.terminal.api_timeout, 10);
    }
}
