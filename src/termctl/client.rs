use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::{Method, Url};

use crate::config::TerminalConfig;
use crate::debug;

use super::{Profile, TermControl};

/// Client for the terminal's local control endpoint.
pub struct ControlClient {
    client: Client,

    url: String,
}

impl ControlClient {
    pub fn build(cfg: &TerminalConfig) -> Result<Box<dyn TermControl>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.api_timeout))
            .build()
            .context("build terminal control http client")?;
        Ok(Box::new(ControlClient {
            client,
            url: cfg.control_url.trim_end_matches('/').to_string(),
        }))
    }
}

impl TermControl for ControlClient {
    fn list_profiles(&self) -> Result<Vec<Profile>> {
        let url = format!("{}/profiles", self.url);
        debug!("[termctl] List profiles: {url}");
        let url = Url::parse(&url).with_context(|| format!("parse control url {url}"))?;
        let resp = self
            .client
            .request(Method::GET, url)
            .header("User-Agent", "opskit-client")
            .send()
            .context("terminal control request, is the terminal running?")?;
        let status = resp.status();
        let data = resp.bytes().context("read terminal control response body")?;
        if !status.is_success() {
            bail!(
                "terminal control error: {} {}",
                status.as_u16(),
                String::from_utf8_lossy(&data).trim()
            );
        }
        let profiles: Vec<Profile> =
            serde_json::from_slice(&data).context("decode terminal control response data")?;
        debug!("[termctl] Got {} profiles", profiles.len());
        Ok(profiles)
    }
}
