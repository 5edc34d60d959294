use std::time::Duration;

use anyhow::{bail, Context, Result};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;

use crate::api::{Provider, RemoteRepo};
use crate::config::GithubConfig;
use crate::debug;

#[derive(Debug, Deserialize)]
struct GithubRepo {
    pub name: String,
    pub html_url: String,
}

impl GithubRepo {
    fn api(self) -> RemoteRepo {
        RemoteRepo {
            name: self.name,
            web_url: self.html_url,
        }
    }
}

/// One page as it came off the wire, the pagination link kept unparsed.
pub(super) struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub link: Option<String>,
}

/// The http hop under the pagination loop. Kept this narrow so tests can
/// feed scripted pages.
pub(super) trait Transport {
    fn get(&self, url: &str) -> Result<RawResponse>;
}

struct HttpTransport {
    client: Client,
    token: String,
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let url = Url::parse(url).with_context(|| format!("parse GitHub url {url}"))?;
        let req = self
            .client
            .request(Method::GET, url)
            .header("User-Agent", "opskit-client")
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .build()
            .context("build GitHub request")?;
        let resp = self.client.execute(req).context("GitHub http request")?;
        let status = resp.status();
        let link = resp
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = resp.bytes().context("read GitHub response body")?.to_vec();
        Ok(RawResponse { status, body, link })
    }
}

pub struct Github {
    transport: Box<dyn Transport>,

    url: String,

    per_page: u32,
}

impl Github {
    pub fn build(cfg: &GithubConfig, token: String) -> Result<Box<dyn Provider>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.api_timeout))
            .build()
            .context("build GitHub http client")?;
        Ok(Box::new(Github {
            transport: Box::new(HttpTransport { client, token }),
            url: cfg.api_url.trim_end_matches('/').to_string(),
            per_page: cfg.list_limit,
        }))
    }

    fn next_url(link: Option<&str>) -> Option<String> {
        const NEXT_LINK_REGEX: &str = r#"<([^>]+)>\s*;\s*rel="next""#;
        let link = link?;
        let re = Regex::new(NEXT_LINK_REGEX).expect("parse next link regex");
        let caps = re.captures(link)?;
        Some(caps.get(1)?.as_str().to_string())
    }
}

impl Provider for Github {
    fn list_org_repos(&self, org: &str) -> Result<Vec<RemoteRepo>> {
        let org_encode = urlencoding::encode(org);
        let mut url = format!(
            "{}/orgs/{org_encode}/repos?per_page={}",
            self.url, self.per_page
        );
        let mut repos = Vec::new();
        loop {
            debug!("[github] List repos page: {url}");
            let resp = self.transport.get(&url)?;
            // Every page must come back 200, the first one included.
            if resp.status != StatusCode::OK {
                let body = String::from_utf8_lossy(&resp.body);
                bail!(
                    "failed to fetch repositories: {} {}",
                    resp.status.as_u16(),
                    body.trim()
                );
            }
            let page: Vec<GithubRepo> =
                serde_json::from_slice(&resp.body).context("decode GitHub response data")?;
            debug!("[github] Got {} repos", page.len());
            repos.extend(page.into_iter().map(|repo| repo.api()));
            match Self::next_url(resp.link.as_deref()) {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(repos)
    }
}
