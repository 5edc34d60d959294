use std::env;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::api::github::Github;
use crate::api::{Provider, RemoteRepo};
use crate::cmd::Run;
use crate::config::Config;
use crate::{debug, info};

/// List all repositories under a GitHub organization.
#[derive(Debug, Args)]
pub struct ReposArgs {
    /// The organization name.
    pub org: String,
}

impl Run for ReposArgs {
    fn run(&self, cfg: &Config) -> Result<()> {
        debug!("[cmd] Run repos command: {:?}", self);
        // Resolve the token first so a missing token never costs a request.
        let token = resolve_token(cfg)?;
        let provider = Github::build(&cfg.github, token)?;
        let repos = provider.list_org_repos(&self.org)?;
        info!("Listed {} repositories under {}", repos.len(), self.org);
        show_repos(&mut io::stdout(), &repos).context("write repos to stdout")
    }
}

fn resolve_token(cfg: &Config) -> Result<String> {
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        if !token.is_empty() {
            return Ok(token);
        }
    }
    if !cfg.github.token.is_empty() {
        return Ok(cfg.github.token.clone());
    }
    bail!("GITHUB_TOKEN environment variable not set, export it or set github.token in config");
}

fn show_repos<W: Write>(out: &mut W, repos: &[RemoteRepo]) -> Result<()> {
    for repo in repos {
        writeln!(out, "{}: {}", repo.name, repo.web_url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::api::tests::StaticProvider;
    use crate::config::default;

    use super::*;

    #[test]
    fn test_resolve_token_from_config() {
        let mut cfg = default::config();
        cfg.github.token = String::from("config-token");
        let token = resolve_token(&cfg).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_resolve_token_missing() {
        env::remove_var("GITHUB_TOKEN");
        let cfg = default::config();
        let err = resolve_token(&cfg).unwrap_err();
        assert!(format!("{err}").contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_show_repos() {
        let provider = StaticProvider::new(vec![("myorg", vec![("a", "u1"), ("b", "u2")])]);
        let repos = provider.list_org_repos("myorg").unwrap();

        let mut out = Vec::new();
        show_repos(&mut out, &repos).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a: u1\nb: u2\n");
    }
}
