use serde::Deserialize;

use crate::config::default;

/// The opskit configuration. Every field is optional in the file, missing
/// ones are filled with defaults.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default::github")]
    pub github: GithubConfig,

    #[serde(default = "default::terminal")]
    pub terminal: TerminalConfig,
}

/// GitHub api options, used by the `repos` command.
#[derive(Debug, PartialEq, Deserialize)]
pub struct GithubConfig {
    /// The access token used to authenticate when calling api. The
    /// `GITHUB_TOKEN` env takes precedence over this value.
    /// See: https://docs.github.com/en/rest/overview/authenticating-to-the-rest-api
    #[serde(default = "default::empty_string")]
    pub token: String,

    /// The api base url. Change this when talking to GitHub Enterprise.
    #[serde(default = "default::github_api_url")]
    pub api_url: String,

    /// The page size when listing repositories.
    #[serde(default = "default::list_limit")]
    pub list_limit: u32,

    /// The api request timeout, in seconds.
    #[serde(default = "default::api_timeout")]
    pub api_timeout: u64,
}

/// Terminal control endpoint options, used by the `profiles` command. The
/// endpoint is only reachable on the local machine.
#[derive(Debug, PartialEq, Deserialize)]
pub struct TerminalConfig {
    /// The base url of the terminal control endpoint.
    #[serde(default = "default::control_url")]
    pub control_url: String,

    /// The control request timeout, in seconds.
    #[serde(default = "default::api_timeout")]
    pub api_timeout: u64,
}
