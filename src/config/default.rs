use crate::config::types::{Config, GithubConfig, TerminalConfig};

pub fn config() -> Config {
    Config {
        github: github(),
        terminal: terminal(),
    }
}

pub fn github() -> GithubConfig {
    GithubConfig {
        token: empty_string(),
        api_url: github_api_url(),
        list_limit: list_limit(),
        api_timeout: api_timeout(),
    }
}

pub fn terminal() -> TerminalConfig {
    TerminalConfig {
        control_url: control_url(),
        api_timeout: api_timeout(),
    }
}

pub fn empty_string() -> String {
    String::new()
}

pub fn github_api_url() -> String {
    String::from("https://api.github.com")
}

pub fn control_url() -> String {
    String::from("http://127.0.0.1:8023")
}

pub fn list_limit() -> u32 {
    100
}

pub fn api_timeout() -> u64 {
    10
}
