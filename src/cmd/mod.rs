mod app;
mod profiles;
mod repos;

pub use app::App;

use anyhow::Result;

use crate::config::Config;

pub trait Run {
    fn run(&self, cfg: &Config) -> Result<()>;
}
