mod api;
mod cmd;
mod config;
mod debug;
mod termctl;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cmd::{App, Run};
use crate::config::Config;

fn main() {
    console::set_colors_enabled(true);
    debug::init_from_env();
    utils::handle_result(run());
}

fn run() -> Result<()> {
    let app = App::parse();
    let cfg = Config::load().context("load config")?;
    app.run(&cfg)
}
