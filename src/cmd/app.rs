use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::profiles::ProfilesArgs;
use crate::cmd::repos::ReposArgs;
use crate::cmd::Run;
use crate::config::Config;

/// Small operator toolkit: list GitHub org repositories, inspect terminal
/// profiles.
#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Repos(ReposArgs),
    Profiles(ProfilesArgs),
}

impl Run for App {
    fn run(&self, cfg: &Config) -> Result<()> {
        match &self.command {
            Commands::Repos(args) => args.run(cfg),
            Commands::Profiles(args) => args.run(cfg),
        }
    }
}
