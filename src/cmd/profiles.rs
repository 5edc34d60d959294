use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd::Run;
use crate::config::Config;
use crate::debug;
use crate::termctl::client::ControlClient;
use crate::termctl::{Profile, TermControl};

/// List terminal profiles and announce the switch target.
#[derive(Debug, Args)]
pub struct ProfilesArgs {
    /// The profile to switch to.
    #[arg(long, short, default_value = "Default")]
    pub switch: String,
}

impl Run for ProfilesArgs {
    fn run(&self, cfg: &Config) -> Result<()> {
        debug!("[cmd] Run profiles command: {:?}", self);
        let ctl = ControlClient::build(&cfg.terminal)?;
        let profiles = ctl.list_profiles()?;
        show_profiles(&mut io::stdout(), &self.switch, &profiles)
            .context("write profiles to stdout")
    }
}

fn show_profiles<W: Write>(out: &mut W, target: &str, profiles: &[Profile]) -> Result<()> {
    for profile in profiles {
        writeln!(out, "Profile: {}", profile.name)?;
        if profile.name == target {
            // TODO: issue the actual switch once the control endpoint
            // exposes one, for now we can only announce it.
            writeln!(out, "Switching to profile: {}", profile.name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::termctl::tests::StaticControl;

    use super::*;

    #[test]
    fn test_show_profiles() {
        let ctl = StaticControl::new(vec!["Default", "Work"]);
        let profiles = ctl.list_profiles().unwrap();

        let mut out = Vec::new();
        show_profiles(&mut out, "Default", &profiles).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Profile: Default\nSwitching to profile: Default\nProfile: Work\n"
        );
    }

    #[test]
    fn test_show_profiles_no_match() {
        let ctl = StaticControl::new(vec!["Default", "Work"]);
        let profiles = ctl.list_profiles().unwrap();

        let mut out = Vec::new();
        show_profiles(&mut out, "Hotkey", &profiles).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Profile: Default\nProfile: Work\n"
        );
    }
}
