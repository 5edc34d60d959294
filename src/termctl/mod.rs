pub mod client;

use anyhow::Result;
use serde::Deserialize;

/// A profile registered in the running terminal emulator.
#[derive(Debug, PartialEq, Deserialize, Clone)]
pub struct Profile {
    pub name: String,
}

/// The capability handed to commands that talk to the terminal. The trait
/// exposes no mutations, so holding one cannot change terminal state.
pub trait TermControl {
    // List profiles registered in the terminal, in endpoint order.
    fn list_profiles(&self) -> Result<Vec<Profile>>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub struct StaticControl {
        profiles: Vec<Profile>,
    }

    impl StaticControl {
        pub fn new(names: Vec<&str>) -> Box<dyn TermControl> {
            let profiles = names
                .into_iter()
                .map(|name| Profile {
                    name: name.to_string(),
                })
                .collect();
            Box::new(StaticControl { profiles })
        }
    }

    impl TermControl for StaticControl {
        fn list_profiles(&self) -> Result<Vec<Profile>> {
            Ok(self.profiles.clone())
        }
    }
}
