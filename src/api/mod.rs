pub mod github;

use anyhow::Result;

/// A repository as the remote api reports it.
#[derive(Debug, PartialEq, Clone)]
pub struct RemoteRepo {
    pub name: String,
    pub web_url: String,
}

pub trait Provider {
    // List all repos under an org, in api order, crossing all pages.
    fn list_org_repos(&self, org: &str) -> Result<Vec<RemoteRepo>>;
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;

    use anyhow::bail;

    use super::*;

    pub struct StaticProvider {
        orgs: HashMap<String, Vec<RemoteRepo>>,
    }

    impl StaticProvider {
        pub fn new(orgs: Vec<(&str, Vec<(&str, &str)>)>) -> Box<dyn Provider> {
            let p = StaticProvider {
                orgs: orgs
                    .into_iter()
                    .map(|(org, repos)| {
                        (
                            org.to_string(),
                            repos
                                .into_iter()
                                .map(|(name, url)| RemoteRepo {
                                    name: name.to_string(),
                                    web_url: url.to_string(),
                                })
                                .collect(),
                        )
                    })
                    .collect(),
            };
            Box::new(p)
        }
    }

    impl Provider for StaticProvider {
        fn list_org_repos(&self, org: &str) -> Result<Vec<RemoteRepo>> {
            match self.orgs.get(org) {
                Some(repos) => Ok(repos.clone()),
                None => bail!("Could not find org {org}"),
            }
        }
    }
}
