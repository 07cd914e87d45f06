use std::path::{Path, PathBuf};

use ini::{Ini, Properties};
use tracing::debug;

use crate::error::{Error, Result};
use crate::profile::load::LoadProfile;
use crate::profile::SsoProfile;

mod keys {
    pub const ACCOUNT_ID: &str = "sso_account_id";
    pub const ROLE_NAME: &str = "sso_role_name";
}

/// Reads profiles from an AWS shared config file.
#[derive(Debug, Clone)]
pub struct IniProfileLoader {
    config_path: PathBuf,
}

impl IniProfileLoader {
    pub fn new<P: AsRef<Path>>(config_path: P) -> IniProfileLoader {
        IniProfileLoader {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }
}

fn find_section<'a>(config: &'a Ini, profile_name: &str) -> Option<&'a Properties> {
    let section = format!("profile {}", profile_name);
    config.section(Some(section.as_str())).or_else(|| {
        // the default profile is written as a bare `[default]` section
        (profile_name == "default")
            .then(|| config.section(Some("default")))
            .flatten()
    })
}

impl LoadProfile for IniProfileLoader {
    fn load_profile(&self, profile_name: &str) -> Result<SsoProfile> {
        if !self.config_path.is_file() {
            return Err(Error::ConfigMissing {
                path: self.config_path.clone(),
            });
        }

        let config = Ini::load_from_file(&self.config_path).map_err(|source| Error::ConfigInvalid {
            path: self.config_path.clone(),
            source,
        })?;

        let not_found = || Error::ProfileNotFound {
            profile: profile_name.to_string(),
            path: self.config_path.clone(),
        };

        let section = find_section(&config, profile_name).ok_or_else(not_found)?;
        let account_id = section.get(keys::ACCOUNT_ID).ok_or_else(not_found)?;
        let role_name = section.get(keys::ROLE_NAME).ok_or_else(not_found)?;
        debug!(
            "profile:{}, account_id:{}, role_name:{}",
            profile_name, account_id, role_name
        );

        Ok(SsoProfile {
            name: profile_name.to_string(),
            account_id: account_id.to_string(),
            role_name: role_name.to_string(),
        })
    }
}
