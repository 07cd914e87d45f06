use crate::error::Result;
use crate::profile::SsoProfile;

pub mod ini_file;

pub trait LoadProfile {
    fn load_profile(&self, profile_name: &str) -> Result<SsoProfile>;
}
