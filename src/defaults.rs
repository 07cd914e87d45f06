use std::path::PathBuf;

pub const LOGIN_PROGRAM: &str = "aws";

fn aws_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aws"))
}

/// `~/.aws/config`
pub fn config_path() -> Option<PathBuf> {
    aws_dir().map(|dir| dir.join("config"))
}

/// `~/.aws/sso/cache`
pub fn cache_dir() -> Option<PathBuf> {
    aws_dir().map(|dir| dir.join("sso").join("cache"))
}
