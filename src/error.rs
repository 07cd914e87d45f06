use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is terminal for a CLI invocation, except a rejected token
/// which the resolver turns into one login and one retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file does not exist: {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("config file {} could not be parsed", path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("profile \"{profile}\" with sso_account_id and sso_role_name not found in {}", path.display())]
    ProfileNotFound { profile: String, path: PathBuf },

    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("cache file {} is corrupt: {reason}", path.display())]
    CacheFileCorrupt { path: PathBuf, reason: String },

    #[error("sso login for profile \"{profile}\" failed: {reason}")]
    LoginFailed { profile: String, reason: String },

    #[error("unable to retrieve an SSO access token for profile \"{profile}\": {reason}")]
    TokenResolutionFailed { profile: String, reason: String },

    #[error("unable to get role credentials for {role_name} in {account_id}: {reason}")]
    CredentialExchangeFailed {
        account_id: String,
        role_name: String,
        reason: String,
    },

    #[error("{operation} could not reach the identity service: {reason}")]
    ServiceUnavailable {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation}: no region configured for the SSO portal; pass --region or set AWS_REGION")]
    RegionMissing { operation: &'static str },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        use Error::*;
        match self {
            ConfigMissing { .. } => "ConfigMissing",
            ConfigInvalid { .. } => "ConfigInvalid",
            ProfileNotFound { .. } => "ProfileNotFound",
            DirectoryNotFound { .. } => "DirectoryNotFound",
            CacheFileCorrupt { .. } => "CacheFileCorrupt",
            LoginFailed { .. } => "LoginFailed",
            TokenResolutionFailed { .. } => "TokenResolutionFailed",
            CredentialExchangeFailed { .. } => "CredentialExchangeFailed",
            ServiceUnavailable { .. } => "ServiceUnavailable",
            RegionMissing { .. } => "RegionMissing",
            Io(_) => "Io",
        }
    }
}
