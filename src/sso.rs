use async_trait::async_trait;

use crate::error::Result;
use crate::token::AccessToken;

pub mod aws_sdk;

/// Outcome of presenting a token to the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCheck {
    Accepted,
    Rejected(String),
}

/// Role credentials as the identity service returns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    /// Milliseconds since the Unix epoch.
    pub expiration: i64,
}

#[async_trait]
pub trait SsoPortal {
    /// Lists accounts with the token. A service error is a rejection; only a
    /// failure to reach the service is returned as `Err`.
    async fn check_token(&self, token: &AccessToken) -> Result<TokenCheck>;

    async fn role_credentials(
        &self,
        token: &AccessToken,
        account_id: &str,
        role_name: &str,
    ) -> Result<RoleCredentials>;
}
