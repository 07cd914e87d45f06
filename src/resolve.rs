use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::login::Login;
use crate::sso::{SsoPortal, TokenCheck};
use crate::token::{AccessToken, FindToken};

/// Logins allowed per resolution. More than one would risk prompting the
/// user in a loop.
const LOGIN_RETRIES: usize = 1;

enum Attempt {
    Verified(AccessToken),
    Unverified(String),
}

/// Obtains an access token that the identity service currently accepts.
pub struct TokenResolver<'a, F, P, L> {
    finder: &'a F,
    portal: &'a P,
    login: &'a L,
}

impl<'a, F, P, L> TokenResolver<'a, F, P, L>
where
    F: FindToken,
    P: SsoPortal + Send + Sync,
    L: Login + Send + Sync,
{
    pub fn new(finder: &'a F, portal: &'a P, login: &'a L) -> Self {
        Self {
            finder,
            portal,
            login,
        }
    }

    pub async fn resolve(&self, profile_name: &str) -> Result<AccessToken> {
        let mut logins = 0;
        loop {
            let reason = match self.attempt(profile_name).await? {
                Attempt::Verified(token) => return Ok(token),
                Attempt::Unverified(reason) => reason,
            };

            if logins == LOGIN_RETRIES {
                return Err(Error::TokenResolutionFailed {
                    profile: profile_name.to_string(),
                    reason,
                });
            }

            warn!("no usable SSO access token ({}), logging in", reason);
            self.login.login(profile_name).await?;
            logins += 1;
        }
    }

    async fn attempt(&self, profile_name: &str) -> Result<Attempt> {
        let token = match self.finder.find_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                return Ok(Attempt::Unverified(
                    "no unexpired token in the cache".to_string(),
                ))
            }
            // the login command creates the directory
            Err(Error::DirectoryNotFound { path }) => {
                return Ok(Attempt::Unverified(format!(
                    "cache directory {} does not exist",
                    path.display()
                )))
            }
            Err(e) => return Err(e),
        };

        debug!("verifying cached token");
        match self.portal.check_token(&token).await {
            Ok(TokenCheck::Accepted) => {
                info!("cached SSO access token is valid");
                Ok(Attempt::Verified(token))
            }
            Ok(TokenCheck::Rejected(reason)) => Ok(Attempt::Unverified(reason)),
            Err(e) => Err(Error::TokenResolutionFailed {
                profile: profile_name.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
