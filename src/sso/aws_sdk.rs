use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sso::error::{DisplayErrorContext, SdkError};
use aws_types::region::Region;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sso::{RoleCredentials, SsoPortal, TokenCheck};
use crate::token::AccessToken;

/// The AWS SSO portal API through the AWS SDK. Its calls are authorized by
/// the access token alone, so no AWS credentials are needed.
#[derive(Debug, Clone)]
pub struct AwsSdkSsoPortal {
    client: aws_sdk_sso::Client,
}

impl AwsSdkSsoPortal {
    /// Uses the SDK's default region chain unless `region_name` is given.
    pub async fn load(region_name: Option<&str>) -> AwsSdkSsoPortal {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region_name) = region_name {
            loader = loader.region(Region::new(region_name.to_string()));
        }

        let config = loader.load().await;
        AwsSdkSsoPortal::from(aws_sdk_sso::Client::new(&config))
    }

    /// Without a region the SDK fails at endpoint resolution, which reads
    /// like a network problem. Report it before any call is made.
    fn ensure_region(&self, operation: &'static str) -> Result<()> {
        if self.client.config().region().is_some() {
            Ok(())
        } else {
            Err(Error::RegionMissing { operation })
        }
    }
}

impl From<aws_sdk_sso::Client> for AwsSdkSsoPortal {
    fn from(client: aws_sdk_sso::Client) -> Self {
        AwsSdkSsoPortal { client }
    }
}

#[async_trait]
impl SsoPortal for AwsSdkSsoPortal {
    async fn check_token(&self, token: &AccessToken) -> Result<TokenCheck> {
        const OPERATION: &str = "list-accounts";
        self.ensure_region(OPERATION)?;

        let result = self
            .client
            .list_accounts()
            .access_token(token.as_str())
            .max_results(1)
            .send()
            .await;

        let unavailable = |reason: String| Error::ServiceUnavailable {
            operation: OPERATION,
            reason,
        };

        match result {
            Ok(_) => Ok(TokenCheck::Accepted),
            // a server-side fault says nothing about the token, and a login
            // would not fix it
            Err(SdkError::ServiceError(e)) if e.raw().status().as_u16() >= 500 => {
                Err(unavailable(format!(
                    "HTTP {}: {}",
                    e.raw().status().as_u16(),
                    e.err()
                )))
            }
            Err(SdkError::ServiceError(e)) => {
                debug!("list-accounts rejected the token: {:?}", e.err());
                Ok(TokenCheck::Rejected(e.err().to_string()))
            }
            Err(e) => Err(unavailable(DisplayErrorContext(&e).to_string())),
        }
    }

    async fn role_credentials(
        &self,
        token: &AccessToken,
        account_id: &str,
        role_name: &str,
    ) -> Result<RoleCredentials> {
        self.ensure_region("get-role-credentials")?;

        let failed = |reason: String| Error::CredentialExchangeFailed {
            account_id: account_id.to_string(),
            role_name: role_name.to_string(),
            reason,
        };

        let output = self
            .client
            .get_role_credentials()
            .access_token(token.as_str())
            .account_id(account_id)
            .role_name(role_name)
            .send()
            .await
            .map_err(|e| failed(DisplayErrorContext(&e).to_string()))?;

        let creds = output
            .role_credentials
            .ok_or_else(|| failed("get-role-credentials didn't return a credential".to_string()))?;

        let missing = |field: &str| failed(format!("{} is missing", field));
        Ok(RoleCredentials {
            access_key_id: creds
                .access_key_id
                .ok_or_else(|| missing("accessKeyId"))?,
            secret_access_key: creds
                .secret_access_key
                .ok_or_else(|| missing("secretAccessKey"))?,
            session_token: creds
                .session_token
                .ok_or_else(|| missing("sessionToken"))?,
            expiration: creds.expiration,
        })
    }
}
