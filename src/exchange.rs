use aws_sso_schema::credentials::{Credentials, CredentialsRecord};
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::profile::SsoProfile;
use crate::sso::{RoleCredentials, SsoPortal};
use crate::token::AccessToken;

/// Whole minutes from `now` until `expires_at`, negative once expired.
pub fn minutes_until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expires_at - now).num_minutes()
}

fn into_credentials(creds: RoleCredentials, profile: &SsoProfile) -> Result<Credentials> {
    let expires_at = Utc
        .timestamp_millis_opt(creds.expiration)
        .single()
        .ok_or_else(|| Error::CredentialExchangeFailed {
            account_id: profile.account_id().to_string(),
            role_name: profile.role_name().to_string(),
            reason: format!("expiration out of range: {}", creds.expiration),
        })?;

    Ok(Credentials {
        access_key_id: creds.access_key_id,
        secret_access_key: creds.secret_access_key,
        session_token: creds.session_token,
        expires_at,
    })
}

/// Trades a verified token for the profile's role credentials. Not retried:
/// the token was verified just before.
pub async fn exchange_for_role_credentials<P>(
    portal: &P,
    token: &AccessToken,
    profile: &SsoProfile,
) -> Result<CredentialsRecord>
where
    P: SsoPortal + Send + Sync,
{
    let creds = portal
        .role_credentials(token, profile.account_id(), profile.role_name())
        .await?;
    let credentials = into_credentials(creds, profile)?;

    let expires_at = credentials.expires_at();
    info!(
        account = profile.account_id(),
        role = profile.role_name(),
        expires = %expires_at.to_rfc3339(),
        "role credentials expire in {}m",
        minutes_until(expires_at, Utc::now())
    );

    Ok(CredentialsRecord::new(
        credentials,
        profile.account_id(),
        profile.role_name(),
    ))
}
