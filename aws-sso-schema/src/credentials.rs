use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credentials {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// The record printed on stdout.
///
/// Credential fields keep the identity service's camelCase names while the
/// profile identity keeps the config file's snake_case names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRecord {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: String,
    #[serde(rename = "account_id")]
    pub account_id: String,
    #[serde(rename = "role_name")]
    pub role_name: String,
}

impl CredentialsRecord {
    pub fn new(credentials: Credentials, account_id: &str, role_name: &str) -> CredentialsRecord {
        CredentialsRecord {
            expiration: credentials.expires_at.to_rfc3339(),
            access_key_id: credentials.access_key_id,
            secret_access_key: credentials.secret_access_key,
            session_token: credentials.session_token,
            account_id: account_id.to_string(),
            role_name: role_name.to_string(),
        }
    }
}
