use serde::{Deserialize, Serialize};

/// A token record as the AWS CLI writes it under `~/.aws/sso/cache/*.json`.
///
/// Every field is optional: the same directory also holds client registration
/// records, which carry an `expiresAt` but no `accessToken`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedTokenRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,
}

impl CachedTokenRecord {
    /// Returns `(accessToken, expiresAt)` when both are present.
    pub fn candidate(&self) -> Option<(&str, &str)> {
        match (self.access_token.as_deref(), self.expires_at.as_deref()) {
            (Some(token), Some(expires_at)) => Some((token, expires_at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cli_token_file() {
        let json = r#"{
            "startUrl": "https://example.awsapps.com/start",
            "region": "eu-west-1",
            "accessToken": "tok1",
            "expiresAt": "2030-01-01T00:00:00Z"
        }"#;
        let record: CachedTokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.candidate(), Some(("tok1", "2030-01-01T00:00:00Z")));
        assert_eq!(record.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn client_registration_is_not_a_candidate() {
        let json = r#"{"clientId": "abc", "clientSecret": "xyz", "expiresAt": "2030-01-01T00:00:00Z"}"#;
        let record: CachedTokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.candidate(), None);
    }
}
