use aws_sso_schema::credentials::CredentialsRecord;

use crate::error::Result;

pub mod export;
pub mod json;

pub trait HandleCredentials {
    fn handle_credentials(&self, record: &CredentialsRecord) -> Result<()>;
}

struct Variable<'a> {
    name: &'a str,
    value: Option<&'a str>,
}

fn into_variables(record: &CredentialsRecord) -> Vec<Variable> {
    fn v<'a>(name: &'a str, value: Option<&'a str>) -> Variable<'a> {
        Variable { name, value }
    }

    vec![
        // for AWS SDK, aws-cli
        v("AWS_PROFILE", None),
        v("AWS_ACCESS_KEY_ID", Some(record.access_key_id.as_str())),
        v("AWS_SECRET_ACCESS_KEY", Some(record.secret_access_key.as_str())),
        v("AWS_SESSION_TOKEN", Some(record.session_token.as_str())),
        v("AWS_SESSION_EXPIRATION", Some(record.expiration.as_str())),
    ]
}
