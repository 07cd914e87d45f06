use std::io::{self, Write};

use aws_sso_schema::credentials::CredentialsRecord;

use crate::error::Result;
use crate::handler::{into_variables, HandleCredentials, Variable};

/// Single-quotes `value`; an embedded `'` becomes `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Prints POSIX shell statements, for `eval "$(aws-sso -p dev --format export)"`.
pub struct ExportCredentialsHandler;

impl ExportCredentialsHandler {
    pub fn write<W: Write>(&self, out: &mut W, record: &CredentialsRecord) -> Result<()> {
        for Variable { name, value } in into_variables(record) {
            if let Some(value) = value {
                writeln!(out, "export {}={}", name, shell_quote(value))?;
            } else {
                writeln!(out, "unset {}", name)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl HandleCredentials for ExportCredentialsHandler {
    fn handle_credentials(&self, record: &CredentialsRecord) -> Result<()> {
        self.write(&mut io::stdout().lock(), record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_export_lines() {
        let record = CredentialsRecord {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: "session".to_string(),
            expiration: "2023-11-14T22:13:20+00:00".to_string(),
            account_id: "111122223333".to_string(),
            role_name: "Admin".to_string(),
        };

        let mut out = Vec::new();
        ExportCredentialsHandler.write(&mut out, &record).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "unset AWS_PROFILE",
                "export AWS_ACCESS_KEY_ID='AKIAEXAMPLE'",
                "export AWS_SECRET_ACCESS_KEY='secret'",
                "export AWS_SESSION_TOKEN='session'",
                "export AWS_SESSION_EXPIRATION='2023-11-14T22:13:20+00:00'",
            ]
        );
    }

    #[test]
    fn shell_metacharacters_stay_literal() {
        assert_eq!(shell_quote(r#"a"b$(rm -rf ~)`id`"#), r#"'a"b$(rm -rf ~)`id`'"#);
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}
