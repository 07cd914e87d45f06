use std::io::{self, Write};

use aws_sso_schema::credentials::CredentialsRecord;

use crate::error::Result;
use crate::handler::HandleCredentials;

/// Prints the record as one line of JSON.
pub struct JsonCredentialsHandler;

impl JsonCredentialsHandler {
    pub fn write<W: Write>(&self, out: &mut W, record: &CredentialsRecord) -> Result<()> {
        serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl HandleCredentials for JsonCredentialsHandler {
    fn handle_credentials(&self, record: &CredentialsRecord) -> Result<()> {
        self.write(&mut io::stdout().lock(), record)
    }
}
