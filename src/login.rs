use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

#[async_trait]
pub trait Login {
    /// Runs an interactive SSO login for the profile. May block on the user.
    async fn login(&self, profile_name: &str) -> Result<()>;
}

/// Runs `aws sso login --profile <name>`.
///
/// The child's stdout is sent to our stderr, so that the credentials record
/// stays the only thing written to stdout.
#[derive(Debug, Clone)]
pub struct AwsCliLogin {
    program: String,
}

impl AwsCliLogin {
    pub fn new<S: Into<String>>(program: S) -> AwsCliLogin {
        AwsCliLogin {
            program: program.into(),
        }
    }

    fn command(&self, profile_name: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(["sso", "login", "--profile", profile_name])
            .stdin(Stdio::inherit())
            .stdout(io::stderr())
            .stderr(Stdio::inherit());
        command
    }
}

#[async_trait]
impl Login for AwsCliLogin {
    async fn login(&self, profile_name: &str) -> Result<()> {
        info!("running {} sso login --profile {}", self.program, profile_name);
        let failed = |reason: String| Error::LoginFailed {
            profile: profile_name.to_string(),
            reason,
        };

        let status = self
            .command(profile_name)
            .status()
            .await
            .map_err(|e| failed(format!("unable to run {}: {}", self.program, e)))?;
        debug!("login exited with {}", status);

        if status.success() {
            Ok(())
        } else {
            Err(failed(format!("{} exited with {}", self.program, status)))
        }
    }
}
