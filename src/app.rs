use std::path::PathBuf;

use anyhow::Context;
use aws_sso_schema::credentials::CredentialsRecord;
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::defaults;
use crate::handler::export::ExportCredentialsHandler;
use crate::handler::json::JsonCredentialsHandler;
use crate::handler::HandleCredentials;
use crate::login::AwsCliLogin;
use crate::profile::load::ini_file::IniProfileLoader;
use crate::run::AwsSso;
use crate::sso::aws_sdk::AwsSdkSsoPortal;
use crate::token::CacheDirScanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// A single line of JSON.
    Json,
    /// POSIX shell `export` statements.
    Export,
}

/// Print temporary role credentials for an AWS SSO profile, logging in first
/// if the cached SSO access token is missing or no longer accepted.
#[derive(Parser, Debug)]
#[command(name = "aws-sso", version, about)]
pub struct Cli {
    /// Named profile for AWS SSO login.
    #[arg(short, long)]
    pub profile: String,

    /// AWS shared config file [default: ~/.aws/config]
    #[arg(long, env = "AWS_CONFIG_FILE", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SSO token cache directory [default: ~/.aws/sso/cache]
    #[arg(long, env = "AWS_SSO_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Program that provides `sso login --profile <name>`.
    #[arg(
        long,
        env = "AWS_SSO_LOGIN_PROGRAM",
        value_name = "PROGRAM",
        default_value = defaults::LOGIN_PROGRAM
    )]
    pub login_program: String,

    /// Region of the SSO portal. Falls back to the AWS SDK default region chain.
    #[arg(long)]
    pub region: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Log debug messages to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

enum Handler {
    Json(JsonCredentialsHandler),
    Export(ExportCredentialsHandler),
}

impl HandleCredentials for Handler {
    fn handle_credentials(&self, record: &CredentialsRecord) -> crate::Result<()> {
        use Handler::*;
        match self {
            Json(h) => h.handle_credentials(record),
            Export(h) => h.handle_credentials(record),
        }
    }
}

impl From<Format> for Handler {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Handler::Json(JsonCredentialsHandler),
            Format::Export => Handler::Export(ExportCredentialsHandler),
        }
    }
}

impl Cli {
    /// Filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "warn,aws_sso=debug"
        } else {
            "warn"
        }
    }

    pub async fn execute(self) -> anyhow::Result<()> {
        let config_path = self
            .config
            .or_else(defaults::config_path)
            .context("unable to locate the home directory for ~/.aws/config")?;
        let cache_dir = self
            .cache_dir
            .or_else(defaults::cache_dir)
            .context("unable to locate the home directory for ~/.aws/sso/cache")?;
        debug!(
            "config:{}, cache_dir:{}",
            config_path.display(),
            cache_dir.display()
        );

        let aws_sso = AwsSso::new(
            IniProfileLoader::new(config_path),
            CacheDirScanner::new(cache_dir),
            AwsSdkSsoPortal::load(self.region.as_deref()).await,
            AwsCliLogin::new(self.login_program),
            Handler::from(self.format),
        );
        aws_sso.run(&self.profile).await?;
        Ok(())
    }
}
