use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aws_sso::app::Cli;
use aws_sso::Error;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.default_log_filter());

    match cli.execute().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("error:{:?}", e);
            let kind = e.downcast_ref::<Error>().map(Error::kind).unwrap_or("Error");
            eprintln!("{}: {:#}", kind, e);
            ExitCode::FAILURE
        }
    }
}
