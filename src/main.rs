//! # pokeline Main Entry Point

use anyhow::{bail, Context, Result};
use pokeline::cmd_args::CommandLineArgs;
use pokeline::config::{self, AppConfig};
use pokeline::dex::io::{TerminalEventStream, TerminalRenderStream};
use pokeline::{logging, AppController, HttpPokeApi};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    logging::init(cmd_args.log_file())?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("pokeline needs an interactive terminal");
    }

    let profile_path = config::get_profile_path();
    let config = AppConfig::load(&profile_path, cmd_args.profile())?
        .with_overrides(cmd_args.base_url(), cmd_args.page_size());
    tracing::info!(
        "Using profile '{}' from '{}': {}",
        cmd_args.profile(),
        profile_path,
        config.base_url
    );

    let api = HttpPokeApi::new(&config.base_url, config.request_timeout)
        .context("Failed to create HTTP client")?;

    let mut app = AppController::with_io_streams(
        &config,
        api,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    if let Some(user) = cmd_args.user() {
        app.sign_in(user);
    }

    app.run().await?;

    println!("Thanks for using pokeline!");
    Ok(())
}
