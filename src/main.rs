#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod enrich;
mod error;
mod fetch;
mod menu;
mod notify;
mod parse;
mod pipeline;

pub use error::Result;

use config::Config;

/// Posts today's lunch menu once. Meant to be started by a scheduler on workday mornings.
#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    log::info!("Menu run started at: {}", chrono::Local::now());

    let config = Config::from_env()?;
    log::debug!("using config: {config:#?}");

    if let Err(e) = pipeline::run(&config).await {
        log::error!("{e}");
        return Err(e.into());
    }
    log::info!("Menu posted");
    Ok(())
}
