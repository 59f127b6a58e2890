use anyhow::Context;
use log::info;

mod config;
mod error;
mod session;

fn main() -> anyhow::Result<()> {
    crate::config::log::init();

    let app_config = crate::config::app::AppConfig::new().context("Loading configuration")?;
    let saved = session::run(&app_config).context("Running edit session")?;

    info!("Saved {} {}", saved.first_name, saved.last_name);
    Ok(())
}
