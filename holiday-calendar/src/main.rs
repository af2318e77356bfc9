use std::process;

use anyhow::{Context, Result};
use holiday_calendar::config::Config;
use holiday_calendar::logging;

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let config = Config::load().context("loading configuration")?;
    logging::init(&config.logging.level);

    let window = holiday_calendar::configure(&config).context("invalid configuration")?;
    holiday_calendar::run(&config, &window.current_years());
    Ok(())
}
