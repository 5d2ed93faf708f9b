use std::fs;

use anyhow::{Context, Result};
use structure_menu::{cli::Config, FileStorage, Machine, StdConsole};

fn main() -> Result<()> {
    let config = Config::from_args();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "could not create data directory {}",
            config.data_dir.display()
        )
    })?;
    log::info!("keeping structures in {}", config.data_dir.display());

    let storage = FileStorage::new(&config.data_dir);
    let mut machine = Machine::new(storage, StdConsole::new()).with_color(config.color);
    machine.run_until_stopped();

    Ok(())
}
