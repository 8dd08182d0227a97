use std::process;

mod registry;
mod utils;

use utils::BotPaths;

type Error = Box<dyn std::error::Error + Send + Sync>;

fn run() -> Result<(), Error> {
    let paths = BotPaths::from_env();
    log::info!(
        "Updating commands from {} into {}",
        paths.commands_dir.display(),
        paths.entry_file.display()
    );

    let generation = registry::update(&paths)?;
    if !generation.entry_patched {
        log::info!(
            "Declared {} module(s), command list not updated",
            generation.modules.len()
        );
    }

    Ok(())
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Failed to update commands: {}", e);
        process::exit(1);
    }
}
