use anyhow::Result;

mod utils;

mod cli;
mod config;
mod contact;


use cli::Commands;
use config::Config;

fn main() -> Result<()> {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(e) => e.exit(),
            Err(e) => return Err(e),
        },
    };

    env_logger::Builder::new()
        .filter_level(config.log_level_filter())
        .init();

    match config.command() {
        Some(Commands::Contact(command)) => contact::run(&config, command),
        Some(Commands::Reset { confirm }) => {
            if *confirm && utils::confirm()? {
                log::info!("Removing {}", config.database_path().display());
                std::fs::remove_file(config.database_path())?;
                Ok(())
            } else {
                anyhow::bail!("operation requires confirmation");
            }
        }
        None => anyhow::bail!("No command provided"),
    }
}
