use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("{content}");
        } else {
            messages::info("Nothing to do. Try `reqdesk config --print`.");
        }
    }
    Ok(())
}
