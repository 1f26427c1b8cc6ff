use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("{}", cfg.to_yaml()?);
        } else {
            info(format!("Config file: {}", Config::config_file().display()));
            info(format!("Roster file: {}", cfg.roster));
        }
    }
    Ok(())
}
