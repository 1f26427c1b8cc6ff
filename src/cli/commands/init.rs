use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config directory, configuration file and sample roster.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;
    success("Initialization completed.");
    Ok(())
}
