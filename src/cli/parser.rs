use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsheet
/// CLI application to build monthly shift timesheets
#[derive(Parser)]
#[command(
    name = "shiftsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build monthly shift timesheets: work-norm grids with Excel import and template export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override roster file path
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and a sample roster
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Render the work-norm grid for a month
    Show {
        /// Month to display (YYYY-MM). Defaults to the current month.
        #[arg(long, short)]
        month: Option<String>,

        /// Pre-fill the grid from a spreadsheet before rendering
        #[arg(long = "from", value_name = "FILE")]
        from: Option<String>,
    },

    /// Set the hours for one employee on one day
    Set {
        /// Month (YYYY-MM). Defaults to the current month.
        #[arg(long, short)]
        month: Option<String>,

        /// Employee roster id or exact display name
        #[arg(long, short)]
        employee: String,

        /// Day of the month (1..31)
        #[arg(long, short)]
        day: u32,

        /// Hours value (0..24, halves allowed)
        #[arg(long)]
        hours: f64,
    },

    /// Import hours from a spreadsheet and show the resulting grid
    Import {
        /// Spreadsheet to import (.xlsx or .xls)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Target month (YYYY-MM). Defaults to the current month.
        #[arg(long, short)]
        month: Option<String>,

        /// Print the import report as JSON instead of rendering the grid
        #[arg(long)]
        json: bool,
    },

    /// Export a blank timesheet template for external filling
    Template {
        /// Month (YYYY-MM). Defaults to the current month.
        #[arg(long, short)]
        month: Option<String>,

        /// Output file path (default: timesheet_YYYY-MM.xlsx)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
