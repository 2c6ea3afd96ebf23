use crate::core::eligibility::ExclusionScope;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for wheelgauge
#[derive(Parser)]
#[command(
    name = "wheelgauge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record subway wheel diameters (Line 4 / Line 5) and find cars due for the 3-month 2mm reduction",
    long_about = None
)]
pub struct Cli {
    /// Override the record file path (useful for tests or a shared file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Addresses one row: `--id`, or the legacy line + car (+ date) key.
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    #[arg(long = "id", help = "Record id (see `list`)", conflicts_with_all = ["car", "date"])]
    pub id: Option<u64>,

    #[arg(long = "car", help = "Car number (with --line)")]
    pub car: Option<String>,

    #[arg(long = "date", help = "Modified date of the row, YYYYMMDD")]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the record file and the audit log
    Init,

    /// View or change the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "set-secret",
            value_name = "SECRET",
            help = "Set the secret required by edit/del (stored as a bcrypt hash)"
        )]
        set_secret: Option<String>,
    },

    /// Add a wheel diameter measurement
    Add {
        #[arg(long, short, help = "Line: 4 or 5 (default from config)")]
        line: Option<String>,

        #[arg(long = "car", help = "Car number")]
        car: String,

        #[arg(long = "diameter", help = "Wheel diameter in mm")]
        diameter: String,

        #[arg(long = "date", help = "Modified date, YYYYMMDD (default: today)")]
        date: Option<String>,

        #[arg(long = "modifier", help = "Who changed the diameter")]
        modifier: String,

        #[arg(
            long = "reason",
            help = "turned | three-month-reduction | other (default: turned)"
        )]
        reason: Option<String>,
    },

    /// List every row of a line
    List {
        #[arg(long, short)]
        line: Option<String>,
    },

    /// List the distinct car numbers of a line
    Cars {
        #[arg(long, short)]
        line: Option<String>,
    },

    /// Show every row recorded for one car
    History {
        #[arg(long, short)]
        line: Option<String>,

        #[arg(long = "car")]
        car: String,
    },

    /// Edit a row in place (requires the secret)
    Edit {
        #[arg(long, short, help = "Selected line; the edited row is moved to it")]
        line: Option<String>,

        #[command(flatten)]
        key: KeyArgs,

        #[arg(long = "new-car", help = "New car number")]
        new_car: Option<String>,

        #[arg(long = "diameter", help = "New wheel diameter")]
        diameter: Option<String>,

        #[arg(long = "new-date", help = "New modified date, YYYYMMDD")]
        new_date: Option<String>,

        #[arg(long = "modifier", help = "New modifier")]
        modifier: Option<String>,

        #[arg(long = "reason", help = "New reason")]
        reason: Option<String>,

        #[arg(long = "secret", help = "Secret (prompted when omitted)")]
        secret: Option<String>,
    },

    /// Delete a row (requires the secret)
    Del {
        #[arg(long, short)]
        line: Option<String>,

        #[command(flatten)]
        key: KeyArgs,

        #[arg(long = "secret", help = "Secret (prompted when omitted)")]
        secret: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Cars due for the 3-month 2mm reduction
    Due {
        #[arg(long, short)]
        line: Option<String>,

        #[arg(long = "date", help = "Reference date, YYYYMMDD (default: today)")]
        date: Option<String>,

        #[arg(long, value_enum, help = "Exclude reductions on this line only, or on any line")]
        scope: Option<ExclusionScope>,
    },

    /// Export the rows of a line
    Export {
        #[arg(long, short)]
        line: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "due", help = "Export only the rows due for reduction")]
        due: bool,

        #[arg(long = "date", requires = "due", help = "Reference date for --due")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the record file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,
    },
}
