use crate::export::ExportFormat;
use crate::models::report::DailyModule;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for shiftreport
#[derive(Parser)]
#[command(
    name = "shiftreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily activity report checker: downtime, shift counters and stock entries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Row collection addressed by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RowGroup {
    Stops,
    Vibrator,
    Liaison,
    Stock,
    /// Daily report, first module
    Module1,
    /// Daily report, second module
    Module2,
}

impl RowGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowGroup::Stops => "stops",
            RowGroup::Vibrator => "vibrator",
            RowGroup::Liaison => "liaison",
            RowGroup::Stock => "stock",
            RowGroup::Module1 => "module1",
            RowGroup::Module2 => "module2",
        }
    }

    /// Module addressed in a daily report file, if any.
    pub fn daily_module(&self) -> Option<DailyModule> {
        match self {
            RowGroup::Module1 => Some(DailyModule::Module1),
            RowGroup::Module2 => Some(DailyModule::Module2),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Create an empty report file (.yml, .yaml or .json)
    New {
        file: String,

        #[arg(long, help = "Report date (YYYY-MM-DD or DD/MM/YYYY)")]
        date: Option<String>,

        #[arg(
            long = "previous-end",
            help = "Previous day's final vibrator reading (3rd shift end)"
        )]
        previous_end: Option<String>,

        #[arg(long, help = "Create a two-module daily stop report instead")]
        daily: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Recalculate a report and show totals and errors
    Check {
        file: String,

        #[arg(long, help = "Fail when the report cannot be submitted")]
        strict: bool,
    },

    /// Append a blank row to a group
    Add {
        file: String,

        #[arg(long, value_enum)]
        group: RowGroup,
    },

    /// Set one field of a row (dependent stock fields are reset)
    Set {
        file: String,

        #[arg(long, value_enum)]
        group: RowGroup,

        #[arg(long, help = "Row id")]
        row: String,

        #[arg(
            long,
            help = "stops/modules: duration|nature; counters: shift|start|end; stock: shift|park|type|quantity|start-time"
        )]
        field: String,

        #[arg(long, help = "New value (empty or 'none' clears a selection)")]
        value: String,
    },

    /// Delete a row
    Del {
        file: String,

        #[arg(long, value_enum)]
        group: RowGroup,

        #[arg(long, help = "Row id")]
        row: String,
    },

    /// Export rows and validation state
    Export {
        file: String,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Totals of a two-module daily stop report
    Daily { file: String },
}
