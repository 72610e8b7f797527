use crate::config::Preset;
use crate::models::language::Language;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rbells
/// Terminal bell board for a weekly school timetable
#[derive(Parser)]
#[command(
    name = "rbells",
    version = env!("CARGO_PKG_VERSION"),
    about = "School bell board: current lesson or break, time left and what comes next",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rbells/rbells.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Use a built-in timetable instead of the configuration file
    #[arg(global = true, long = "preset", value_enum)]
    pub preset: Option<Preset>,

    /// Override the display language from the configuration
    #[arg(global = true, long = "lang", value_enum)]
    pub lang: Option<Language>,

    /// Disable colors and terminal control sequences
    #[arg(global = true, long = "plain")]
    pub plain: bool,

    /// Print debug logs to stderr
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Build the timetable and report problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the current period once
    Now {
        /// Time of day to evaluate (HH:MM), default: now
        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,

        /// Date to evaluate (YYYY-MM-DD), default: today
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the snapshot as JSON")]
        json: bool,
    },

    /// Keep the board on screen, refreshed every second
    Watch {
        /// Stop after this many refreshes
        #[arg(long = "ticks")]
        ticks: Option<u64>,
    },

    /// Print the periods of one day
    Day {
        /// Weekday name (monday, вторник, ...), default: today
        #[arg(long = "weekday", conflicts_with = "date")]
        weekday: Option<String>,

        /// Use the weekday of this date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Print a summary of the whole week
    Week,
}
