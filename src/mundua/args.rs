use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mundua::model::Status;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mundua")]
#[command(about = "Track visited and planned countries from the command line", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also: MUNDUA_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List countries, optionally filtered by a search term
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring match on the name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Set the visiting status of a country
    #[command(alias = "st")]
    Status {
        /// Country name (exact match)
        name: String,

        /// New status
        #[arg(value_enum)]
        status: Status,
    },

    /// Set the trip date of a visited or planned country
    Date {
        /// Country name (exact match)
        name: String,

        /// Date in YYYY-MM-DD form
        date: NaiveDate,
    },

    /// Attach a photo to a visited country (max 5)
    #[command(alias = "ph")]
    Photo {
        /// Country name (exact match)
        name: String,

        /// Path to an image file
        file: PathBuf,
    },

    /// Show a country's photo sequence
    #[command(alias = "v")]
    Photos {
        /// Country name (exact match)
        name: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., seed-source, photo-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store directory (optional utility)
    Init,
}
