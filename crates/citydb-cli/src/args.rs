use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citydb
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Query a colon-delimited city dataset, or serve it over HTTP"
)]
pub struct CliArgs {
    /// Path to the dataset (default: bundled RU.txt)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Lookup a city by GeoNames id
    City {
        /// GeoNames id (e.g. 524901)
        id: String,
    },

    /// Compare two cities by name
    Compare {
        name1: String,
        name2: String,

        /// Print the structured JSON result instead of the one-line verdict
        #[arg(long)]
        json: bool,
    },

    /// List cities in file order, one page at a time
    Cities {
        #[arg(long, default_value_t = 1)]
        page: i64,

        #[arg(long = "per-page", default_value_t = 5)]
        per_page: i64,
    },

    /// Suggest city names starting with a prefix (case-insensitive)
    Suggest {
        /// Prefix to match; empty lists every name
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
