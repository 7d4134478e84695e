use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// eStore command-line tools.
#[derive(Parser)]
#[command(name = "estore", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Load and validate token issuer settings.
    ///
    /// `JWT_KEY`, `JWT_ISSUER`, `JWT_AUDIENCE` and `JWT_EXPIRY_IN_MINUTES`
    /// override values from the settings file.
    CheckAuth {
        /// Settings document (.json, .yaml or .yml) with a `JwtSettings` section.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Import categories from a JSON array and print their assigned ids.
    ImportCategories {
        /// JSON file of `{"categoryName": ..., "description": ...}` records.
        file: PathBuf,
    },
}
