// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod commands;
mod logging;

fn main() -> Result<()> {
    // No logger to report through until init succeeds.
    if let Err(e) = logging::init() {
        eprintln!("estore: {e}");
        std::process::exit(1);
    }
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::CheckAuth { config } => commands::check_auth(config.as_deref())?,
        Commands::ImportCategories { file } => commands::import_categories(file)?,
    }

    Ok(())
}
