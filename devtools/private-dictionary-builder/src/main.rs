//! A simple application for maintaining private DICOM dictionaries.
//!
//! ### How to use
//!
//! Run the application with one of the following subcommands:
//!
//! - **`check`**: validate private dictionary files
//! - **`rust`**: generate the Rust module of a built-in vendor dictionary
//!
//! Dictionary files are JSON objects
//! with a `privateCreator` key and one `pattern: name` pair per attribute,
//! as read by `dicom_dictionary_private::file`.
//!
//! Please use the `--help` flag for the full usage information.

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod check;
mod rust;

/// DICOM private dictionary builder
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Verbose mode
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: BuilderSubcommand,
}

#[derive(Debug, Subcommand)]
enum BuilderSubcommand {
    #[command(name("check"))]
    Check(check::CheckApp),
    #[command(name("rust"))]
    Rust(rust::RustApp),
}

fn main() {
    let app = App::parse();

    // logs go to stderr, generated code may go to stdout
    let level = if app.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
            .with_writer(std::io::stderr)
            .finish(),
    )
    .unwrap_or_else(|e| {
        eprintln!("[ERROR] Could not set up global logging subscriber: {}", e);
    });

    let result = match app.command {
        BuilderSubcommand::Check(app) => check::run(app),
        BuilderSubcommand::Rust(app) => rust::run(app),
    };

    if let Err(e) = result {
        tracing::error!("{:?}", e);
        std::process::exit(-2);
    }
}
