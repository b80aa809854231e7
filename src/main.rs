//! Layoutsmith - layout schema to React + Tailwind project generator
//!
//! Command-line front end for editing schema files and exporting them as
//! generated source trees or zip archives.

use clap::{Parser, Subcommand};
use layoutsmith::cli::{
    ClassesArgs, ComponentArgs, ExitCode, ExportArgs, GenerateArgs, InitArgs, ValidateArgs,
};
use layoutsmith::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Layoutsmith - generate React + Tailwind projects from layout schemas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new schema file
    Init(InitArgs),
    /// Add, remove, move, or list components
    Component(ComponentArgs),
    /// Validate a schema file
    Validate(ValidateArgs),
    /// Show the classes each component resolves to
    Classes(ClassesArgs),
    /// Write generated source files to a directory
    Generate(GenerateArgs),
    /// Package the generated project as a zip archive
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Init(args) => args.execute(),
        Command::Component(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Classes(args) => args.execute(),
        Command::Generate(args) => args.execute(),
        Command::Export(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code
        }
    };

    std::process::exit(code.code());
}
