mod commands;
mod config;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use commands::{detect, edit, list, show, DetectArgs, EditArgs, ListArgs, ShowArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// apidocs CLI - inspect and edit the documentation fields of API documents
#[derive(Parser, Debug)]
#[command(name = "apidocs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the operations of a document
    List(ListArgs),

    /// Print the editable fields of one operation as JSON
    Show(ShowArgs),

    /// Update the editable fields of one operation
    Edit(EditArgs),

    /// Find the API document of a project directory
    Detect(DetectArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    match cli.command {
        Command::List(args) => list(args, &config, &cwd),
        Command::Show(args) => show(args, &config, &cwd),
        Command::Edit(args) => edit(args, &config, &cwd),
        Command::Detect(args) => detect(args, &config, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
