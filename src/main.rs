use clap::{Parser, Subcommand};
use git_latex::commands::*;
use git_latex::core::{config::Config, error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-latex")]
#[command(about = "Render git diffs and patch logs as color-coded LaTeX documents")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from FILE instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the diff between the working tree and a reference
    Diff(DiffArgs),
    /// Render the patch history of a revision, one section per commit
    Log(LogArgs),
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Diff(args) => execute_diff(args, &config)?,
        Commands::Log(args) => execute_log(args, &config)?,
    };

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
