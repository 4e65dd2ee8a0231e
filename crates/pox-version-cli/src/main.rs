mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use config::{OutputFormat, VersionConfig};

#[derive(Parser, Debug)]
#[command(name = "pox-version")]
#[command(about = "Parse, compare and match versions against ranges")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format, overrides pox-version.toml
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the parts of one or more versions
    Parse(commands::ParseArgs),

    /// Compare two versions
    Compare(commands::CompareArgs),

    /// Print the versions that satisfy a range
    Satisfies(commands::SatisfiesArgs),

    /// Sort versions by precedence
    Sort(commands::SortArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run() -> Result<u8> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = VersionConfig::load_from_cwd()?.unwrap_or_default();
    let format = args.format.unwrap_or(config.output.format);

    if args.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Parse(cmd) => commands::parse::execute(cmd, format),
        Commands::Compare(cmd) => commands::compare::execute(cmd, format),
        Commands::Satisfies(cmd) => commands::satisfies::execute(cmd, format),
        Commands::Sort(cmd) => commands::sort::execute(cmd, format, config.sort.skip_invalid),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
