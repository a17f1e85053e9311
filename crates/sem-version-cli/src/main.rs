mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::Context;
use config::{OutputFormat, SemvConfig};

#[derive(Parser, Debug)]
#[command(name = "semv")]
#[command(about = "Parse, compare and match semantic versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Output format (overrides semv.toml)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Accept partial versions such as "1" or "1.2"
    #[arg(long, global = true)]
    loose: bool,

    /// Path to a configuration file (default: semv.toml searched upward from the working directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the components of a version
    Parse {
        version: String,
    },

    /// Check whether a string is a valid version (exit status 1 if not)
    Valid {
        version: String,
    },

    /// Compare two versions
    Compare {
        left: String,
        right: String,
    },

    /// Check a version against a constraint such as ">= 1.2" or "~> 2.2.0" (exit status 1 if not satisfied)
    Satisfies {
        version: String,
        constraint: String,
    },

    /// Split a constraint into operator and version
    Split {
        constraint: String,
    },

    /// Sort versions by precedence
    Sort {
        /// Sort in descending order
        #[arg(short, long)]
        reverse: bool,

        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<i32> {
    let config = match &args.config {
        Some(path) => SemvConfig::load_file(path)?,
        None => SemvConfig::load_from_cwd()?.unwrap_or_default(),
    };

    let ctx = Context {
        format: args.format.unwrap_or(config.output.format),
        loose: args.loose || config.parse.loose,
    };
    log::debug!("Running {:?} with {:?}", args.command, ctx);

    match &args.command {
        Commands::Parse { version } => commands::parse(&ctx, version),
        Commands::Valid { version } => commands::valid(&ctx, version),
        Commands::Compare { left, right } => commands::compare(&ctx, left, right),
        Commands::Satisfies { version, constraint } => commands::satisfies(&ctx, version, constraint),
        Commands::Split { constraint } => commands::split(&ctx, constraint),
        Commands::Sort { reverse, versions } => commands::sort(&ctx, versions, *reverse),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
