//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use super::commands;
use problint::output::OutputMode;

/// problint - Checks contest problem sets
#[derive(Parser, Debug)]
#[command(
    name = "problint",
    version,
    about = "Checks contest problem sets",
    long_about = "Runs a set of named rules against the task statements, reference \
                  solutions and test inputs of one contest round.\n\n\
                  A document can opt out of a rule with a `%skiptest <rule>` line."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run rules against a problem set
    Check(CheckArgs),

    /// List every rule with its severity and requirements
    Rules {
        /// Contest configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory with task statements
    #[arg(long, value_name = "DIR")]
    pub tasks: Option<PathBuf>,

    /// Directory with reference solutions
    #[arg(long, value_name = "DIR")]
    pub solutions: Option<PathBuf>,

    /// Directory with test inputs (one subdirectory per task number)
    #[arg(long, value_name = "DIR")]
    pub inputs: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Rules to leave out
    #[arg(short, long, value_name = "RULE", num_args = 1.., conflicts_with = "run_only")]
    pub skip: Vec<String>,

    /// Run only these rules, in this order
    #[arg(short, long, value_name = "RULE", num_args = 1..)]
    pub run_only: Vec<String>,

    /// Contest configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

const fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check(args)) => commands::check(&args, output_mode),
        Some(Command::Rules { config }) => commands::rules(config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("problint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("problint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'problint --help' for usage");
                println!("Run 'problint check --tasks <DIR>' to get started");
            }
            Ok(())
        },
    }
}
