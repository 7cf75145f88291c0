//! CLI frontend for the Farhome dice engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fh",
    about = "Farhome dice roller",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice formula such as 3s2e4w
    Roll {
        /// The formula to roll
        formula: String,

        /// Flavor text shown with the roll
        #[arg(short, long)]
        flavor: Option<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Positions of dice to reroll after the first roll (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        reroll: Vec<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Handle a chat message such as "/fh 3s2e # Attack"
    Chat {
        /// The chat message
        message: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the dice pool a formula describes without rolling it
    Parse {
        /// The formula to parse
        formula: String,
    },

    /// List every die and its faces
    Dice,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            formula,
            flavor,
            seed,
            reroll,
            output,
        } => commands::roll::run(&formula, flavor, seed, &reroll, output),
        Commands::Chat {
            message,
            seed,
            output,
        } => commands::chat::run(&message, seed, output),
        Commands::Parse { formula } => commands::parse::run(&formula),
        Commands::Dice => commands::dice::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
