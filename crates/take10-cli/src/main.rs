//! CLI frontend for the take10 ability-score toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "take10",
    about = "take10 — dice, ability scores, and skills for tabletop characters",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice in NdS notation (e.g. 4d6, d20)
    Roll {
        /// Dice expression
        expr: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a set of ability scores
    Generate {
        /// Strategy name: Standard, Classic, or Heroic (default: Standard)
        strategy: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// How many score sets to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Strategy parameter as key=value (repeatable)
        #[arg(short, long = "param")]
        param: Vec<String>,

        /// JSON generation config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the available generation strategies
    Strategies,

    /// List skills and the ability that governs each
    Skills {
        /// Only show skills governed by this ability (e.g. DEX, wisdom)
        #[arg(short, long)]
        ability: Option<String>,
    },

    /// Show the ability that governs a skill
    Skill {
        /// Skill name (e.g. "Sleight of Hand", knowledge-arcana)
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Roll { expr, seed } => commands::roll::run(&expr, seed),
        Commands::Generate {
            strategy,
            seed,
            count,
            param,
            config,
            json,
        } => commands::generate::run(&commands::generate::GenerateArgs {
            strategy,
            seed,
            count,
            params: param,
            config,
            json,
        }),
        Commands::Strategies => commands::strategies::run(),
        Commands::Skills { ability } => commands::skills::list(ability.as_deref()),
        Commands::Skill { name } => commands::skills::show(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr. `--verbose` forces debug; otherwise `RUST_LOG` or warn.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
