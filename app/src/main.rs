#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ticketgen_core::Difficulty;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CheckInput, CheckStrategy, CommandStrategy, ExtractInput, ExtractStrategy, HintInput,
    HintStrategy, InfoStrategy, InitStrategy, ModelsInput, ModelsStrategy, PracticeInput,
    PracticeStrategy, TicketInput, TicketStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "ticketgen")]
#[command(about = "IT support ticket practice with LLM-generated tickets", long_about = None)]
struct Cli {
    /// Path to config file (default: ~/ticketgen/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration file
    Init,
    /// Show configuration
    Info,
    /// List text models available from the provider
    Models {
        /// Include vision and embedding models
        #[arg(long)]
        all: bool,
    },
    /// Generate one practice ticket
    Ticket {
        /// simple, medium or complex
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// Print the ticket as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get hints on a proposed solution
    Hint {
        #[arg(long)]
        issue: String,

        #[arg(long)]
        solution: String,

        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Check whether a proposed solution would fix the issue
    Check {
        #[arg(long)]
        issue: String,

        #[arg(long)]
        solution: String,

        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Extract a ticket from raw model output (file or stdin), offline
    Extract {
        file: Option<PathBuf>,
    },
    /// Interactive practice session
    Practice {
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Commands::Init => InitStrategy.execute(config).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Models { all } => ModelsStrategy.execute(ModelsInput { config, all }).await,
        Commands::Ticket {
            difficulty,
            model,
            json,
        } => {
            TicketStrategy
                .execute(TicketInput {
                    config,
                    difficulty,
                    model,
                    json,
                })
                .await
        }
        Commands::Hint {
            issue,
            solution,
            difficulty,
            model,
        } => {
            HintStrategy
                .execute(HintInput {
                    config,
                    issue,
                    solution,
                    difficulty,
                    model,
                })
                .await
        }
        Commands::Check {
            issue,
            solution,
            model,
        } => {
            CheckStrategy
                .execute(CheckInput {
                    config,
                    issue,
                    solution,
                    model,
                })
                .await
        }
        Commands::Extract { file } => ExtractStrategy.execute(ExtractInput { file }).await,
        Commands::Practice { difficulty, model } => {
            PracticeStrategy
                .execute(PracticeInput {
                    config,
                    difficulty,
                    model,
                })
                .await
        }
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
