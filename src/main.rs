//! folioterm binary entry point.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "folioterm",
    version,
    about = "Interactive portfolio terminal for your shell"
)]
struct Cli {
    /// Transcript store path (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Start with an in-memory transcript and do not persist it
    #[arg(long)]
    fresh: bool,

    /// Disable the placeholder typing animation
    #[arg(long)]
    no_animation: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the persisted transcript
    Wipe,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Wipe) => commands::wipe::handle(cli.store),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "folioterm", &mut io::stdout());
            Ok(())
        }
        None => commands::run::handle(cli.store, cli.fresh, cli.no_animation),
    }
}
