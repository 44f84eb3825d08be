use std::{io::IsTerminal, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use ledger::{Ledger, Outcome, StorageLocation};

use crate::{
    error::{AppError, Result},
    form::TerminalForm,
    render::Theme,
    settings::Settings,
};

mod error;
mod form;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "bud")]
#[command(about = "tool to manage your money and brain")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the ledger (defaults to `$XDG_DATA_HOME`).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log filter level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all entries
    Ls,
    /// Create a new entry
    Add,
    /// Edit an entry by its index
    Edit {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Delete an entry by its index
    Delete {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Remove all entries
    Flush,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cancelled) => {
            eprintln!("{}", AppError::Cancelled);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = settings::load(&cli)?;
    init_tracing(&settings);

    let location = StorageLocation::resolve(settings.data_dir.clone())?;
    tracing::debug!(path = %location.file_path().display(), "using ledger file");
    let ledger = Ledger::builder().location(location).build()?;

    match cli.command {
        Command::Ls => {
            let listing = ledger.list()?;
            if listing.is_empty() {
                println!("no entries found");
                return Ok(());
            }
            let theme = if std::io::stdout().is_terminal() {
                Theme::default()
            } else {
                Theme::plain()
            };
            print!("{}", render::listing(&listing, &settings.currency, &theme));
        }
        Command::Add => {
            let mut form = TerminalForm::new(&settings.currency);
            if let Outcome::Cancelled = ledger.add(&mut form)? {
                return Err(AppError::Cancelled);
            }
        }
        Command::Edit { index } => {
            let mut form = TerminalForm::new(&settings.currency);
            if let Outcome::Cancelled = ledger.edit(&index, &mut form)? {
                return Err(AppError::Cancelled);
            }
        }
        Command::Delete { index } => {
            let (index, _) = ledger.delete(&index)?;
            println!("entry {index} deleted");
        }
        Command::Flush => {
            ledger.flush()?;
            println!("all entries removed");
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "bud={level},ledger={level}",
            level = settings.log_level
        ))
        .try_init();
}
