mod command;
mod config;
mod notify;
mod render;

use std::borrow::Cow::{self, Owned};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::{Completer, Editor, Helper, Hinter, Validator};
use tracing::{error, info};

use crate::command::{Command, Flow, Session, handle_command, parse_command};

const HISTORY_FILE_NAME: &str = "history.txt";
const CLI_PROMPT: &str = "upi-qr> ";

#[derive(Clone, Debug, Parser)]
#[command(name = "upi-qr-cli", version)]
#[command(about = "Generate UPI payment QR codes")]
struct Args {
    /// Path to the data directory, holding the shell history and logs
    #[arg(short, long, default_value = "~/.upi-qr")]
    pub data_dir: String,

    /// Path to a TOML configuration file [default: upi-qr.toml, when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, in the env filter format
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Run a single command instead of the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Helper, Completer, Hinter, Validator)]
pub(crate) struct CliHelper {
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
}

impl Highlighter for CliHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

fn expand_path(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(stripped) => dirs::home_dir()
            .map(|home| home.join(stripped))
            .ok_or_else(|| anyhow!("Could not find home directory")),
        None => Ok(PathBuf::from(path)),
    }
}

fn run_interactive_mode(data_dir: &Path, mut session: Session) -> Result<()> {
    let history_file = data_dir.join(HISTORY_FILE_NAME);

    let rl = &mut Editor::new()?;
    rl.set_helper(Some(CliHelper {
        hinter: HistoryHinter {},
    }));

    if rl.load_history(&history_file).is_err() {
        info!("No history found");
    }

    println!("UPI QR generator interactive mode");
    println!("Type 'help' for available commands or 'exit' to quit");

    loop {
        match rl.readline(CLI_PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str())?;

                let command = match parse_command(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };
                match handle_command(&mut session, command) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue | Flow::Rejected) => {}
                    Err(e) => println!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history_file) {
        error!("Failed to save history: {e}");
    }

    println!("Goodbye!");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = expand_path(&args.data_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    upi_qr_core::init_logging(&data_dir, args.log_filter)?;

    let config_file = config::resolve_config_file(args.config.as_deref())?;
    match &config_file {
        Some(config_file) => info!("Using config file: {}", config_file.display()),
        None => info!("Starting without config file"),
    }
    let config = config::load_config(config_file.as_deref())?;
    let mut session = Session::new(config);

    match args.command {
        Some(command) => {
            if handle_command(&mut session, command)? == Flow::Rejected {
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_interactive_mode(&data_dir, session),
    }
}
