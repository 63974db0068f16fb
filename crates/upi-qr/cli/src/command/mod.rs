use anyhow::anyhow;
use clap::{Parser, Subcommand};
use upi_qr_core::{Config, GeneratedPayment, LinkEncoder, PaymentForm};

use crate::{notify::ConsoleNotifier, render::TerminalRenderer};

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Exit the interactive shell (interactive mode only)
    #[command(hide = true)]
    Exit,

    /// Set the UPI ID field
    SetId {
        /// Payee UPI ID, e.g. merchant@bank
        upi_id: String,
    },

    /// Set the amount field. Omit the value to let the payer decide.
    SetAmount {
        /// Amount in rupees
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// Validate the current fields and show the payment QR code
    Submit {
        /// Print the generated payment as JSON instead of a QR code
        #[arg(long)]
        json: bool,
    },

    /// Show the current fields and the last generated payment
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Set both fields and submit in one step
    Generate {
        /// Payee UPI ID, e.g. merchant@bank
        upi_id: String,

        /// Amount in rupees. Leave out to let the payer decide.
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print the active configuration
    Config,
}

/// A single line typed in the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "upi-qr-cli", no_binary_name = true)]
pub(crate) struct ReplCommand {
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Parse a command line typed in the interactive shell
pub(crate) fn parse_command(input: &str) -> anyhow::Result<Command> {
    // Handle exit command specially so it works without clap's help noise
    if input.trim() == "exit" || input.trim() == "quit" {
        return Ok(Command::Exit);
    }

    let Some(args) = shlex::split(input) else {
        return Err(anyhow!("Failed to parse input string: {input}"));
    };

    ReplCommand::try_parse_from(args)
        .map(|repl| repl.command)
        .map_err(|e| anyhow!("Command parsing error: {e}"))
}

pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) encoder: LinkEncoder,
    pub(crate) form: PaymentForm,
}

impl Session {
    pub(crate) fn new(config: Config) -> Self {
        Session {
            encoder: LinkEncoder::from_config(&config),
            config,
            form: PaymentForm::new(),
        }
    }
}

/// Outcome of a handled command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    /// A submission was rejected; the user has been notified.
    Rejected,
    Exit,
}

pub(crate) fn handle_command(session: &mut Session, command: Command) -> anyhow::Result<Flow> {
    match command {
        Command::Exit => Ok(Flow::Exit),
        Command::SetId { upi_id } => {
            session.form.set_identifier(upi_id);
            Ok(Flow::Continue)
        }
        Command::SetAmount { amount } => {
            session.form.set_amount(amount.unwrap_or_default());
            Ok(Flow::Continue)
        }
        Command::Submit { json } => submit(session, json),
        Command::Show { json } => {
            if json {
                print_value(&serde_json::json!({
                    "input": session.form.raw_input(),
                    "state": session.form.state(),
                }))?;
                return Ok(Flow::Continue);
            }
            println!("UPI ID: {}", session.form.identifier());
            println!("Amount: {}", session.form.amount());
            match session.form.shown_payment() {
                Some(payment) => print_payment(session, payment)?,
                None => println!("No QR code generated yet"),
            }
            Ok(Flow::Continue)
        }
        Command::Generate {
            upi_id,
            amount,
            json,
        } => {
            session.form.set_identifier(upi_id);
            session.form.set_amount(amount.unwrap_or_default());
            submit(session, json)
        }
        Command::Config => {
            print_value(&session.config)?;
            Ok(Flow::Continue)
        }
    }
}

fn submit(session: &mut Session, json: bool) -> anyhow::Result<Flow> {
    if session
        .form
        .submit(&session.encoder, &ConsoleNotifier)
        .is_err()
    {
        return Ok(Flow::Rejected);
    }

    if let Some(payment) = session.form.shown_payment() {
        if json {
            print_value(payment)?;
        } else {
            print_payment(session, payment)?;
        }
    }
    Ok(Flow::Continue)
}

fn print_payment(session: &Session, payment: &GeneratedPayment) -> anyhow::Result<()> {
    let qr = session
        .form
        .render(&TerminalRenderer, &session.config.qr)
        .transpose()?
        .unwrap_or_default();
    println!("{qr}\n");
    println!("{}", payment.caption());
    println!("{}", payment.link);
    Ok(())
}

pub(crate) fn print_value<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    let serialized = serde_json::to_string_pretty(value)?;
    println!("{serialized}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use upi_qr_core::{FormState, default_config};

    use super::*;

    fn run(session: &mut Session, line: &str) -> Flow {
        let command = parse_command(line).unwrap();
        handle_command(session, command).unwrap()
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert!(matches!(parse_command("exit"), Ok(Command::Exit)));
        assert!(matches!(parse_command(" quit "), Ok(Command::Exit)));
    }

    #[test]
    fn test_parse_negative_amount() {
        let command = parse_command("set-amount -10").unwrap();
        assert!(matches!(command, Command::SetAmount { amount: Some(a) } if a == "-10"));

        let command = parse_command("generate merchant@bank --amount -5").unwrap();
        assert!(matches!(
            command,
            Command::Generate { amount: Some(a), .. } if a == "-5"
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("unknown").is_err());
        assert!(parse_command("set-id 'unterminated").is_err());
    }

    #[test]
    fn test_submit_flow() {
        let mut session = Session::new(default_config());

        assert_eq!(run(&mut session, "submit --json"), Flow::Rejected);
        assert_eq!(session.form.state(), &FormState::Idle);

        assert_eq!(run(&mut session, "set-id merchant@bank"), Flow::Continue);
        assert_eq!(run(&mut session, "set-amount 150"), Flow::Continue);
        assert_eq!(run(&mut session, "submit --json"), Flow::Continue);
        assert_eq!(
            session.form.shown_payment().unwrap().link.as_str(),
            "upi://pay?pa=merchant@bank&pn=Payment&am=150&cu=INR"
        );

        // Clearing the amount only takes effect on the next submit
        assert_eq!(run(&mut session, "set-amount"), Flow::Continue);
        assert_eq!(session.form.amount(), "");
        assert!(
            session
                .form
                .shown_payment()
                .unwrap()
                .link
                .as_str()
                .contains("&am=150&")
        );
    }

    #[test]
    fn test_generate_rejects_bad_amount() {
        let mut session = Session::new(default_config());
        assert_eq!(
            run(&mut session, "generate merchant@bank -a -10 --json"),
            Flow::Rejected
        );
        assert!(session.form.shown_payment().is_none());
    }

    #[test]
    fn test_exit() {
        let mut session = Session::new(default_config());
        assert_eq!(run(&mut session, "exit"), Flow::Exit);
    }
}
