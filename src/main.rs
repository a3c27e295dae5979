use std::io::IsTerminal;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use email_presence::{CommandRunner, DEFAULT_TOOL, ToolConfig, check_email, to_nodes};

#[derive(Parser)]
#[command(
    name = "email-presence",
    version,
    about = "Check which online services an email is registered on"
)]
struct Cli {
    /// Email address to check
    #[arg(allow_hyphen_values = true)]
    email: String,

    /// Scanning tool to run
    #[arg(long, env = "EMAIL_PRESENCE_TOOL", default_value = DEFAULT_TOOL)]
    tool: String,

    /// Extra argument passed to the tool before the email (repeatable)
    #[arg(long = "tool-arg", value_name = "ARG", allow_hyphen_values = true)]
    tool_args: Vec<String>,

    /// Shape of the JSON written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Records)]
    format: OutputFormat,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Flat service records
    Records,
    /// Text nodes with record metadata
    Nodes,
}

/// Log to stderr; stdout carries only the JSON payload.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("email_presence=warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_logging();

    let runner = CommandRunner::new(ToolConfig::new(cli.tool).with_args(cli.tool_args));
    let normalized = check_email(&runner, &cli.email);

    let rendered = match cli.format {
        OutputFormat::Records => to_json(&normalized.results, cli.pretty),
        OutputFormat::Nodes => to_json(&to_nodes(&normalized.results), cli.pretty),
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize results: {e}");
            println!("[]");
        }
    }

    ExitCode::SUCCESS
}
