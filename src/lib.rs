//! Dashkit library crate
//!
//! This crate provides the core functionality for the `dashkit` CLI: the
//! support utilities an admin console leans on. It is organized into small
//! modules: `clipboard` (best-effort copy with a probed fallback), `diff`
//! (key-level record diffing), `context` (the host-provided bootstrap
//! document and the admin gate), and `text` (label helpers). The binary
//! `src/main.rs` calls `dashkit_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod context;
pub mod diff;
pub mod text;

use std::io::Read as _;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::clipboard::select_backend;
use crate::context::{has_admin_secret, load_context};
use crate::diff::{Record, object_diff};
use crate::text::capitalize_first_letter;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log clipboard and parsing details to stderr
    #[arg(long = "verbose", global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy text to the system clipboard
    Copy {
        /// Text to copy; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the keys on which two JSON records differ
    Diff {
        /// Path to the first record (a flat JSON object)
        first: String,

        /// Path to the second record (a flat JSON object)
        second: String,
    },
    /// Summarize a console context document
    Status {
        /// Path to the context document (JSON)
        context: String,
    },
}

/// Run the dashkit CLI.
///
/// This function is the high-level entrypoint used by the `dashkit` binary.
/// It parses CLI arguments and dispatches to module functions. Errors are
/// printed to stderr and cause the process to exit with a non-zero code
/// where appropriate; clipboard failure is a warning, never an exit.
///
/// Behavior summary:
/// - `copy`: place the given text (or stdin) on the system clipboard.
/// - `diff`: print the keys on which two JSON record files disagree.
/// - `status`: summarize a context document and the admin gate it implies.
///
/// Example:
///
/// ```no_run
/// dashkit_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Copy { text } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin().unwrap_or_else(|e| fail(&e)),
            };
            // A short-lived process cannot ride the fire-and-forget path,
            // so drive the selected backend synchronously.
            let backend = select_backend();
            match backend.write(&text) {
                Ok(()) => debug!("copied {} bytes via {} backend", text.len(), backend.name()),
                Err(e) => eprintln!("warning: failed to copy to clipboard: {}", e),
            }
        }
        Commands::Diff { first, second } => {
            let a = load_record(&first).unwrap_or_else(|e| fail(&e));
            let b = load_record(&second).unwrap_or_else(|e| fail(&e));
            for key in object_diff(&a, &b) {
                println!("{}", key);
            }
        }
        Commands::Status { context } => {
            let ctx = load_context(&context).unwrap_or_else(|e| fail(&e));
            if !ctx.organization_name.is_empty() {
                println!("Organization: {}", ctx.organization_name);
            }
            println!("Authorizer URL: {}", ctx.authorizer_url);
            println!("Redirect URL: {}", ctx.redirect_url());

            let onboarding = if ctx.is_onboarding_completed {
                "completed"
            } else {
                "pending"
            };
            let admin = if has_admin_secret(&ctx) {
                "unlocked"
            } else {
                "locked"
            };
            println!("Onboarding: {}", capitalize_first_letter(onboarding));
            println!("Admin area: {}", capitalize_first_letter(admin));
        }
    }
}

/// Read a flat JSON record from `path`.
fn load_record(path: &str) -> Result<Record, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read record {}: {}", path, e))?;
    let value: serde_json::Value =
        serde_json::from_str(&data).map_err(|e| format!("invalid JSON in {}: {}", path, e))?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| format!("{} is not a JSON object", path))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};
    let default = if verbose { "debug" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
