//! claude-cache — run the prompt-caching filter over a request body.
//!
//! Reads a chat-completion request as JSON from a file or stdin and writes
//! the annotated body to stdout.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::{Value, json};
use tracing::debug;

use claude_cache::{ClaudeCacheError, ClaudeCacheFilter, FilterSettings};

/// Add Anthropic prompt-caching markers to a chat-completion request.
#[derive(Parser)]
#[command(name = "claude-cache")]
#[command(version)]
#[command(about = "Prompt-caching filter for Claude requests")]
struct Args {
    /// Request body file (or omit to read from stdin)
    input: Option<PathBuf>,

    /// Role of the requesting user (omit to use the default)
    #[arg(short = 'r', long, env = "CLAUDE_CACHE_USER_ROLE")]
    user_role: Option<String>,

    /// Path to settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the annotated body (overrides the settings file)
    #[arg(short, long)]
    debug: bool,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialise tracing (default: warn, info with --debug; override with RUST_LOG).
    let default_level = if args.debug { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut settings = FilterSettings::load(args.config.as_deref())?;
    if args.debug {
        settings = settings.debug(true);
    }
    debug!(?settings, "loaded settings");
    let filter = ClaudeCacheFilter::new(settings);

    let body = read_body(args.input.as_deref())?;
    let user = args.user_role.map(|role| json!({ "role": role }));
    let body = filter.inlet_json(body, user.as_ref())?;

    let mut stdout = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &body)?;
    } else {
        serde_json::to_writer(&mut stdout, &body)?;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Read the request body from `path`, or from stdin when no path is given.
fn read_body(path: Option<&Path>) -> claude_cache::Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            if io::stdin().is_terminal() {
                return Err(ClaudeCacheError::InvalidInput(
                    "no input provided (pass a file or pipe a body via stdin)".into(),
                ));
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let body: Value = serde_json::from_str(&text)?;
    if !body.is_object() {
        return Err(ClaudeCacheError::InvalidInput(
            "request body must be a JSON object".into(),
        ));
    }
    Ok(body)
}
