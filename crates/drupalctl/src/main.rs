use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_node;
mod cmd_term;
mod cmd_text_field;
mod common;

#[derive(Parser, Debug)]
#[command(name = "drupalctl", version, about = "Inspect Drupal Services XML and JSON payloads")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output JSON where applicable
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse the common attributes of a node document
    Node {
        /// Node XML file, `-` for stdin
        file: PathBuf,
    },
    /// Render a text field from a node document as POST XML
    TextField {
        /// Node XML file, `-` for stdin
        file: PathBuf,
        /// Field machine name, e.g. field_body
        #[arg(long)]
        name: String,
        /// Include safe_value and format
        #[arg(long)]
        all: bool,
    },
    /// Decode a taxonomy term and encode it again
    Term {
        /// Term JSON file, `-` for stdin
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let Cli { verbose, json, cmd } = Cli::parse();

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cmd {
        Cmd::Node { file } => cmd_node::run(&file, json)?,
        Cmd::TextField { file, name, all } => cmd_text_field::run(&file, &name, all, json)?,
        Cmd::Term { file } => cmd_term::run(&file, json)?,
    }

    Ok(())
}
