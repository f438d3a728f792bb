//! Command-line front end
//!
//! Reads proposal documents from disk, runs them through the pricing
//! module and renders the result as pretty JSON.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use shared::models::{ClientCalculation, ProposalData};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pricing::{
    calculate_changes, prepare_proposal_from_calculation, recalculate_service_totals,
};

pub const USAGE: &str = "\
Usage:
  proposal-engine recalculate <proposal.json>
  proposal-engine prepare <client.json>
  proposal-engine diff <original.json> <updated.json>";

/// Parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Recalculate a `ProposalData` document
    Recalculate { input: PathBuf },
    /// Build a `ProposalData` from a client calculation document
    Prepare { input: PathBuf },
    /// Change set between two `ProposalData` documents
    Diff { original: PathBuf, updated: PathBuf },
}

impl Command {
    /// Parse arguments (without the program name)
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = args.next().context("missing subcommand")?;
        let rest: Vec<String> = args.collect();

        match (command.as_str(), rest.as_slice()) {
            ("recalculate", [input]) => Ok(Command::Recalculate { input: input.into() }),
            ("prepare", [input]) => Ok(Command::Prepare { input: input.into() }),
            ("diff", [original, updated]) => Ok(Command::Diff {
                original: original.into(),
                updated: updated.into(),
            }),
            ("recalculate" | "prepare" | "diff", _) => {
                bail!("wrong number of arguments for '{}'", command)
            }
            _ => bail!("unknown subcommand '{}'", command),
        }
    }
}

/// Execute a command and return its JSON output
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Recalculate { input } => {
            let data: ProposalData = read_json(input)?;
            render(&recalculate_service_totals(&data))
        }
        Command::Prepare { input } => {
            let client: ClientCalculation = read_json(input)?;
            render(&prepare_proposal_from_calculation(&client))
        }
        Command::Diff { original, updated } => {
            let original: ProposalData = read_json(original)?;
            let updated: ProposalData = read_json(updated)?;
            render(&calculate_changes(&original, &updated))
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
