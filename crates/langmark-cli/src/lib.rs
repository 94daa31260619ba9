//! `langmark` - tag ranges of a text from the command line.
//!
//! ```bash
//! langmark --text "Hello world" --apply 0..5=inglés --select world=inglés --pretty
//! RUST_LOG=debug langmark --tags languages.yaml --file input.txt --select "Bonjour=fr"
//! ```
//!
//! Operations run in command-line order; the resulting segments are printed as a JSON array of
//! `{"tag", "text"}` records.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use langmark_core::{CommandExecutor, TagCommand, TagSet};

const PROGRAM_NAME: &str = "langmark";

/// One tagging step requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `--apply START..END=LABEL`
    Apply {
        /// Range start offset in characters.
        start: usize,
        /// Range end offset in characters (exclusive).
        end: usize,
        /// Tag label.
        label: String,
    },
    /// `--select TEXT=LABEL`
    Select {
        /// Selected text, resolved to its first occurrence.
        text: String,
        /// Tag label.
        label: String,
    },
}

/// Where the initial text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Literal text.
    Text(String),
    /// A file to read.
    File(PathBuf),
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Optional tag set config (YAML or JSON); the built-in set otherwise.
    pub tags: Option<PathBuf>,
    /// Initial text.
    pub input: Input,
    /// Operations, in command-line order.
    pub operations: Vec<Operation>,
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Widen ranges to grapheme cluster boundaries.
    pub graphemes: bool,
}

/// Entry point for the `langmark` binary.
pub fn run_cli(args: Vec<String>) -> Result<()> {
    let _ = env_logger::try_init();

    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                print!("{}", e);
                return Ok(());
            }
            return Err(anyhow!("Error parsing command-line arguments: {}", e));
        }
    };

    let options = parse_options(&matches)?;
    let output = run(&options)?;
    println!("{}", output);
    Ok(())
}

fn build_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tag ranges of a text with language labels and print the segments as JSON")
        .arg(
            Arg::new("tags")
                .long("tags")
                .short('t')
                .help("Tag set config file (.yaml or .json)"),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .conflicts_with("file")
                .help("Initial text"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read the initial text from a file"),
        )
        .arg(
            Arg::new("apply")
                .long("apply")
                .short('a')
                .action(ArgAction::Append)
                .help("Retag a character range: START..END=LABEL"),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .short('s')
                .action(ArgAction::Append)
                .help("Retag the first occurrence of TEXT: TEXT=LABEL"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .short('p')
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::new("graphemes")
                .long("graphemes")
                .action(ArgAction::SetTrue)
                .help("Never split a grapheme cluster"),
        )
}

fn parse_options(matches: &ArgMatches) -> Result<Options> {
    let input = match (
        matches.get_one::<String>("text"),
        matches.get_one::<String>("file"),
    ) {
        (Some(text), _) => Input::Text(text.clone()),
        (None, Some(file)) => Input::File(PathBuf::from(file)),
        (None, None) => bail!("either --text or --file is required"),
    };

    // Interleave --apply and --select by their position on the command line.
    let mut indexed: Vec<(usize, Operation)> = Vec::new();
    for (id, parse) in [
        ("apply", parse_apply as fn(&str) -> Result<Operation>),
        ("select", parse_select),
    ] {
        if let (Some(values), Some(indices)) = (
            matches.get_many::<String>(id),
            matches.indices_of(id),
        ) {
            for (value, index) in values.zip(indices) {
                indexed.push((index, parse(value)?));
            }
        }
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(Options {
        tags: matches.get_one::<String>("tags").map(PathBuf::from),
        input,
        operations: indexed.into_iter().map(|(_, op)| op).collect(),
        pretty: matches.get_flag("pretty"),
        graphemes: matches.get_flag("graphemes"),
    })
}

/// Parse `START..END=LABEL`.
pub fn parse_apply(value: &str) -> Result<Operation> {
    let (range, label) = value
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("expected START..END=LABEL, got '{}'", value))?;
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| anyhow!("expected START..END, got '{}'", range))?;

    Ok(Operation::Apply {
        start: start
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid range start '{}'", start))?,
        end: end
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid range end '{}'", end))?,
        label: label.to_string(),
    })
}

/// Parse `TEXT=LABEL`. The label is taken after the last `=`, so the text may contain `=`.
pub fn parse_select(value: &str) -> Result<Operation> {
    let (text, label) = value
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("expected TEXT=LABEL, got '{}'", value))?;
    if text.is_empty() {
        bail!("selected text cannot be empty");
    }
    Ok(Operation::Select {
        text: text.to_string(),
        label: label.to_string(),
    })
}

/// Run all operations and return the JSON export.
pub fn run(options: &Options) -> Result<String> {
    let tags = match &options.tags {
        Some(path) => TagSet::load(path)
            .with_context(|| format!("failed to load tag set from {}", path.display()))?,
        None => TagSet::default(),
    };
    let tags = Arc::new(tags);

    let text = match &options.input {
        Input::Text(text) => text.clone(),
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    let mut executor = CommandExecutor::new(tags.clone(), &text);
    executor.set_snap_to_graphemes(options.graphemes);

    for operation in &options.operations {
        let label = match operation {
            Operation::Apply { label, .. } | Operation::Select { label, .. } => label,
        };
        let tag = tags
            .tag(label)
            .ok_or_else(|| anyhow!("unknown tag label '{}'", label))?;

        let command = match operation {
            Operation::Apply { start, end, .. } => TagCommand::Retag {
                start: *start,
                end: *end,
                tag,
            },
            Operation::Select { text, .. } => TagCommand::RetagSelection {
                selected_text: text.clone(),
                tag,
            },
        };

        log::info!("{:?}", command);
        executor
            .execute(command)
            .with_context(|| format!("failed to apply {:?}", operation))?;
    }

    Ok(executor.document().to_json(options.pretty)?)
}
