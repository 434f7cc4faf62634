//! Testable core of the `cosmo8` command-line simulator. `main.rs` is a
//! thin wrapper that installs the tracing subscriber, resolves stdin, and calls into
//! [`run`].

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Assemble and run a Cosmo-8 program, printing its output values.
#[derive(Debug, Parser)]
#[command(name = "cosmo8", version, about)]
pub struct Cli {
    /// Path to the assembly source file.
    pub program: PathBuf,

    /// Comma-separated decimal integers to use as the input stream.
    #[arg(long)]
    pub input: Option<String>,
}

/// Everything that can go wrong running the CLI, beyond the VM itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read standard input: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("{0:?} is not a valid integer in the input list")]
    InvalidInput(String),
    #[error(transparent)]
    Cosmo8(#[from] cosmo8::Error),
}

/// What a successful run prints: output values to stdout, the rest to stderr.
pub struct RunOutcome {
    pub outputs: Vec<i16>,
    pub instruction_count: usize,
    pub cycles: u64,
}

/// Resolves `cli`'s input source (the `--input` flag, or else `stdin` unless it's a
/// terminal) and runs the named program to completion.
pub fn run(
    cli: &Cli,
    stdin_is_terminal: bool,
    mut stdin: impl Read,
) -> Result<RunOutcome, CliError> {
    let source = std::fs::read_to_string(&cli.program).map_err(|source| CliError::Read {
        path: cli.program.clone(),
        source,
    })?;

    let inputs = match &cli.input {
        Some(list) => parse_int_list(list)?,
        None if stdin_is_terminal => Vec::new(),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(CliError::Stdin)?;
            parse_int_list(&buf)?
        }
    };

    tracing::debug!(program = %cli.program.display(), inputs = inputs.len(), "assembling");

    let (program, instruction_count) = cosmo8::parse(&source)?;
    let mut machine = cosmo8::Machine::new(program, inputs);
    let outputs = machine.run()?;

    Ok(RunOutcome {
        outputs,
        instruction_count,
        cycles: machine.cycles(),
    })
}

fn parse_int_list(text: &str) -> Result<Vec<i16>, CliError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<i16>()
                .map_err(|_| CliError::InvalidInput(tok.to_owned()))
        })
        .collect()
}
