use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use cosmo8_cli::{run, Cli};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let is_terminal = stdin.is_terminal();

    match run(&cli, is_terminal, stdin) {
        Ok(outcome) => {
            for value in &outcome.outputs {
                println!("{value}");
            }
            eprintln!("Instruction count: {}", outcome.instruction_count);
            eprintln!("Cycles used: {}", outcome.cycles);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Runtime error: {err}");
            ExitCode::FAILURE
        }
    }
}
