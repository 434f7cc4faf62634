//! Cosmo-8: a small fixed-width virtual machine and its assembler.
//!
//! The crate is split into the same two halves the instruction set itself implies:
//!
//! - [`parser`] turns assembly source text into a flat, already-resolved instruction
//!   list (a pure function, no I/O).
//! - [`machine`] owns the register file, RAM, call stack and flags, and interprets
//!   that instruction list against a supplied input stream.
//!
//! [`run_program`] ties the two together the way a harness would: parse, construct a
//! [`machine::Machine`], run it to completion, and hand back the output values.

pub mod machine;
pub mod numeric;
pub mod parser;

pub use machine::{Machine, RuntimeError};
pub use parser::{parse, Instruction, Operand, ParseError};

/// Parses `source` and runs it to completion against `inputs`, returning the ordered
/// output values (ports are recorded internally but not part of this return value —
/// see [`Machine::run_logged`] to observe them).
///
/// This is the `run_program` entry point described for the harness: all parser and
/// machine errors propagate through [`Error`].
pub fn run_program(source: &str, inputs: Vec<i16>) -> Result<Vec<i16>, Error> {
    let (instructions, _count) = parse(source)?;
    let mut machine = Machine::new(instructions, inputs);
    Ok(machine.run()?)
}

/// Either phase's failure, for callers that just want one error type out of
/// [`run_program`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source failed to assemble.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The assembled program failed at runtime.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_program_scenario_add() {
        let source = "\
            READ R0, 0\n\
            READ R1, 0\n\
            ADD R2, R0, R1\n\
            WRITE 0, R2\n\
            HLT\n\
        ";

        let outputs = run_program(source, vec![10, 20]).unwrap();
        assert_eq!(outputs, vec![30]);
    }
}
