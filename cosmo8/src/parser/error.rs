use thiserror::Error;

/// Failures raised while assembling a Cosmo-8 program.
///
/// Every variant carries the 1-based source line it was raised from so a caller can
/// point a user at the offending line, the way `pest`-based assemblers in the wider
/// ecosystem attach spans to their errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// More than 256 instructions were produced.
    #[error("line {line}: program too large ({count} instructions, max 256)")]
    ProgramTooLarge {
        /// Line of the instruction that pushed the program over the limit.
        line: usize,
        /// Total instruction count at the point of failure.
        count: usize,
    },

    /// A jump-class mnemonic's target was neither a known label nor an integer literal.
    #[error("line {line}: undefined label {label:?}")]
    UndefinedLabel {
        /// Line of the offending jump/call instruction.
        line: usize,
        /// The unresolved token.
        label: String,
    },

    /// A mnemonic outside the closed opcode set was used.
    #[error("line {line}: unknown instruction {mnemonic:?}")]
    UnknownInstruction {
        /// Line of the offending instruction.
        line: usize,
        /// The mnemonic token, uppercased.
        mnemonic: String,
    },

    /// A recognized mnemonic was given operands that don't parse into its fixed shape:
    /// wrong arity, or a token that isn't a register/immediate/address where one was
    /// required. Added so malformed input fails cleanly instead of panicking.
    #[error("line {line}: malformed operand for {mnemonic}: {message}")]
    MalformedOperand {
        /// Line of the offending instruction.
        line: usize,
        /// The mnemonic being assembled.
        mnemonic: String,
        /// Human-readable detail.
        message: String,
    },
}
