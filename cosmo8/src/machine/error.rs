use thiserror::Error;

/// Fatal machine errors. Every variant terminates the run; there is no in-language
/// recovery. `UnknownInstruction` has no counterpart here — with mnemonics lifted
/// into a closed enum at parse time, an unrecognized mnemonic is rejected by
/// [`crate::ParseError::UnknownInstruction`] instead, before a `Machine` ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A `LOAD`/`STORE` address fell outside `[0, 256)`.
    #[error("memory access out of bounds: address {address}")]
    MemoryOutOfBounds {
        /// The offending address.
        address: i32,
    },

    /// `PUSH`/`CALL` with the stack already at its 32-slot capacity.
    #[error("stack overflow")]
    StackOverflow,

    /// `POP`/`RET` with an empty stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// `MOD` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// `READ` past the end of the supplied input stream.
    #[error("input exhausted")]
    InputExhausted,

    /// More than 100,000 instructions were dispatched.
    #[error("cycle limit exceeded (100000)")]
    CycleLimit,

    /// The instruction pointer reached (or passed) the end of the program without
    /// executing `HLT`.
    #[error("fell off the end of the program at ip={ip}")]
    FellOffEnd {
        /// The instruction pointer at the point of failure.
        ip: i64,
    },
}
