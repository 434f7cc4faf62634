//! Two-pass assembler: source text in, a flat, already-resolved instruction list out.
//!
//! Pass one splits the source into lines, strips comments, and either records a label
//! or tokenizes an instruction (mnemonic + raw operand tokens).
//! Pass two enforces the program-size bound, resolves jump targets through the label
//! table, and decodes each mnemonic's fixed operand shape into an [`Instruction`]
//! (a closed tagged variant instead of re-parsing strings on every tick).

mod error;
mod operand;

pub use error::ParseError;
pub use operand::{MemOperand, Operand};

use operand::{parse_int, parse_mem_operand, parse_operand, parse_register};
use std::collections::HashMap;

/// Maximum number of instructions a program may contain.
pub const MAX_PROGRAM_LEN: usize = 256;

/// One decoded instruction. Jump-class targets are already resolved to an absolute
/// instruction index (as a plain `i64` so an out-of-range literal, e.g. a negative
/// one, can still be represented and surfaces as `FellOffEnd` at the next fetch
/// rather than failing to assemble).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Hlt,
    Nop,
    Mov { rd: u8, src: Operand },
    Add { rd: u8, a: Operand, b: Operand },
    Sub { rd: u8, a: Operand, b: Operand },
    Mul { rd: u8, a: Operand, b: Operand },
    Mod { rd: u8, a: Operand, b: Operand },
    And { rd: u8, a: Operand, b: Operand },
    Or { rd: u8, a: Operand, b: Operand },
    Xor { rd: u8, a: Operand, b: Operand },
    Not { rd: u8, a: Operand },
    Shl { rd: u8, v: Operand, k: Operand },
    Shr { rd: u8, v: Operand, k: Operand },
    Cmp { a: Operand, b: Operand },
    Load { rd: u8, addr: MemOperand },
    Store { addr: MemOperand, rs: u8 },
    Jmp { target: i64 },
    Jz { target: i64 },
    Jnz { target: i64 },
    Jn { target: i64 },
    Jc { target: i64 },
    Call { target: i64 },
    Ret,
    Push { src: Operand },
    Pop { rd: u8 },
    Read { rd: u8, port: i32 },
    Write { port: i32, rs: u8 },
}

const JUMP_MNEMONICS: &[&str] = &["JMP", "JZ", "JNZ", "JN", "JC", "CALL"];

struct RawLine {
    line: usize,
    mnemonic: String,
    operands: Vec<String>,
}

/// Strips a `;` or `#` to-end-of-line comment (whichever occurs first) and trims
/// surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    let cut = line
        .find(';')
        .into_iter()
        .chain(line.find('#'))
        .min()
        .unwrap_or(line.len());
    line[..cut].trim()
}

/// Splits a cleaned line into whitespace/comma-separated tokens.
fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses `source` into a resolved instruction list, returning the list alongside
/// its length (the harness-facing instruction count).
pub fn parse(source: &str) -> Result<(Vec<Instruction>, usize), ParseError> {
    let mut raw_lines = Vec::new();
    let mut labels: HashMap<String, usize> = HashMap::new();

    for (line_no, raw) in source.lines().enumerate() {
        let line = line_no + 1;
        let cleaned = strip_comment(raw);
        if cleaned.is_empty() {
            continue;
        }

        if let Some(name) = cleaned.strip_suffix(':') {
            if !name.contains(char::is_whitespace) {
                labels.insert(name.to_owned(), raw_lines.len());
                continue;
            }
        }

        let mut tokens = tokenize(cleaned);
        if tokens.is_empty() {
            continue;
        }
        let mnemonic = tokens.remove(0).to_uppercase();
        raw_lines.push(RawLine {
            line,
            mnemonic,
            operands: tokens,
        });

        if raw_lines.len() > MAX_PROGRAM_LEN {
            return Err(ParseError::ProgramTooLarge {
                line,
                count: raw_lines.len(),
            });
        }
    }

    tracing::debug!(
        lines = source.lines().count(),
        labels = labels.len(),
        instructions = raw_lines.len(),
        "parsed source into raw instruction list"
    );

    let instructions = raw_lines
        .iter()
        .map(|raw| decode(raw, &labels))
        .collect::<Result<Vec<_>, _>>()?;

    let count = instructions.len();
    Ok((instructions, count))
}

fn decode(raw: &RawLine, labels: &HashMap<String, usize>) -> Result<Instruction, ParseError> {
    let m = raw.mnemonic.as_str();

    if JUMP_MNEMONICS.contains(&m) {
        let target = resolve_jump_target(raw, labels)?;
        return Ok(match m {
            "JMP" => Instruction::Jmp { target },
            "JZ" => Instruction::Jz { target },
            "JNZ" => Instruction::Jnz { target },
            "JN" => Instruction::Jn { target },
            "JC" => Instruction::Jc { target },
            "CALL" => Instruction::Call { target },
            _ => unreachable!(),
        });
    }

    match m {
        "HLT" => with_arity(raw, 0, |_| Ok(Instruction::Hlt)),
        "NOP" => with_arity(raw, 0, |_| Ok(Instruction::Nop)),
        "RET" => with_arity(raw, 0, |_| Ok(Instruction::Ret)),

        "MOV" => with_arity(raw, 2, |o| {
            Ok(Instruction::Mov {
                rd: register(raw, o[0])?,
                src: operand(raw, o[1])?,
            })
        }),
        "ADD" => binary_reg_op(raw, Instruction::Add),
        "SUB" => binary_reg_op(raw, Instruction::Sub),
        "MUL" => binary_reg_op(raw, Instruction::Mul),
        "MOD" => binary_reg_op(raw, Instruction::Mod),
        "AND" => binary_reg_op(raw, Instruction::And),
        "OR" => binary_reg_op(raw, Instruction::Or),
        "XOR" => binary_reg_op(raw, Instruction::Xor),

        "NOT" => with_arity(raw, 2, |o| {
            Ok(Instruction::Not {
                rd: register(raw, o[0])?,
                a: operand(raw, o[1])?,
            })
        }),

        "SHL" => with_arity(raw, 3, |o| {
            Ok(Instruction::Shl {
                rd: register(raw, o[0])?,
                v: operand(raw, o[1])?,
                k: operand(raw, o[2])?,
            })
        }),
        "SHR" => with_arity(raw, 3, |o| {
            Ok(Instruction::Shr {
                rd: register(raw, o[0])?,
                v: operand(raw, o[1])?,
                k: operand(raw, o[2])?,
            })
        }),

        "CMP" => with_arity(raw, 2, |o| {
            Ok(Instruction::Cmp {
                a: operand(raw, o[0])?,
                b: operand(raw, o[1])?,
            })
        }),

        "LOAD" => with_arity(raw, 2, |o| {
            Ok(Instruction::Load {
                rd: register(raw, o[0])?,
                addr: mem_operand(raw, o[1])?,
            })
        }),
        "STORE" => with_arity(raw, 2, |o| {
            Ok(Instruction::Store {
                addr: mem_operand(raw, o[0])?,
                rs: register(raw, o[1])?,
            })
        }),

        "PUSH" => with_arity(raw, 1, |o| {
            Ok(Instruction::Push {
                src: operand(raw, o[0])?,
            })
        }),
        "POP" => with_arity(raw, 1, |o| {
            Ok(Instruction::Pop {
                rd: register(raw, o[0])?,
            })
        }),

        "READ" => with_arity(raw, 2, |o| {
            Ok(Instruction::Read {
                rd: register(raw, o[0])?,
                port: int(raw, o[1])?,
            })
        }),
        "WRITE" => with_arity(raw, 2, |o| {
            Ok(Instruction::Write {
                port: int(raw, o[0])?,
                rs: register(raw, o[1])?,
            })
        }),

        other => Err(ParseError::UnknownInstruction {
            line: raw.line,
            mnemonic: other.to_owned(),
        }),
    }
}

fn binary_reg_op(
    raw: &RawLine,
    variant: fn(u8, Operand, Operand) -> Instruction,
) -> Result<Instruction, ParseError> {
    with_arity(raw, 3, |o| {
        Ok(variant(
            register(raw, o[0])?,
            operand(raw, o[1])?,
            operand(raw, o[2])?,
        ))
    })
}

fn with_arity(
    raw: &RawLine,
    expected: usize,
    build: impl FnOnce(&[&str]) -> Result<Instruction, ParseError>,
) -> Result<Instruction, ParseError> {
    if raw.operands.len() != expected {
        return Err(ParseError::MalformedOperand {
            line: raw.line,
            mnemonic: raw.mnemonic.clone(),
            message: format!(
                "expected {} operand(s), found {}",
                expected,
                raw.operands.len()
            ),
        });
    }
    let tokens: Vec<&str> = raw.operands.iter().map(String::as_str).collect();
    build(&tokens)
}

fn register(raw: &RawLine, token: &str) -> Result<u8, ParseError> {
    parse_register(token).ok_or_else(|| ParseError::MalformedOperand {
        line: raw.line,
        mnemonic: raw.mnemonic.clone(),
        message: format!("{token:?} is not a register R0..R7"),
    })
}

fn operand(raw: &RawLine, token: &str) -> Result<Operand, ParseError> {
    parse_operand(token).ok_or_else(|| ParseError::MalformedOperand {
        line: raw.line,
        mnemonic: raw.mnemonic.clone(),
        message: format!("{token:?} is not a register or integer literal"),
    })
}

fn mem_operand(raw: &RawLine, token: &str) -> Result<MemOperand, ParseError> {
    parse_mem_operand(token).ok_or_else(|| ParseError::MalformedOperand {
        line: raw.line,
        mnemonic: raw.mnemonic.clone(),
        message: format!("{token:?} is not an address or [Rn]"),
    })
}

fn int(raw: &RawLine, token: &str) -> Result<i32, ParseError> {
    parse_int(token).ok_or_else(|| ParseError::MalformedOperand {
        line: raw.line,
        mnemonic: raw.mnemonic.clone(),
        message: format!("{token:?} is not an integer"),
    })
}

fn resolve_jump_target(
    raw: &RawLine,
    labels: &HashMap<String, usize>,
) -> Result<i64, ParseError> {
    let target = raw
        .operands
        .first()
        .ok_or_else(|| ParseError::MalformedOperand {
            line: raw.line,
            mnemonic: raw.mnemonic.clone(),
            message: "expected a label or integer literal".to_owned(),
        })?;

    if let Some(&index) = labels.get(target.as_str()) {
        return Ok(index as i64);
    }
    target
        .parse::<i64>()
        .map_err(|_| ParseError::UndefinedLabel {
            line: raw.line,
            label: target.clone(),
        })
}
