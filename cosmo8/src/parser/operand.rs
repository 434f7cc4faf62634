use crate::numeric::s16_of;

/// A resolvable source operand: either a register or an already-canonicalized
/// immediate. Produced once at parse time instead of being re-parsed from a raw
/// string on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// `R0`..`R7`.
    Register(u8),
    /// A signed literal, already passed through [`s16_of`].
    Immediate(i16),
}

/// The address operand accepted by `LOAD`/`STORE`: either a bare memory address or
/// an indirection through a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemOperand {
    /// A bare integer literal address.
    Direct(i32),
    /// `[Rn]` — use the current signed value of register `n` as the address.
    Indirect(u8),
}

/// Parses a register token (`R0`..`R7`, case-insensitive). Returns `None` if the
/// token isn't shaped like a register reference at all (so callers can fall back to
/// parsing it as an integer).
pub fn parse_register(token: &str) -> Option<u8> {
    let mut chars = token.chars();
    let head = chars.next()?;
    if head != 'R' && head != 'r' {
        return None;
    }
    let rest: String = chars.collect();
    let index: u8 = rest.parse().ok()?;
    (index <= 7).then_some(index)
}

/// Parses a signed decimal integer literal (optional leading `-`).
pub fn parse_int(token: &str) -> Option<i32> {
    token.parse::<i32>().ok()
}

/// Resolves a generic source operand token into [`Operand`], per `_resolve_src`:
/// a token starting with `R`/`r` is a register, anything else is a signed integer
/// literal canonicalized to 16 bits.
pub fn parse_operand(token: &str) -> Option<Operand> {
    if let Some(index) = parse_register(token) {
        return Some(Operand::Register(index));
    }
    parse_int(token).map(|value| Operand::Immediate(s16_of(value)))
}

/// Resolves the `LOAD`/`STORE` address operand: `[Rn]` or a bare integer literal.
pub fn parse_mem_operand(token: &str) -> Option<MemOperand> {
    if let Some(inner) = token.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        parse_register(inner).map(MemOperand::Indirect)
    } else {
        parse_int(token).map(MemOperand::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registers_case_insensitively() {
        assert_eq!(parse_register("R3"), Some(3));
        assert_eq!(parse_register("r7"), Some(7));
        assert_eq!(parse_register("R8"), None);
    }

    #[test]
    fn parses_immediate_operands() {
        assert_eq!(parse_operand("-5"), Some(Operand::Immediate(-5)));
        assert_eq!(parse_operand("R2"), Some(Operand::Register(2)));
        assert_eq!(parse_operand("not-a-number"), None);
    }

    #[test]
    fn parses_indirect_and_direct_memory_operands() {
        assert_eq!(parse_mem_operand("[R4]"), Some(MemOperand::Indirect(4)));
        assert_eq!(parse_mem_operand("17"), Some(MemOperand::Direct(17)));
        assert_eq!(parse_mem_operand("[R9]"), None);
    }
}
