use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, mem::MAX_ADDR};

use crate::{error::Error, line::is_symbol, symbol::SymbolTable};

// ----------------------------------------------------------------------------
// Operand of `@...`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Literal(u16),
    Symbol(&'a str),
}

impl<'a> Operand<'a> {
    /// Decimal literal when it starts with a digit, symbol name otherwise.
    pub fn parse(s: &'a str) -> Result<Operand<'a>, Error> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            if !s.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::InvalidSymbol(s.to_string()));
            }
            return match s.parse::<u32>() {
                Ok(v) if v <= MAX_ADDR as u32 => Ok(Operand::Literal(v as u16)),
                _ => Err(Error::OutOfRange(s.to_string())),
            };
        }
        if is_symbol(s) {
            Ok(Operand::Symbol(s))
        } else {
            Err(Error::InvalidSymbol(s.to_string()))
        }
    }

    pub fn resolve(&self, symbols: &SymbolTable) -> Result<u16, Error> {
        match self {
            Operand::Literal(v) => Ok(*v),
            Operand::Symbol(name) => symbols.get_address(name),
        }
    }
}

// ----------------------------------------------------------------------------
// Instruction

/// Address operand of an `@...` line, `None` for compute lines.
pub fn addr_operand(line: &str) -> Option<&str> {
    line.strip_prefix('@').map(str::trim)
}

/// Split `dest=comp;jump` into its three fields.
/// `=` and `;` are located independently, either or both may be missing.
pub fn split(line: &str) -> Result<(Option<&str>, &str, Option<&str>), Error> {
    let (dest, rest) = match line.split_once('=') {
        Some((dest, rest)) => (Some(dest.trim()), rest),
        None => (None, line),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp.trim(), Some(jump.trim())),
        None => (rest.trim(), None),
    };
    // `0;JMP=D` would leave the `;` inside the destination
    if dest.is_some_and(|dest| dest.contains(';')) || rest.contains('=') {
        return Err(Error::MalformedInstruction(line.to_string()));
    }
    Ok((dest, comp, jump))
}

pub fn parse(line: &str, symbols: &SymbolTable) -> Result<Inst, Error> {
    if let Some(operand) = addr_operand(line) {
        let value = Operand::parse(operand)?.resolve(symbols)?;
        return Inst::addr(value).map_err(|_| Error::OutOfRange(operand.to_string()));
    }

    let (dest, comp, jump) = split(line)?;
    let dest = match dest {
        Some(dest) => Dest::parse(dest).map_err(|_| Error::UnknownDestination(dest.to_string()))?,
        None => Dest::NONE,
    };
    let comp = Comp::parse(comp).map_err(|_| Error::UnknownComputation(comp.to_string()))?;
    let jump = match jump {
        Some(jump) => Jump::parse(jump).map_err(|_| Error::UnknownJump(jump.to_string()))?,
        None => Jump::NEVER,
    };
    Ok(Inst::Comp(dest, comp, jump))
}
