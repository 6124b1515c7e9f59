use arch::mem::MAX_ADDR;
use indexmap::IndexSet;

use crate::{
    error::{Error, LineError},
    line::Line,
    parser::{addr_operand, Operand},
    symbol::{Kind, SymbolTable},
};

/// First pass: bind every label to the ROM address of the instruction that
/// follows it and every other `@symbol` to a fresh RAM slot.
///
/// Variables are allocated once the walk is over, in first-use order, so a
/// label referenced before its definition never takes a slot.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Result<SymbolTable, LineError> {
    let mut symbols = SymbolTable::new();
    let mut variables: IndexSet<&str> = IndexSet::new();
    let mut pc: u32 = 0;

    for (idx, raw) in lines.iter().enumerate() {
        match Line::parse(raw.as_ref()).map_err(|e| e.at(idx))? {
            Line::Skip => {}
            Line::Label(name) => {
                if pc > MAX_ADDR as u32 {
                    return Err(Error::OutOfRange(name.to_string()).at(idx));
                }
                symbols
                    .add_entry(name, Kind::Label, pc as u16)
                    .map_err(|e| e.at(idx))?;
            }
            Line::Inst(code) => {
                if let Some(operand) = addr_operand(code) {
                    if let Operand::Symbol(name) = Operand::parse(operand).map_err(|e| e.at(idx))? {
                        if !symbols.contains(name) {
                            variables.insert(name);
                        }
                    }
                }
                pc += 1;
            }
        }
    }

    for name in variables {
        // bound as a label further down
        if symbols.contains(name) {
            continue;
        }
        let addr = symbols.next_available_address();
        if addr > MAX_ADDR {
            return Err(LineError {
                line_idx: first_use(lines, name),
                error: Error::OutOfRange(name.to_string()),
            });
        }
        symbols
            .add_entry(name, Kind::Variable, addr)
            .map_err(|e| e.at(first_use(lines, name)))?;
    }

    Ok(symbols)
}

fn first_use<S: AsRef<str>>(lines: &[S], name: &str) -> usize {
    lines
        .iter()
        .position(|raw| match Line::parse(raw.as_ref()) {
            Ok(Line::Inst(code)) => addr_operand(code) == Some(name),
            _ => false,
        })
        .unwrap_or(0)
}
