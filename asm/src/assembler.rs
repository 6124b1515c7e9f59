use arch::{inst::Inst, mem::MAX_ADDR};

use crate::{
    error::{Error, LineError},
    line::Line,
    parser,
    scan::scan,
    symbol::SymbolTable,
};

/// One encoded instruction and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    /// Source line, 0-based
    pub line_idx: usize,
    /// ROM address
    pub pc: u16,
    pub inst: Inst,
}

#[derive(Debug, Clone)]
pub struct Assembled {
    pub symbols: SymbolTable,
    pub code: Vec<Placed>,
}

impl Assembled {
    /// One 16-character word per instruction, in source order.
    pub fn binary(&self) -> Vec<String> {
        self.code
            .iter()
            .map(|placed| placed.inst.to_bin_string())
            .collect()
    }
}

/// Run both passes over `lines`. Either every instruction encodes or
/// nothing is returned.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<Assembled, LineError> {
    let symbols = scan(lines)?;
    generate(lines, symbols)
}

/// Second pass: encode every instruction against a complete symbol table.
/// Programs must fit the 32K-word ROM.
pub fn generate<S: AsRef<str>>(lines: &[S], symbols: SymbolTable) -> Result<Assembled, LineError> {
    let mut code = vec![];
    for (idx, raw) in lines.iter().enumerate() {
        if let Line::Inst(text) = Line::parse(raw.as_ref()).map_err(|e| e.at(idx))? {
            let pc = u16::try_from(code.len())
                .ok()
                .filter(|pc| *pc <= MAX_ADDR)
                .ok_or_else(|| Error::OutOfRange(code.len().to_string()).at(idx))?;
            let inst = parser::parse(text, &symbols).map_err(|e| e.at(idx))?;
            code.push(Placed {
                line_idx: idx,
                pc,
                inst,
            });
        }
    }

    Ok(Assembled { symbols, code })
}

pub fn assemble_str(src: &str) -> Result<Vec<String>, LineError> {
    let lines: Vec<&str> = src.lines().collect();
    assemble(&lines).map(|assembled| assembled.binary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pc_skips_labels_and_comments() {
        let assembled = assemble(&["// x", "@1", "(L)", "", "D=A", "@L"]).unwrap();
        let placed: Vec<(usize, u16)> = assembled
            .code
            .iter()
            .map(|p| (p.line_idx, p.pc))
            .collect();
        assert_eq!(placed, vec![(1, 0), (4, 1), (5, 2)]);
        assert_eq!(assembled.code[2].inst, Inst::Addr(1));
    }

    #[test]
    fn program_must_fit_rom() {
        let mut lines = vec!["D=A"; MAX_ADDR as usize + 1];
        assert_eq!(assemble(&lines).unwrap().code.last().unwrap().pc, MAX_ADDR);

        lines.push("0;JMP");
        let err = assemble(&lines).unwrap_err();
        assert_eq!(err.line_idx, MAX_ADDR as usize + 1);
        assert!(matches!(err.error, Error::OutOfRange(_)));
    }

    #[test]
    fn failure_yields_no_output() {
        let err = assemble_str("@1\nD=A\nD=Q\nM=D").unwrap_err();
        assert_eq!(err.line_idx, 2);
        assert!(matches!(err.error, Error::UnknownComputation(_)));
    }
}
