use crate::assembler::Assembled;
use crate::line::{split_comment, Line};
use crate::symbol::{Kind, SymbolTable};
use color_print::cformat;

/// Listing of every source line next to the word it produced.
pub fn print_dump<S: AsRef<str>>(path: &str, lines: &[S], assembled: &Assembled) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(27),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut code = assembled.code.iter().peekable();
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line_num = idx + 1;
        let comment_str = split_comment(raw)
            .1
            .map(|s| cformat!("<dim>//{}</>", s))
            .unwrap_or_default();

        let placed = code.next_if(|placed| placed.line_idx == idx);
        let body = match (Line::parse(raw), placed) {
            (Ok(Line::Inst(_)), Some(placed)) => format!(
                "[{:04X}] {} | {:>4}:   {} {}",
                placed.pc,
                placed.inst.to_bin_string(),
                line_num,
                placed.inst.cformat(),
                comment_str
            ),
            (Ok(Line::Label(name)), _) => {
                let label = cformat!("<g>({})</>", name);
                format!("{:27}| {:>4}: {} {}", "", line_num, label, comment_str)
            }
            _ => format!("{:27}| {:>4}: {}", "", line_num, comment_str),
        };
        println!("{}", body);
    }
    println!("---------------------------+-----------------------------------------------------");
}

/// Labels and variables with their addresses, predefined symbols omitted.
pub fn print_symbols(symbols: &SymbolTable) {
    for (name, kind, addr) in symbols.entries() {
        let kind = match kind {
            Kind::Label => cformat!("<g>label</>"),
            Kind::Variable => cformat!("<c>var  </>"),
            Kind::Predefined => cformat!("<y>const</>"),
        };
        println!("  {} 0x{:04X} {:>5}  {}", kind, addr, addr, name);
    }
}
