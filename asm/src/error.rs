use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Invalid symbol name: `{0}`")]
    InvalidSymbol(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComputation(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDestination(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Syntax Error: Cannot parse `{0}`")]
    MalformedInstruction(String),

    #[error("Value out of range: `{0}` (max 32767)")]
    OutOfRange(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An [`Error`] tied to the source line (0-based) it came from.
#[derive(Error, Debug)]
#[error("line {}: {}", .line_idx + 1, .error)]
pub struct LineError {
    pub line_idx: usize,
    #[source]
    pub error: Error,
}

impl Error {
    pub fn at(self, line_idx: usize) -> LineError {
        LineError {
            line_idx,
            error: self,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, lines: &[String], line_idx: usize) {
        cprintln!("<red,bold>error</>: {}", self);

        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = lines.get(line_idx).map(|s| s.as_str()).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }

    /// Errors with no source line attached (file I/O)
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
    }
}
