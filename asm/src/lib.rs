pub mod assembler;
pub mod error;
pub mod line;
pub mod parser;
pub mod scan;
pub mod symbol;
pub mod util;
