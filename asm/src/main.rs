use std::path::Path;
use std::process::ExitCode;

use hackasm::{assembler, error::Error, scan, util};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,

    /// Print symbol table
    #[clap(short, long)]
    symbols: bool,
}

fn main() -> ExitCode {
    use clap::Parser;
    use std::io::{BufRead, Write};

    let args: Args = Args::parse();
    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned()
    });
    println!("Hack Assembler");

    println!("1. Read File");
    println!("  < {}", &args.input);
    let lines = match std::fs::File::open(&args.input) {
        Ok(file) => std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(Error::FileRead),
        Err(err) => Err(Error::FileOpen(args.input.clone(), err)),
    };
    let lines = match lines {
        Ok(lines) => lines,
        Err(err) => {
            err.print();
            return ExitCode::FAILURE;
        }
    };

    println!("2. Resolve Symbols");
    let symbols = match scan::scan(&lines) {
        Ok(symbols) => symbols,
        Err(err) => {
            err.error.print_diag(&args.input, &lines, err.line_idx);
            return ExitCode::FAILURE;
        }
    };

    if args.symbols {
        util::print_symbols(&symbols);
    }

    println!("3. Generate Binary");
    let assembled = match assembler::generate(&lines, symbols) {
        Ok(assembled) => assembled,
        Err(err) => {
            err.error.print_diag(&args.input, &lines, err.line_idx);
            return ExitCode::FAILURE;
        }
    };

    println!("  > {}", &output);
    let written = std::fs::File::create(&output)
        .map_err(|err| Error::FileCreate(output.clone(), err))
        .and_then(|file| {
            let mut file = std::io::BufWriter::new(file);
            for word in assembled.binary() {
                writeln!(file, "{}", word).map_err(|err| Error::FileWrite(output.clone(), err))?;
            }
            file.flush()
                .map_err(|err| Error::FileWrite(output.clone(), err))
        });
    if let Err(err) = written {
        err.print();
        return ExitCode::FAILURE;
    }

    if args.dump {
        util::print_dump(&args.input, &lines, &assembled);
    }

    ExitCode::SUCCESS
}
