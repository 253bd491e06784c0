use std::{fs, process::ExitCode};

use calcrs::{evaluate, parse, tokenize};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// calcrs evaluates arithmetic expressions such as `2 ^ -3 + sqrt(16)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Print the tokens of each expression before its result.
    #[arg(long)]
    tokens: bool,

    /// Print the expression tree of each expression before its result.
    #[arg(long)]
    tree: bool,

    /// Increase log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or the path to read with `--file`.
    contents: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

/// Runs one expression through the pipeline, printing what was asked for.
fn run(source: &str, args: &Args) -> Result<f64, calcrs::Error> {
    let tokens = tokenize(source)?;
    if args.tokens {
        let listing = tokens.iter()
                            .map(|token| format!("{:?}({token})", token.kind()))
                            .collect::<Vec<_>>()
                            .join(" ");
        println!("{listing}");
    }

    let expr = parse(&tokens)?;
    if args.tree {
        println!("{expr:#?}");
    }

    Ok(evaluate(&expr)?)
}

/// Echoes `source` with a `^` under the character at `position`.
///
/// Tokenizer positions are character offsets, so they line up with the echoed
/// text; a position past the end points just after it.
fn caret_line(source: &str, position: usize) -> String {
    format!("  {source}\n  {}^", " ".repeat(position))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    let mut status = ExitCode::SUCCESS;
    for line in script.lines()
                      .map(str::trim)
                      .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        match run(line, &args) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                error!(expression = line, "evaluation failed");
                eprintln!("{e}");
                if let calcrs::Error::Lex(lex) = &e {
                    eprintln!("{}", caret_line(line, lex.position()));
                }
                status = ExitCode::FAILURE;
            },
        }
    }

    debug!("done");
    status
}
