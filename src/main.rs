use std::{env, fs::read_to_string, process, time::Instant};

use calc_front::{
    ast::dump::dump_ast,
    format_error,
    lexer::lexer::{tokenize, tokenize_strict},
    parser::parser::parse,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SOURCE: &str = "2+3+4;";
const USAGE: &str = "usage: calc_front [--strict] [--tokens] [FILE]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    strict: bool,
    print_tokens: bool,
    file_path: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--tokens" => options.print_tokens = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option `{}`", flag)),
            _ if options.file_path.is_some() => {
                return Err(format!("unexpected argument `{}`", arg))
            }
            _ => options.file_path = Some(arg),
        }
    }

    Ok(options)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Options {
        strict,
        print_tokens,
        file_path,
    } = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let source = match &file_path {
        Some(path) => match read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read {}: {}", path, error);
                process::exit(1);
            }
        },
        None => String::from(DEFAULT_SOURCE),
    };

    let start = Instant::now();

    let tokens = if strict {
        match tokenize_strict(&source) {
            Ok(tokens) => tokens,
            Err(error) => {
                eprintln!("{}", format_error(&error));
                process::exit(1);
            }
        }
    } else {
        tokenize(&source)
    };

    info!("Tokenized in {:?}", start.elapsed());

    if print_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", format_error(&error));
            process::exit(1);
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    print!("{}", dump_ast(&program));
}
