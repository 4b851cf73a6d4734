use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    calculator::{Calculator, History, Outcome},
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN, Limits},
    parse_with_limits,
    util::format::ERROR_MARKER,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions: numbers, + - * / ^, parentheses,
/// sin, cos, tan, log, sqrt and pi. Without an expression it reads one per
/// line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression in canonical form instead of its value.
    #[arg(short, long)]
    ast: bool,

    /// Maximum nesting depth of parentheses, calls, signs and exponents.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum length of an expression in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_len: usize,

    /// Logs why each rejected expression failed. `RECKON_LOG` takes
    /// precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// The expression, or a file path with `--file`.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let limits = Limits { max_depth:     args.max_depth,
                          max_input_len: args.max_len, };
    let mut calc = Calculator::with_parts(limits, History::new());

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            let mut failed = false;
            for line in script.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let shown = render(&mut calc, line, args.ast);
                failed |= shown == ERROR_MARKER;
                println!("{shown}");
            }
            if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
        },
        Some(expression) => {
            let shown = render(&mut calc, &expression, args.ast);
            println!("{shown}");
            if shown == ERROR_MARKER { ExitCode::FAILURE } else { ExitCode::SUCCESS }
        },
        None => match interactive(&mut calc, args.ast) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
    }
}

/// Installs a stderr subscriber filtered by `RECKON_LOG`, falling back to
/// `debug` with `--verbose` and `warn` otherwise.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("RECKON_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Evaluates or, with `ast`, pretty-prints one expression.
fn render(calc: &mut Calculator, expression: &str, ast: bool) -> String {
    if ast {
        return match parse_with_limits(expression, calc.limits()) {
            Ok(expr) => expr.to_string(),
            Err(error) => {
                debug!(expression, %error, "expression rejected");
                ERROR_MARKER.to_string()
            },
        };
    }
    calc.evaluate(expression).to_string()
}

/// Reads expressions and session commands from stdin until end of input or
/// `:quit`.
fn interactive(calc: &mut Calculator, ast: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout();

    loop {
        if prompt {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("", _) => {},
            (":quit" | ":q", _) => return Ok(()),
            (":history", _) => {
                for (i, entry) in calc.history().entries().enumerate() {
                    writeln!(stdout, "{i}: {entry}")?;
                }
            },
            (":clear", _) => calc.history_mut().clear(),
            (":recall", index) => {
                let expression = index.parse::<usize>()
                                      .ok()
                                      .and_then(|i| calc.history().recall(i))
                                      .map(str::to_string);
                match expression {
                    Some(expression) => {
                        let outcome = calc.evaluate(&expression);
                        writeln!(stdout, "{expression} = {outcome}")?;
                    },
                    None => writeln!(stdout, "{}", Outcome::Error)?,
                }
            },
            _ => writeln!(stdout, "{}", render(calc, line, ast))?,
        }
    }
}
