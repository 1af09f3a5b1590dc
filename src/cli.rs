use seedexpr::{Evaluator, Value};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where expressions come from
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Input {
    /// A single expression from -c
    Command(String),
    /// One expression per line of a file
    File(PathBuf),
    /// One expression per line of stdin
    Stdin,
}

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) input: Input,
    pub(crate) config: Option<PathBuf>,
    pub(crate) json: bool,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        input: Input::Stdin,
        config: None,
        json: false,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 >= args.len() {
                    return Err("-c requires an expression".to_string());
                }
                cli.input = Input::Command(args[i + 1..].join(" "));
                break;
            }
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                cli.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--json" => {
                cli.json = true;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            "-" => {
                cli.input = Input::Stdin;
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {}", flag));
            }
            path => {
                cli.input = Input::File(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(cli)
}

pub(crate) fn print_help() {
    println!(
        r#"seedexpr {} - evaluate seed cell expressions

USAGE:
    seedexpr -c <expr>          Evaluate a single expression
    seedexpr <file>             Evaluate each line of a file
    seedexpr [-]                Evaluate each line of stdin
    seedexpr --help             Show this help message
    seedexpr --version          Show version

OPTIONS:
    --json                      Print values as JSON
    --config <path>             Use this config file instead of ~/.seedexpr.toml

SYNTAX:
    'text' or "text"            Literal
    name arg1 arg2              Function call
    stage | stage | stage       Pipe: previous value is the last argument

FUNCTIONS:
    hash <text>                 SHA-256 as hex
    bcrypt <password> [cost]    bcrypt hash (cost 4-31, default 10)
    now                         Current UTC time (RFC 3339)
    uuid [seed]                 Random UUID, or stable UUID from seed
    upper <text>                Uppercase (loader function)
    future <n><s|m|h|d|w>       UTC time in the future (loader function)

Lines that are blank or start with '#' are skipped.
Set SEEDEXPR_LOG (e.g. SEEDEXPR_LOG=seedexpr=trace) to enable logging."#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("seedexpr {}", VERSION);
}

/// Format a value for output
pub(crate) fn render(value: &Value, json: bool) -> String {
    if json {
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    } else {
        value.to_string()
    }
}

/// Evaluate every expression in `reader`, one per line
///
/// Stops at the first failing line and reports it as `<source>:<line>: <error>`.
pub(crate) fn eval_lines<R: BufRead, W: Write>(
    eval: &Evaluator,
    reader: R,
    out: &mut W,
    source: &str,
    json: bool,
) -> Result<(), String> {
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("{}: {}", source, e))?;
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let value = eval
            .eval(trimmed)
            .map_err(|e| format!("{}:{}: {}", source, line_num + 1, e))?;
        writeln!(out, "{}", render(&value, json)).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Run the selected input mode
pub(crate) fn run(eval: &Evaluator, cli: &CliArgs) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.input {
        Input::Command(expr) => {
            let value = eval.eval(expr).map_err(|e| e.to_string())?;
            writeln!(out, "{}", render(&value, cli.json)).map_err(|e| e.to_string())
        }
        Input::File(path) => {
            let file = fs::File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
            let source = path.display().to_string();
            eval_lines(eval, io::BufReader::new(file), &mut out, &source, cli.json)
        }
        Input::Stdin => {
            let stdin = io::stdin();
            eval_lines(eval, stdin.lock(), &mut out, "<stdin>", cli.json)
        }
    }
}
