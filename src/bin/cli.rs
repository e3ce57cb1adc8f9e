use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser as ClapParser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hstspreload::{
    check_header_bytes_with_config, check_response_head_with_config, format_header,
    format_json, format_parse_json, format_text, parse_header_bytes_with_config, Issues,
    ParserConfig,
};

/// hstspreload CLI: check a Strict-Transport-Security header against the
/// HSTS preload-list requirements.
///
/// Reads a header value (or, with `--mode response`, a raw HTTP response
/// head) from a file, --raw string, or stdin, and prints every issue found.
///
/// Escape sequences (\r, \n, \t, \\) in the --raw value are interpreted so
/// you can pass a full response head as a single shell argument.
///
/// Exit status: 0 when no errors were found, 2 when the header has errors,
/// 1 when the input could not be read.
#[derive(ClapParser)]
#[command(name = "hstspreload-cli", version, about, long_about = None)]
struct Cli {
    /// Path to a file containing the input.
    /// Reads from stdin when neither FILE nor --raw is given.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Raw input string (escape sequences \r \n \t \\ are expanded).
    #[arg(long)]
    raw: Option<String>,

    /// What to do with the input.
    #[arg(short, long, default_value = "check", value_enum)]
    mode: Mode,

    /// Output format.
    #[arg(short, long, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Pretty-print JSON output (ignored for other formats).
    #[arg(short, long)]
    pretty: bool,

    /// Maximum accepted header value size in bytes.
    #[arg(long, default_value = "8192")]
    max_header_len: usize,

    /// Maximum accepted response head size in bytes (response mode).
    #[arg(long, default_value = "65536")]
    max_response_head_len: usize,

    /// Log parser and checker activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Parse the header value and check the preload requirements
    Check,
    /// Only parse the header value; print the record and syntax issues
    Parse,
    /// Extract the HSTS header from a raw response head and check it
    Response,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One labelled diagnostic per line
    Text,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // When no input source is provided and stdin is a terminal (not piped),
    // show help instead of blocking.
    if cli.file.is_none() && cli.raw.is_none() && std::io::stdin().is_terminal() {
        Cli::command().print_help().ok();
        println!();
        process::exit(0);
    }

    let data = match read_input(&cli) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            process::exit(1);
        }
    };
    debug!(bytes = data.len(), mode = ?cli.mode, "read input");

    let config = ParserConfig {
        max_header_len: cli.max_header_len,
        max_response_head_len: cli.max_response_head_len,
    };

    let result = match cli.mode {
        Mode::Check => check_header_bytes_with_config(strip_line_ending(&data), &config)
            .map(|issues| (render_issues(&issues, &cli), issues)),
        Mode::Parse => parse_header_bytes_with_config(strip_line_ending(&data), &config).map(
            |(header, issues)| {
                let output = match cli.format {
                    OutputFormat::Json => format_parse_json(&header, &issues, cli.pretty),
                    OutputFormat::Text => {
                        format!("{}{}", format_header(&header), format_text(&issues))
                    }
                };
                (output, issues)
            },
        ),
        Mode::Response => check_response_head_with_config(&data, &config)
            .map(|issues| (render_issues(&issues, &cli), issues)),
    };

    let (output, issues) = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {e}");
            process::exit(1);
        }
    };

    print!("{output}");
    if cli.format == OutputFormat::Json {
        println!();
    }

    if issues.has_errors() {
        process::exit(2);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn render_issues(issues: &Issues, cli: &Cli) -> String {
    match cli.format {
        OutputFormat::Json => format_json(issues, cli.pretty),
        OutputFormat::Text => format_text(issues),
    }
}

/// Read raw bytes from --raw, a file, or stdin.
fn read_input(cli: &Cli) -> Result<Vec<u8>, std::io::Error> {
    if let Some(raw) = &cli.raw {
        return Ok(unescape(raw).into_bytes());
    }
    match &cli.file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Drop the trailing newline a file or `echo` leaves after a header value.
fn strip_line_ending(data: &[u8]) -> &[u8] {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.strip_suffix(b"\r").unwrap_or(data)
}

/// Expand C-style escape sequences (`\r`, `\n`, `\t`, `\\`) in a string.
///
/// Any other `\X` sequence is kept as-is (both the backslash and `X`).
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('r') => out.push('\r'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
