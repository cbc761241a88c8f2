use anyhow::{Error, Result};
use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream};

use ipgrep::{files, input, report, Report, Scanner};

const INPUT_HELP: &str = "\
ipgrep accepts text files in any format (newline-delimited, JSON, YAML, etc.) so
long as the addresses are separated either by whitespace or by any punctuation
character other than '.' or ':'.

For example, these are all valid input:

    10.10.10.2 https://webserver.com
    {\"ip\": \"172.16.2.84\"}
    log -> time=13:10, event=foo, addr=192.168.0.2, desc=\"a foo went bar\"
    IP address 8.8.8.8 is for Google DNS.

ipgrep extracts 10.10.10.2, 172.16.2.84, 192.168.0.2 and 8.8.8.8 from the above.
Given this input, however:

    There's no place like 127.0.0.1.

ipgrep extracts nothing: the final '.' makes the word an invalid address.";

/// Check if the error chain contains a broken pipe error.
#[inline(always)]
fn is_broken_pipe(err: &Error) -> bool {
    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                return true;
            }
        }
    }
    false
}

/// Scan one or more input files for valid IPv4 or IPv6 addresses and print them
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = None,
    after_long_help = INPUT_HELP,
    disable_help_flag = true
)]
struct Args {
    /// Use color for error messages
    #[clap(short = 'C', long, value_enum, default_value_t = ArgsColorChoice::Auto)]
    color: ArgsColorChoice,

    /// Print one JSON object per input file instead of text blocks
    #[clap(long)]
    json: bool,

    /// Input file(s) to scan. Use "-" to read from stdin
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    input: Vec<Utf8PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum ArgsColorChoice {
    Always,
    Never,
    Auto,
}

/// No arguments at all, or a help flag in first position.
fn wants_help(argv: &[OsString]) -> bool {
    match argv.get(1) {
        None => true,
        Some(first) => matches!(first.to_str(), Some("-h" | "-help" | "--help")),
    }
}

/// First line of a clap error, without clap's own `error: ` prefix.
fn usage_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn print_help() -> ExitCode {
    let help = Args::command().render_long_help();
    // Nothing sensible to do if stderr itself is gone.
    let _ = write!(&mut io::stderr(), "{}", help);
    ExitCode::SUCCESS
}

fn auto_color() -> ColorChoice {
    if io::stderr().is_terminal() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

fn main() -> ExitCode {
    let argv: Vec<OsString> = std::env::args_os().collect();
    if wants_help(&argv) {
        return print_help();
    }
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage errors share the fatal error path: one line, exit 1
            let mut stderr = StandardStream::stderr(auto_color());
            if report::write_error(&mut stderr, usage_error_message(&err)).is_err() {
                eprintln!("{}: error: {}", report::PROG, usage_error_message(&err));
            }
            return ExitCode::FAILURE;
        }
    };
    if args.input.is_empty() {
        return print_help();
    }

    // determine appropriate colormode. auto simply
    // tests if stderr is a tty (if so, then yes color)
    let colormode = match args.color {
        ArgsColorChoice::Auto => auto_color(),
        ArgsColorChoice::Always => ColorChoice::Always,
        ArgsColorChoice::Never => ColorChoice::Never,
    };

    let err = match run(args, colormode) {
        Ok(()) => return ExitCode::SUCCESS,
        Err(err) => err,
    };

    // Handle broken pipe errors gracefully
    if is_broken_pipe(&err) {
        return ExitCode::SUCCESS;
    }

    let mut stderr = StandardStream::stderr(colormode);
    let printed = if std::env::var("RUST_BACKTRACE").is_ok_and(|v| v == "1") {
        report::write_error(&mut stderr, format_args!("{:?}", err))
    } else {
        report::write_error(&mut stderr, format_args!("{:#}", err))
    };
    if printed.is_err() {
        eprintln!("{}: error: {:#}", report::PROG, err);
    }

    ExitCode::FAILURE
}

fn run(args: Args, colormode: ColorChoice) -> Result<()> {
    let scanner = Scanner::new()?;

    // Every input must open before any scanning starts
    let sources = input::open_all(&args.input)?;
    let report = Report::new(files::scan_sources(&scanner, sources));

    let mut out = io::BufWriter::with_capacity(65536, io::stdout().lock());
    if args.json {
        report.write_json(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    // Show successfully extracted addresses first; display errors later.
    report.write_results(&mut out)?;
    out.flush()?;

    let mut stderr = StandardStream::stderr(colormode);
    report.write_errors(&mut stderr)?;
    Ok(())
}
