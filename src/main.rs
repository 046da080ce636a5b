use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use strider::error::StriderError;
use strider::input::Text;
use strider::types::{Algorithm, ScanStats};
use strider::visual::StepTrace;
use strider::{format, scan};

/// strider — exact substring search, three classic ways.
/// Brute force, Boyer-Moore, Boyer-Moore-Horspool. Byte positions out.
#[derive(Parser)]
#[command(
    name = "strider",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STRIDER_BUILD_COMMIT"), ")"),
    about
)]
struct Cli {
    /// Pattern to search for.
    pattern: Option<String>,

    /// Text to search. Omit to read it from stdin.
    text: Option<String>,

    /// Search this file instead of inline text.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Matching method: bf (brute force), bm (Boyer-Moore), bmh (Horspool).
    #[arg(long, default_value = "bmh")]
    method: Algorithm,

    /// Show every alignment the scan tries.
    #[arg(long)]
    steps: bool,

    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// Read a text once, then search it repeatedly from a prompt.
    #[arg(long, short)]
    interactive: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "strider", &mut io::stdout());
        return;
    }

    // Interactive mode: text once, patterns until an empty line.
    if cli.interactive {
        if let Err(e) = interactive(cli.method) {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
        return;
    }

    let Some(pattern) = cli.pattern else {
        usage_exit();
    };

    // No inline text, no file, nothing piped in: nothing to search.
    if cli.text.is_none() && cli.file.is_none() && io::stdin().is_terminal() {
        usage_exit();
    }

    let text = match load_text(cli.text, cli.file.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    };

    match run_search(text.as_bytes(), pattern.as_bytes(), cli.method, cli.steps, cli.json) {
        // grep convention: 0 found, 1 not found.
        Ok(found) => process::exit(i32::from(found.is_none())),
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}

fn usage_exit() -> ! {
    eprintln!("usage: strider <pattern> [text] [--file PATH] [--method bf|bm|bmh]");
    process::exit(3);
}

/// Resolve the text source: file beats inline, inline beats stdin.
fn load_text(inline: Option<String>, file: Option<&Path>) -> Result<Text, StriderError> {
    if let Some(path) = file {
        return Text::from_file(path);
    }
    if let Some(text) = inline {
        return Ok(Text::from(text));
    }
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|e| StriderError::Io {
            path: PathBuf::from("stdin"),
            source: e,
        })?;
    Ok(Text::from(buf))
}

/// Run one search and print the outcome.
fn run_search(
    text: &[u8],
    pattern: &[u8],
    method: Algorithm,
    steps: bool,
    json: bool,
) -> Result<Option<usize>, StriderError> {
    let mut stats = ScanStats::default();

    let found = if steps {
        let mut trace = (StepTrace::new(text, pattern), ScanStats::default());
        let found = scan::find_traced(method, text, pattern, &mut trace)?;
        let (step_trace, counted) = trace;
        stats = counted;
        print!("{}", step_trace.into_output());
        found
    } else {
        scan::find_traced(method, text, pattern, &mut stats)?
    };

    if json {
        let out = serde_json::json!({
            "pattern": String::from_utf8_lossy(pattern),
            "method": method.to_string(),
            "found": found.is_some(),
            "position": found,
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out)
                .expect("serde_json::Value is always serializable")
        );
    } else {
        println!("{}", format::result_line(text, found, method, stats));
        if let Some(pos) = found {
            println!("{}", format::highlight(text, pos, pattern.len()));
        }
    }

    Ok(found)
}

/// Session loop: read the text once, then prompt for patterns until an empty
/// one. Every search is visualized — this mode exists to watch the scan.
/// A pattern longer than the text is reported and the loop continues.
fn interactive(default_method: Algorithm) -> Result<(), StriderError> {
    let io_err = |e| StriderError::Io {
        path: PathBuf::from("stdin"),
        source: e,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("text: ");
    io::stdout().flush().map_err(io_err)?;
    let Some(text) = lines.next().transpose().map_err(io_err)? else {
        return Ok(());
    };

    loop {
        print!("\npattern (empty to quit): ");
        io::stdout().flush().map_err(io_err)?;
        let Some(pattern) = lines.next().transpose().map_err(io_err)? else {
            return Ok(());
        };
        if pattern.is_empty() {
            return Ok(());
        }

        print!("method [bf/bm/bmh, default {default_method}]: ");
        io::stdout().flush().map_err(io_err)?;
        let answer = lines.next().transpose().map_err(io_err)?.unwrap_or_default();
        let method = if answer.trim().is_empty() {
            default_method
        } else {
            match answer.trim().parse() {
                Ok(method) => method,
                Err(reason) => {
                    eprintln!("{reason}");
                    continue;
                }
            }
        };

        match run_search(text.as_bytes(), pattern.as_bytes(), method, true, false) {
            Ok(_) => {}
            // Keep the session alive on a bad pattern; only I/O ends it.
            Err(e @ StriderError::Io { .. }) => return Err(e),
            Err(e) => eprintln!("{e}"),
        }
    }
}
