mod corpus;
mod report;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use strider::types::{Algorithm, ScanStats};
use strider::{find, find_traced};

#[derive(Parser)]
#[command(name = "bench", about = "strider matcher comparison")]
struct Cli {
    /// Text size per corpus, bytes
    #[arg(long, default_value_t = 1 << 20)]
    size: usize,

    /// Repetitions per pattern
    #[arg(long, default_value_t = 5)]
    reps: u32,

    /// Corpus RNG seed
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Write the report as JSON to this path instead of printing a table
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let corpora = corpus::all(cli.size, cli.seed);
    let mut report = report::Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        seed: cli.seed,
        reps: cli.reps,
        corpora: Vec::with_capacity(corpora.len()),
    };

    for corpus in &corpora {
        let mut methods = Vec::new();
        for method in Algorithm::ALL {
            methods.push(time_method(method, corpus, cli.reps));
        }
        report.corpora.push(report::CorpusReport {
            name: corpus.name,
            text_len: corpus.text.len(),
            pattern_count: corpus.patterns.len(),
            methods,
        });
    }

    match cli.json {
        Some(path) => {
            let json = serde_json::to_string_pretty(&report)
                .expect("report structs always serialize");
            fs::write(&path, json).unwrap_or_else(|e| {
                eprintln!("{}: {e}", path.display());
                std::process::exit(2);
            });
        }
        None => report::print_table(&report),
    }
}

fn time_method(method: Algorithm, corpus: &corpus::Corpus, reps: u32) -> report::MethodRow {
    // Untimed traced pass for the work metric and hit count.
    let mut stats = ScanStats::default();
    let mut found = 0;
    for pattern in &corpus.patterns {
        if find_traced(method, &corpus.text, pattern, &mut stats)
            .expect("bench patterns are non-empty and fit the text")
            .is_some()
        {
            found += 1;
        }
    }

    let start = Instant::now();
    for _ in 0..reps {
        for pattern in &corpus.patterns {
            std::hint::black_box(
                find(method, &corpus.text, std::hint::black_box(pattern))
                    .expect("bench patterns are non-empty and fit the text"),
            );
        }
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    report::MethodRow {
        method: method.to_string(),
        total_ms,
        found,
        alignments: stats.alignments,
    }
}
