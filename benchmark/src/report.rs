use serde::Serialize;

#[derive(Serialize)]
pub struct Report {
    pub generated_at: String,
    pub seed: u64,
    pub reps: u32,
    pub corpora: Vec<CorpusReport>,
}

#[derive(Serialize)]
pub struct CorpusReport {
    pub name: &'static str,
    pub text_len: usize,
    pub pattern_count: usize,
    pub methods: Vec<MethodRow>,
}

#[derive(Serialize)]
pub struct MethodRow {
    pub method: String,
    /// Wall time for all patterns × reps.
    pub total_ms: f64,
    /// Patterns that were found (independent of method — they must agree).
    pub found: usize,
    /// Alignments attempted across one untimed traced pass, the work metric
    /// the wall time follows.
    pub alignments: usize,
}

/// Plain table to stdout, one block per corpus.
pub fn print_table(report: &Report) {
    println!(
        "# strider bench — {} (seed {}, {} reps)",
        report.generated_at, report.seed, report.reps
    );
    for corpus in &report.corpora {
        println!(
            "\n## {} ({} bytes, {} patterns)",
            corpus.name, corpus.text_len, corpus.pattern_count
        );
        println!("{:<14} {:>10} {:>12} {:>8}", "method", "total ms", "alignments", "found");
        for row in &corpus.methods {
            println!(
                "{:<14} {:>10.2} {:>12} {:>8}",
                row.method, row.total_ms, row.alignments, row.found
            );
        }
    }
}
