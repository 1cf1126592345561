mod calendar;
mod chinese;
mod english;
mod mint;
mod numeral;
mod reconcile;
mod report;
mod textnorm;
mod traditional;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use mint::MintTable;

/// Catalog material category; extraction vocabulary differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Coin,
    Banknote,
}

#[derive(Parser)]
#[command(
    name = "numis_audit",
    about = "Bilingual numismatic catalog data-quality auditor"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit a CSV export: numeral reconciliation, simplified-character
    /// screening and optional mint-name checking → JSON report
    Check {
        /// Path to the catalog CSV (first column is the inventory id)
        input: PathBuf,
        /// Header of the Chinese description column
        #[arg(long)]
        chinese_col: String,
        /// Header of the English description column
        #[arg(long)]
        english_col: String,
        #[arg(long, value_enum, default_value = "coin")]
        variant: Variant,
        /// Official mint-name reference CSV; enables the mint audit
        #[arg(long)]
        mints: Option<PathBuf>,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Reconcile a single description pair and print the verdict
    Row {
        /// Chinese description text
        #[arg(long)]
        chinese: String,
        /// English description text
        #[arg(long)]
        english: String,
        #[arg(long, value_enum, default_value = "coin")]
        variant: Variant,
    },
    /// Cross-check mint names only → JSON correction list
    Mints {
        /// Path to the catalog CSV
        input: PathBuf,
        /// Official mint-name reference CSV
        #[arg(long)]
        mints: PathBuf,
        #[arg(long)]
        chinese_col: String,
        #[arg(long)]
        english_col: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            input,
            chinese_col,
            english_col,
            variant,
            mints,
            output,
        } => run_check(&input, &chinese_col, &english_col, variant, mints.as_deref(), output.as_deref()),
        Command::Row {
            chinese,
            english,
            variant,
        } => run_row(&chinese, &english, variant),
        Command::Mints {
            input,
            mints,
            chinese_col,
            english_col,
        } => run_mints(&input, &mints, &chinese_col, &english_col),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  INPUT HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn read_rows_or_exit(path: &Path, chinese_col: &str, english_col: &str) -> Vec<report::Row> {
    report::read_rows(path, chinese_col, english_col).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_mints_or_exit(path: &Path) -> MintTable {
    let table = MintTable::load(path).unwrap_or_else(|e| {
        eprintln!("Cannot load mint table {}: {e}", path.display());
        std::process::exit(1);
    });
    if table.is_empty() {
        eprintln!("Mint table {} has no entries", path.display());
        std::process::exit(1);
    }
    eprintln!("Loaded {} official mint names", table.len());
    table
}

fn emit_json<T: serde::Serialize>(data: &T, output: Option<&Path>) {
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
            eprintln!("  {} ({} bytes)", path.display(), json.len());
        }
        None => println!("{json}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  CHECK MODE: full audit of a catalog CSV
// ═══════════════════════════════════════════════════════════════════════

fn run_check(
    input: &Path,
    chinese_col: &str,
    english_col: &str,
    variant: Variant,
    mints: Option<&Path>,
    output: Option<&Path>,
) {
    eprintln!("Reading catalog: {}", input.display());
    let rows = read_rows_or_exit(input, chinese_col, english_col);
    eprintln!("Loaded {} rows", rows.len());

    let mint_table = mints.map(load_mints_or_exit);

    let rep = report::build_report(&rows, chinese_col, english_col, variant, mint_table.as_ref());

    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  AUDIT SUMMARY ({variant:?})");
    eprintln!("══════════════════════════════════════════");
    eprintln!("  Rows:               {}", rep.summary.rows);
    eprintln!("  Chinese lots:       {}", rep.summary.chinese_lots);
    eprintln!("  Numeral issues:     {}", rep.summary.translation_issues);
    eprintln!("  Simplified issues:  {}", rep.summary.script_issues);
    if mint_table.is_some() {
        eprintln!("  Mint corrections:   {}", rep.summary.mint_corrections);
    }

    // Status breakdown of the numeral issues
    let mut by_type = std::collections::HashMap::new();
    for issue in &rep.translation_issues {
        *by_type.entry(issue.issue_type.as_str()).or_insert(0usize) += 1;
    }
    if !by_type.is_empty() {
        eprintln!("\nBy issue type:");
        let mut counts: Vec<_> = by_type.iter().collect();
        counts.sort_by_key(|(_, c)| std::cmp::Reverse(**c));
        for (issue_type, count) in counts {
            eprintln!("  {issue_type}: {count}");
        }
    }

    eprintln!();
    emit_json(&rep, output);
}

// ═══════════════════════════════════════════════════════════════════════
//  ROW MODE: one pair in, one verdict out
// ═══════════════════════════════════════════════════════════════════════

fn run_row(chinese: &str, english: &str, variant: Variant) {
    let verdict = reconcile::reconcile(chinese, english, variant);
    eprintln!(
        "{} ({})",
        verdict.status.name(),
        if verdict.is_match { "PASS" } else { "FAIL" }
    );
    emit_json(&verdict, None);
}

// ═══════════════════════════════════════════════════════════════════════
//  MINTS MODE: mint-name corrections only
// ═══════════════════════════════════════════════════════════════════════

fn run_mints(input: &Path, mints: &Path, chinese_col: &str, english_col: &str) {
    let rows = read_rows_or_exit(input, chinese_col, english_col);
    let table = load_mints_or_exit(mints);

    let corrections = report::audit_mints(&rows, &table);

    let (mut missing, mut minor, mut major) = (0usize, 0usize, 0usize);
    for c in &corrections {
        match c.change {
            mint::ChangeKind::Missing => missing += 1,
            mint::ChangeKind::Minor => minor += 1,
            mint::ChangeKind::Major => major += 1,
        }
    }
    eprintln!(
        "{} corrections ({} missing, {} minor, {} major) across {} rows",
        corrections.len(),
        missing,
        minor,
        major,
        rows.len()
    );

    emit_json(&corrections, None);
}
