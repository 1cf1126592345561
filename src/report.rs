//! Batch auditing of catalog spreadsheet rows.
//!
//! One row in, structured issue records out. The first spreadsheet
//! column is treated as the inventory identifier; data rows are
//! numbered from 2 so the report matches what the cataloguer sees in
//! their spreadsheet application.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::Variant;
use crate::mint::{self, MintTable};
use crate::reconcile;
use crate::traditional::{self, TextStatus};

// Vocabulary marking a lot as Chinese numismatic material. Rows
// without any of these are someone else's problem.
static CN_LOT_INDICATORS: &[&str] = &[
    "民国", "民國", "光绪", "光緒", "宣统", "宣統", "咸丰", "咸豐", "同治",
    "康熙", "雍正", "乾隆", "中国", "中國", "中华", "中華", "清朝", "大清",
    "户部", "戶部", "官局", "造币", "造幣",
    "文", "圆", "圓", "元", "钱", "錢", "分", "两", "兩", "厘", "角",
    "四川", "福建", "广东", "廣東", "北洋", "湖北", "江南", "奉天",
];

static EN_LOT_INDICATORS: &[&str] = &[
    "CHINA", "CHINESE", "QING", "REPUBLIC OF CHINA", "CASH", "TAEL", "MACE",
];

/// One spreadsheet row as the auditors see it.
#[derive(Debug)]
pub struct Row {
    /// 1-based spreadsheet row number (header row is 1).
    pub line: usize,
    pub inventory: String,
    pub chinese: String,
    pub english: String,
}

/// Read the audited columns out of a CSV export.
pub fn read_rows(
    path: &Path,
    chinese_col: &str,
    english_col: &str,
) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize, csv::Error> {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            csv::Error::from(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("column {name:?} not found in {}", path.display()),
            ))
        })
    };
    let chinese_idx = column(chinese_col)?;
    let english_idx = column(english_col)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let inventory = match field(0) {
            s if s.is_empty() => format!("Row {}", i + 2),
            s => s,
        };
        rows.push(Row {
            line: i + 2,
            inventory,
            chinese: field(chinese_idx),
            english: field(english_idx),
        });
    }
    Ok(rows)
}

/// Does this row describe Chinese numismatic material at all?
pub fn is_chinese_lot(chinese: &str, english: &str) -> bool {
    if chinese.is_empty() {
        return false;
    }
    if CN_LOT_INDICATORS.iter().any(|ind| chinese.contains(ind)) {
        return true;
    }
    let upper = english.to_uppercase();
    EN_LOT_INDICATORS.iter().any(|ind| upper.contains(ind))
}

// ── Issue records ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TranslationIssue {
    pub row: usize,
    pub inventory: String,
    pub column: String,
    pub issue_type: String,
    pub chinese_text: String,
    pub english_text: String,
    pub chinese_numbers: String,
    pub english_numbers: String,
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct ScriptIssue {
    pub row: usize,
    pub inventory: String,
    pub column: String,
    pub text: String,
    pub simplified_count: usize,
    pub suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct MintCorrection {
    pub row: usize,
    pub inventory: String,
    pub change: mint::ChangeKind,
    pub english_mint: String,
    pub english_text: String,
    pub original_chinese: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_mint: Option<String>,
    pub corrected_to: String,
    pub new_chinese: String,
}

fn join(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Reconcile every Chinese lot and report the rows that do not match.
pub fn audit_translations(
    rows: &[Row],
    chinese_col: &str,
    english_col: &str,
    variant: Variant,
) -> Vec<TranslationIssue> {
    let label = match variant {
        Variant::Coin => "COIN_TRANSLATION",
        Variant::Banknote => "BANKNOTE_TRANSLATION",
    };
    let mut issues = Vec::new();
    for row in rows {
        if row.chinese.is_empty() || row.english.is_empty() {
            continue;
        }
        if !is_chinese_lot(&row.chinese, &row.english) {
            continue;
        }
        let verdict = reconcile::reconcile(&row.chinese, &row.english, variant);
        if verdict.is_match {
            continue;
        }
        issues.push(TranslationIssue {
            row: row.line,
            inventory: row.inventory.clone(),
            column: format!("{chinese_col} <-> {english_col}"),
            issue_type: format!("{label}_{}", verdict.status.name()),
            chinese_text: row.chinese.clone(),
            english_text: row.english.clone(),
            chinese_numbers: join(&verdict.chinese_numbers),
            english_numbers: join(&verdict.english_numbers),
            notes: verdict.notes,
        });
    }
    issues
}

/// Flag every Chinese field that carries simplified characters.
pub fn audit_script(rows: &[Row], chinese_col: &str) -> Vec<ScriptIssue> {
    let mut issues = Vec::new();
    for row in rows {
        if let TextStatus::HasSimplified { count } = traditional::text_status(&row.chinese) {
            let suggestions: Vec<String> = traditional::find_simplified(&row.chinese)
                .iter()
                .map(|(s, t)| format!("{s} → {t}"))
                .collect();
            issues.push(ScriptIssue {
                row: row.line,
                inventory: row.inventory.clone(),
                column: chinese_col.to_string(),
                text: row.chinese.clone(),
                simplified_count: count,
                suggestions: suggestions.join(", "),
            });
        }
    }
    issues
}

/// Cross-check mint names and propose corrected Chinese text.
pub fn audit_mints(rows: &[Row], table: &MintTable) -> Vec<MintCorrection> {
    let mut corrections = Vec::new();
    for row in rows {
        // Cheap pre-screen before the per-name scan
        if !row.english.contains("Mint") && !row.english.contains("mint") {
            continue;
        }
        let Some(record) = table.find_english_mint(&row.english) else {
            continue;
        };
        let current = mint::current_chinese_mint(&row.chinese);
        if current == Some(record.chinese.as_str()) {
            continue;
        }
        let corrected = mint::apply_correction(&row.chinese, current, &record.chinese);
        corrections.push(MintCorrection {
            row: row.line,
            inventory: row.inventory.clone(),
            change: mint::classify_change(current, &record.chinese),
            english_mint: record.english.clone(),
            english_text: row.english.clone(),
            original_chinese: row.chinese.clone(),
            current_mint: current.map(str::to_string),
            corrected_to: record.chinese.clone(),
            new_chinese: corrected,
        });
    }
    corrections
}

// ── Report assembly ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub chinese_lots: usize,
    pub translation_issues: usize,
    pub script_issues: usize,
    pub mint_corrections: usize,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub summary: Summary,
    pub translation_issues: Vec<TranslationIssue>,
    pub script_issues: Vec<ScriptIssue>,
    pub mint_corrections: Vec<MintCorrection>,
}

/// Run every audit over the rows and assemble the full report.
pub fn build_report(
    rows: &[Row],
    chinese_col: &str,
    english_col: &str,
    variant: Variant,
    mints: Option<&MintTable>,
) -> Report {
    let translation_issues = audit_translations(rows, chinese_col, english_col, variant);
    let script_issues = audit_script(rows, chinese_col);
    let mint_corrections = match mints {
        Some(table) => audit_mints(rows, table),
        None => Vec::new(),
    };
    let chinese_lots = rows
        .iter()
        .filter(|r| is_chinese_lot(&r.chinese, &r.english))
        .count();
    Report {
        variant,
        summary: Summary {
            rows: rows.len(),
            chinese_lots,
            translation_issues: translation_issues.len(),
            script_issues: script_issues.len(),
            mint_corrections: mint_corrections.len(),
        },
        translation_issues,
        script_issues,
        mint_corrections,
    }
}
