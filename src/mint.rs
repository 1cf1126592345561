//! Mint-name cross-checking between English and Chinese descriptions.
//!
//! The reference table pairs each official English mint name with its
//! official Chinese rendering. An English mint reference is trusted
//! only when it sits in its own period-delimited segment after the
//! date, with no uncertainty hedging anywhere in the text.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Hedged attributions are never auto-corrected.
static RE_UNCERTAINTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:uncertain|likely|probably|possibly|maybe|perhaps|or|either|unknown|unidentified|attributed|tentative)\b",
    )
    .expect("uncertainty regex")
});

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").expect("year regex"));

// Chinese mint name as written in catalog text, longest form first.
// e.g. 天津造幣總廠 / 廣東造幣廠 / 奉天機器局鑄幣廠 / 寶德局
static RE_CN_MINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?:[^。，\\s]{2,15}造幣廠|[^。，\\s]{2,15}鑄幣廠|造幣總廠|寶德局)")
        .expect("chinese mint regex")
});

/// One official English↔Chinese mint name pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct MintRecord {
    #[serde(rename = "English Mint Name")]
    pub english: String,
    #[serde(rename = "Chinese Mint Name")]
    pub chinese: String,
}

struct MintEntry {
    record: MintRecord,
    // Whole-word match on the English name
    pattern: Regex,
}

/// The official mint-name reference table.
pub struct MintTable {
    entries: Vec<MintEntry>,
}

impl MintTable {
    /// Load the table from a two-column CSV reference file.
    pub fn load(path: &Path) -> Result<Self, csv::Error> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let mut record: MintRecord = row?;
            record.english = record.english.trim().to_string();
            record.chinese = record.chinese.trim().to_string();
            if record.english.is_empty() {
                continue;
            }
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&record.english)))
                .unwrap_or_else(|e| panic!("mint name pattern for {}: {e}", record.english));
            entries.push(MintEntry { record, pattern });
        }
        Ok(Self { entries })
    }

    #[cfg(test)]
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|&(english, chinese)| MintEntry {
                record: MintRecord {
                    english: english.to_string(),
                    chinese: chinese.to_string(),
                },
                pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(english))).unwrap(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Official Chinese rendering for an exact English mint name.
    pub fn chinese_for(&self, english: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.record.english == english)
            .map(|e| e.record.chinese.as_str())
    }

    /// Find a trustworthy English mint reference in catalog text.
    ///
    /// The name must appear in a period-delimited segment preceded by a
    /// segment carrying a year, and the text must contain no uncertainty
    /// wording (except the literal "Uncertain Mint", which is itself an
    /// official name).
    pub fn find_english_mint(&self, text: &str) -> Option<&MintRecord> {
        if text.is_empty() {
            return None;
        }
        let lower = text.to_lowercase();
        if RE_UNCERTAINTY.is_match(text) && !lower.contains("uncertain mint") {
            return None;
        }

        let segments: Vec<&str> = text.split('.').collect();
        for (i, segment) in segments.iter().enumerate() {
            let segment = segment.trim();
            if i == 0 || segment.is_empty() {
                continue;
            }
            for entry in &self.entries {
                if !entry.pattern.is_match(segment) {
                    continue;
                }
                // The mint segment follows the date by catalog convention
                let dated = segments[..i].iter().any(|s| RE_YEAR.is_match(s));
                if dated {
                    return Some(&entry.record);
                }
            }
        }
        None
    }
}

/// Chinese mint name as currently written in the description, if any.
pub fn current_chinese_mint(chinese_text: &str) -> Option<&str> {
    RE_CN_MINT.find(chinese_text).map(|m| m.as_str())
}

/// Rewrite the Chinese description to carry the official mint name,
/// replacing the current one or appending without doubling the period.
pub fn apply_correction(chinese_text: &str, current: Option<&str>, official: &str) -> String {
    match current {
        Some(current) => chinese_text.replace(current, official),
        None => {
            let trimmed = chinese_text.trim();
            if trimmed.ends_with('。') {
                format!("{trimmed}{official}")
            } else {
                format!("{trimmed}。{official}")
            }
        }
    }
}

/// How far the written mint name was from the official one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    /// No Chinese mint name was present at all.
    Missing,
    /// Only the 鑄幣廠 spelling variant differed.
    Minor,
    /// The written name disagrees with the official one.
    Major,
}

pub fn classify_change(current: Option<&str>, official: &str) -> ChangeKind {
    match current {
        None => ChangeKind::Missing,
        Some(current) if current.replace("鑄幣廠", "造幣廠") == official => ChangeKind::Minor,
        Some(_) => ChangeKind::Major,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MintTable {
        MintTable::from_pairs(&[
            ("Tientsin Mint", "天津造幣總廠"),
            ("Canton Mint", "廣東造幣廠"),
            ("Uncertain Mint", "不確定造幣廠"),
        ])
    }

    #[test]
    fn test_mint_found_after_dated_segment() {
        let t = table();
        let found = t.find_english_mint("Pattern Dollar, Year 3 (1914). Tientsin Mint. PCGS SP-63");
        assert_eq!(found.map(|r| r.english.as_str()), Some("Tientsin Mint"));
    }

    #[test]
    fn test_mint_without_preceding_year_is_ignored() {
        let t = table();
        assert!(t.find_english_mint("Tientsin Mint. Pattern Dollar").is_none());
    }

    #[test]
    fn test_uncertainty_wording_blocks_match() {
        let t = table();
        assert!(
            t.find_english_mint("Dollar, 1914. Probably Tientsin Mint")
                .is_none()
        );
    }

    #[test]
    fn test_uncertain_mint_is_itself_official() {
        let t = table();
        let found = t.find_english_mint("Cash Coin, 1905. Uncertain Mint");
        assert_eq!(found.map(|r| r.english.as_str()), Some("Uncertain Mint"));
    }

    #[test]
    fn test_current_chinese_mint_patterns() {
        // The head-office form is matched as-is, without a city prefix
        assert_eq!(current_chinese_mint("民國三年袁世凱像壹圓。造幣總廠"), Some("造幣總廠"));
        assert_eq!(current_chinese_mint("光緒元寶。廣東鑄幣廠"), Some("廣東鑄幣廠"));
        assert_eq!(current_chinese_mint("咸豐重寶。寶德局"), Some("寶德局"));
        assert_eq!(current_chinese_mint("光緒元寶七錢二分"), None);
    }

    #[test]
    fn test_apply_correction_replaces_or_appends() {
        assert_eq!(
            apply_correction("光緒元寶。廣東鑄幣廠", Some("廣東鑄幣廠"), "廣東造幣廠"),
            "光緒元寶。廣東造幣廠"
        );
        assert_eq!(
            apply_correction("光緒元寶。", None, "廣東造幣廠"),
            "光緒元寶。廣東造幣廠"
        );
        assert_eq!(
            apply_correction("光緒元寶", None, "廣東造幣廠"),
            "光緒元寶。廣東造幣廠"
        );
    }

    #[test]
    fn test_classify_change() {
        assert_eq!(classify_change(None, "廣東造幣廠"), ChangeKind::Missing);
        assert_eq!(
            classify_change(Some("廣東鑄幣廠"), "廣東造幣廠"),
            ChangeKind::Minor
        );
        assert_eq!(
            classify_change(Some("天津造幣總廠"), "廣東造幣廠"),
            ChangeKind::Major
        );
    }
}
