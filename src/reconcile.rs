//! Numeral reconciliation between the two sides of a catalog entry.
//!
//! Both extractors run independently; this module compares their sets
//! and classifies the disagreement. The decision order matters: the
//! cheap verdicts (empty, equal) come first, era validation can veto
//! everything else, and two-sided disagreements are never auto-excused
//! by one-directional conventions like implied denominations.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Variant;
use crate::calendar;
use crate::chinese;
use crate::english;

// "ND" marks an undated catalog entry.
static RE_ND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bND\b").expect("nd regex"));

// Traditional weight units on the English side.
static RE_EN_WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:mace|candareen|tael|cash|li)\b").expect("weight regex")
});

const CN_WEIGHT_MARKERS: &[char] = &['錢', '钱', '分', '兩', '两', '文', '厘'];

/// Outcome classification for one reconciled text pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    NoNumbers,
    Match,
    EraMismatch,
    HardMismatch,
    Acceptable,
    YearMismatch,
    DenominationMismatch,
    Mismatch,
}

impl Status {
    pub fn name(self) -> &'static str {
        match self {
            Status::NoNumbers => "NO_NUMBERS",
            Status::Match => "MATCH",
            Status::EraMismatch => "ERA_MISMATCH",
            Status::HardMismatch => "HARD_MISMATCH",
            Status::Acceptable => "ACCEPTABLE",
            Status::YearMismatch => "YEAR_MISMATCH",
            Status::DenominationMismatch => "DENOMINATION_MISMATCH",
            Status::Mismatch => "MISMATCH",
        }
    }
}

/// The result of reconciling one Chinese/English text pair.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub is_match: bool,
    pub chinese_numbers: BTreeSet<String>,
    pub english_numbers: BTreeSet<String>,
    pub status: Status,
    pub notes: String,
}

fn sorted(set: &BTreeSet<String>) -> Vec<&String> {
    set.iter().collect()
}

/// Years and year-range literals are forgivable once a Republic year or
/// era has been corroborated; everything else is substance.
fn is_year_like(token: &str, variant: Variant) -> bool {
    let (lo, hi) = english::year_window(variant);
    match token.parse::<u64>() {
        Ok(n) => n >= lo && n <= hi,
        // Non-numeric tokens are year-range literals
        Err(_) => true,
    }
}

/// Compare the numeral content of a bilingual description pair.
///
/// Deterministic and pure: the same pair always yields the same verdict.
pub fn reconcile(chinese_text: &str, english_text: &str, variant: Variant) -> Verdict {
    let cn = chinese::extract(chinese_text, variant);
    let en = english::extract(english_text, variant);
    let english_all = en.all_numbers();

    let verdict = |is_match: bool, status: Status, notes: String, cn_nums: &BTreeSet<String>| {
        Verdict {
            is_match,
            chinese_numbers: cn_nums.clone(),
            english_numbers: english_all.clone(),
            status,
            notes,
        }
    };

    // 1. Nothing to compare.
    if cn.numbers.is_empty() && english_all.is_empty() {
        return verdict(
            true,
            Status::NoNumbers,
            "No numerals in either text".to_string(),
            &cn.numbers,
        );
    }

    // 2. Exact agreement.
    if cn.numbers == english_all {
        return verdict(
            true,
            Status::Match,
            "All numerals align".to_string(),
            &cn.numbers,
        );
    }

    // 3. An era name in the Chinese text must be corroborated by an
    //    English year; a failed era check vetoes everything below.
    let mut era_ok = false;
    if let Some(&name) = cn.era_names.first() {
        match calendar::era_candidates(name) {
            None => {
                return verdict(
                    false,
                    Status::EraMismatch,
                    format!("Unknown era name {name}"),
                    &cn.numbers,
                );
            }
            Some([a, b]) => {
                if en.years.contains(&a.to_string()) || en.years.contains(&b.to_string()) {
                    era_ok = true;
                } else {
                    return verdict(
                        false,
                        Status::EraMismatch,
                        format!(
                            "Era {name} means {a} or {b}, but English years are {:?}",
                            sorted(&en.years)
                        ),
                        &cn.numbers,
                    );
                }
            }
        }
    }

    // 4. What each side has that the other lacks.
    let mut chinese_extra: BTreeSet<String> =
        cn.numbers.difference(&english_all).cloned().collect();
    let mut english_extra: BTreeSet<String> =
        english_all.difference(&cn.numbers).cloned().collect();

    let republic_match = cn.republic_years.intersection(&en.years).next().is_some();

    // 5. Extras on both sides cannot be explained by a one-directional
    //    convention. Only a corroborated banknote Republic year may
    //    excuse stray year tokens.
    if !chinese_extra.is_empty() && !english_extra.is_empty() {
        if variant == Variant::Banknote && republic_match {
            let cn_rest: Vec<&String> = chinese_extra
                .iter()
                .filter(|t| !is_year_like(t, variant))
                .collect();
            let en_rest: Vec<&String> = english_extra
                .iter()
                .filter(|t| !is_year_like(t, variant))
                .collect();
            if cn_rest.is_empty() || en_rest.is_empty() {
                return verdict(
                    true,
                    Status::Acceptable,
                    "Republic year corroborated; remaining differences are year phrasing"
                        .to_string(),
                    &cn.numbers,
                );
            }
        }
        return verdict(
            false,
            Status::HardMismatch,
            format!(
                "Chinese extra: {:?}, English extra: {:?}",
                sorted(&chinese_extra),
                sorted(&english_extra)
            ),
            &cn.numbers,
        );
    }

    // 6. Chinese denomination nouns conventionally carry an implicit 1.
    if variant == Variant::Coin
        && english_extra.is_empty()
        && chinese_extra.len() == 1
        && chinese_extra.contains("1")
    {
        return verdict(
            true,
            Status::Acceptable,
            "Chinese correctly adds implied 1".to_string(),
            &cn.numbers,
        );
    }

    // 7. Undated entries are allowed asymmetric numerals.
    if RE_ND.is_match(english_text)
        && (chinese_extra.is_empty() || english_extra.is_empty())
    {
        return verdict(
            true,
            Status::Acceptable,
            "ND entry allows asymmetric numerals".to_string(),
            &cn.numbers,
        );
    }

    // 8. A corroborated Republic year or era excuses stray year tokens;
    //    an uncorroborated Republic year is a dating error.
    if variant == Variant::Coin {
        if republic_match || era_ok {
            chinese_extra.retain(|t| !is_year_like(t, variant));
            english_extra.retain(|t| !is_year_like(t, variant));
            if chinese_extra.is_empty() && english_extra.is_empty() {
                return verdict(
                    true,
                    Status::Acceptable,
                    "Dating corroborated; remaining differences are year phrasing".to_string(),
                    &cn.numbers,
                );
            }
        } else if !cn.republic_years.is_empty() {
            return verdict(
                false,
                Status::YearMismatch,
                format!(
                    "Republic years {:?} not found among English years {:?}",
                    sorted(&cn.republic_years),
                    sorted(&en.years)
                ),
                &cn.numbers,
            );
        }
    }

    // 9. Explicit weight expressions on both sides must agree exactly.
    if variant == Variant::Coin
        && chinese_text.contains(CN_WEIGHT_MARKERS)
        && RE_EN_WEIGHT.is_match(english_text)
    {
        return verdict(
            false,
            Status::DenominationMismatch,
            format!(
                "Weight values differ. Chinese extra: {:?}, English extra: {:?}",
                sorted(&chinese_extra),
                sorted(&english_extra)
            ),
            &cn.numbers,
        );
    }

    // 10. One-sided leftover with no excuse.
    let mut notes = String::new();
    if !chinese_extra.is_empty() {
        notes.push_str(&format!("Chinese extra: {:?}. ", sorted(&chinese_extra)));
    }
    if !english_extra.is_empty() {
        notes.push_str(&format!("English extra: {:?}. ", sorted(&english_extra)));
    }
    verdict(
        false,
        Status::Mismatch,
        notes.trim_end().to_string(),
        &cn.numbers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(chinese: &str, english: &str, variant: Variant) -> Verdict {
        reconcile(chinese, english, variant)
    }

    #[test]
    fn test_both_empty_is_no_numbers() {
        let v = check("大清銀幣", "Silver Coin", Variant::Coin);
        assert_eq!(v.status, Status::NoNumbers);
        assert!(v.is_match);
    }

    #[test]
    fn test_banknote_republic_date_match() {
        let v = check("民國三年交通銀行壹佰圓", "100 Yuan, 1.10.1914", Variant::Banknote);
        assert_eq!(v.status, Status::Match);
        assert!(v.is_match);
        assert!(v.chinese_numbers.contains("1914"));
        assert!(v.chinese_numbers.contains("100"));
        assert_eq!(v.chinese_numbers, v.english_numbers);
    }

    #[test]
    fn test_banknote_lot_enumeration_match() {
        let v = check(
            "民國七年中國銀行壹，伍 & 拾圓。三張",
            "Lot of (3). 1, 5, & 10 Dollars, 1918",
            Variant::Banknote,
        );
        assert_eq!(v.status, Status::Match);
        let expected: BTreeSet<String> =
            ["1918", "1", "5", "10", "3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(v.chinese_numbers, expected);
        assert_eq!(v.english_numbers, expected);
    }

    #[test]
    fn test_coin_weight_values_match() {
        let v = check(
            "光绪三年广东省造库平七钱二分",
            "Kuang Hsu, Year 3, 7 Mace 2 Candareen",
            Variant::Coin,
        );
        assert_eq!(v.status, Status::Match);
        assert!(v.is_match);
    }

    #[test]
    fn test_coin_weight_value_conflict() {
        let v = check(
            "光绪三年广东省造库平七钱二分",
            "Kuang Hsu, Year 3, 7 Mace 4 Candareen",
            Variant::Coin,
        );
        // 2 vs 4: extras on both sides, never auto-excused
        assert!(!v.is_match);
        assert_eq!(v.status, Status::HardMismatch);
    }

    #[test]
    fn test_coin_missing_weight_value_is_denomination_mismatch() {
        let v = check("光绪三年广东省造库平七钱二分", "Kuang Hsu, Year 3, 7 Mace", Variant::Coin);
        assert!(!v.is_match);
        assert_eq!(v.status, Status::DenominationMismatch);
    }

    #[test]
    fn test_era_corroborated_by_english_year() {
        let v = check("庚子京局製造光緒元寶七錢二分", "Kingkuo, 1900, 7 Mace 2 Candareens", Variant::Coin);
        assert!(v.is_match);
        assert_eq!(v.status, Status::Acceptable);
    }

    #[test]
    fn test_era_mismatch_vetoes() {
        let v = check("庚子京局製造光緒元寶", "Pattern Dollar, 1925", Variant::Coin);
        assert_eq!(v.status, Status::EraMismatch);
        assert!(!v.is_match);
        assert!(v.notes.contains("庚子"));
    }

    #[test]
    fn test_implied_one_from_chinese_side() {
        let v = check("大清銀幣壹圓", "Silver Dollar Pattern", Variant::Coin);
        // Chinese 1 vs English implied 1
        assert_eq!(v.status, Status::Match);
    }

    #[test]
    fn test_chinese_extra_one_acceptable() {
        let v = check("戶部光緒元寶當制錢文 壹枚", "Hu Poo, Cash Coin", Variant::Coin);
        assert!(v.is_match);
    }

    #[test]
    fn test_nd_allows_asymmetry() {
        let v = check("中國聯合準備銀行伍圓", "5 Yuan, ND (1938)", Variant::Banknote);
        // 1938 extra on the English side only
        assert!(v.is_match);
        assert_eq!(v.status, Status::Acceptable);
    }

    #[test]
    fn test_hard_mismatch_on_two_sided_extras() {
        let v = check("民國十年壹圓", "5 Dollars, 1922", Variant::Coin);
        assert!(!v.is_match);
        assert_eq!(v.status, Status::HardMismatch);
        assert!(v.notes.contains("Chinese extra"));
        assert!(v.notes.contains("English extra"));
    }

    #[test]
    fn test_coin_republic_year_mismatch() {
        let v = check("民國三年壹圓", "Dollar, 1915", Variant::Coin);
        assert!(!v.is_match);
        // 1914 vs 1915: both sides carry an extra, detected first
        assert_eq!(v.status, Status::HardMismatch);
    }

    #[test]
    fn test_coin_republic_year_missing_from_english() {
        let v = check("民國三年壹圓", "Dollar", Variant::Coin);
        assert!(!v.is_match);
        assert_eq!(v.status, Status::YearMismatch);
        assert!(v.notes.contains("1914"));
    }

    #[test]
    fn test_banknote_republic_match_forgives_stray_years() {
        let v = check(
            "民國三十年中央銀行拾圓。1942年版",
            "10 Yuan, 1941. Printed 1943",
            Variant::Banknote,
        );
        // 1942 vs 1943 extras are both year tokens and the Republic
        // year itself is corroborated, so the pair is acceptable
        assert!(v.is_match);
        assert_eq!(v.status, Status::Acceptable);
    }

    #[test]
    fn test_mismatch_notes_list_extras() {
        let v = check("伍圓紙幣", "10 Yuan, ND", Variant::Banknote);
        // ND present but both sides have an extra, so no forgiveness
        assert!(!v.is_match);
    }

    #[test]
    fn test_deterministic() {
        let a = check("民國三年壹圓", "Dollar, 1914", Variant::Coin);
        let b = check("民國三年壹圓", "Dollar, 1914", Variant::Coin);
        assert_eq!(a.status, b.status);
        assert_eq!(a.chinese_numbers, b.chinese_numbers);
        assert_eq!(a.notes, b.notes);
    }
}
