//! Chinese-side numeral extraction.
//!
//! Scans free-form catalog text for every quantity-bearing numeral:
//! Arabic digit runs, compound Chinese numerals bound to unit suffixes,
//! Republic-calendar year expressions, dynasty reign years, and
//! sexagenary era names. Values are normalized to decimal strings so
//! that year-range literals ("1973-79") can live in the same set as
//! plain years and denominations.
//!
//! Real data examples:
//!   民國三年交通銀行壹佰圓
//!   民國七年中國銀行壹，伍 & 拾圓。三張
//!   光绪三年广东省造库平七钱二分
//!   宣統元年大清銀幣

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Variant;
use crate::calendar;
use crate::numeral;
use crate::textnorm::{SpanClaims, strip_thousands_commas};

/// Character class for compound Chinese numerals as written in catalog
/// text: basic digits, formal/banker digits (both scripts), place values,
/// and 元 (which doubles as the "first year" numeral).
const CN_NUM: &str = "[元零一二三四五六七八九十百千萬万壹貳贰叁參肆伍陸陆柒捌玖拾佰仟]";

// Year-range literal: first year 18xx/19xx/20xx, second 2 or 4 digits.
static RE_YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:18|19|20)\d{2}-\d{2}(?:\d{2})?").expect("year range regex"));

static RE_ARABIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("arabic regex"));

// Republic year: 民國/民国 + compound numeral + 年
static RE_REPUBLIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?:民國|民国)({CN_NUM}+)年")).expect("republic regex")
});

// Dynasty reign year: era prefix + compound numeral + 年 (coin catalogs)
static RE_DYNASTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?:光緒|光绪|宣統|宣统|咸豐|咸丰|同治)({CN_NUM}+)年"
    ))
    .expect("dynasty regex")
});

// Compound weight: X錢Y分 yields two values from one span (e.g. 七錢二分)
static RE_WEIGHT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({CN_NUM}+)[錢钱]({CN_NUM}+)分")).expect("weight pair regex")
});

// Numeral(s) bound to a unit suffix. The leading group allows an
// enumeration ("壹，伍 & 拾圓" lists three denominations sharing 圓).
static RE_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "({CN_NUM}+(?:\\s*[，,、&和及]\\s*{CN_NUM}+)*)\\s*(圓|圆|元|角|分|文|厘|錢|钱|兩|两|張|张|枚|件|套|年)"
    ))
    .expect("unit regex")
});

static RE_ENUM_SEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s，,、&和及]+").expect("enum sep regex"));

// Bare multi-character numeral run with no unit.
static RE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{CN_NUM}{{2,}}")).expect("bare numeral regex"));

/// Everything extracted from one Chinese description.
#[derive(Debug, Default, Serialize)]
pub struct ChineseExtraction {
    /// All normalized numeral tokens (years, denominations, counts, ranges).
    pub numbers: BTreeSet<String>,
    /// Western years obtained from Republic-calendar expressions.
    pub republic_years: BTreeSet<String>,
    /// Sexagenary era names found in the text (coin variant only).
    pub era_names: Vec<&'static str>,
}

/// Extract all quantity-bearing numerals from a Chinese description.
///
/// Empty or missing text yields an empty extraction; the function never
/// fails. Spans consumed by a pattern are claimed so that lower-priority
/// patterns do not re-extract the same digits.
pub fn extract(text: &str, variant: Variant) -> ChineseExtraction {
    let mut out = ChineseExtraction::default();
    if text.is_empty() {
        return out;
    }

    let text = strip_thousands_commas(text);
    let mut claims = SpanClaims::new();

    // Republic reign numerals already accounted for as converted years;
    // must not resurface as denominations.
    let mut republic_raw: BTreeSet<String> = BTreeSet::new();

    // 1. Year-range literals are atomic tokens.
    for m in RE_YEAR_RANGE.find_iter(&text) {
        out.numbers.insert(m.as_str().to_string());
        claims.claim(m.start(), m.end());
    }

    // 2. Bare Arabic digit runs outside captured ranges.
    for m in RE_ARABIC.find_iter(&text) {
        if claims.overlaps(m.start(), m.end()) {
            continue;
        }
        out.numbers.insert(m.as_str().to_string());
        claims.claim(m.start(), m.end());
    }

    // 3. Republic-calendar years → Western years.
    for caps in RE_REPUBLIC.captures_iter(&text) {
        let full = caps.get(0).expect("match");
        if claims.overlaps(full.start(), full.end()) {
            continue;
        }
        let raw = numeral::convert(caps.get(1).expect("numeral").as_str());
        if raw == 0 {
            continue;
        }
        let western = calendar::republic_to_western(raw);
        out.numbers.insert(western.to_string());
        out.republic_years.insert(western.to_string());
        republic_raw.insert(raw.to_string());
        claims.claim(full.start(), full.end());
    }

    // 4. Dynasty reign years keep the reign number itself (the English
    //    side writes "Year 3", not a Western year).
    if variant == Variant::Coin {
        for caps in RE_DYNASTY.captures_iter(&text) {
            let full = caps.get(0).expect("match");
            if claims.overlaps(full.start(), full.end()) {
                continue;
            }
            let val = numeral::convert(caps.get(1).expect("numeral").as_str());
            if val == 0 {
                continue;
            }
            out.numbers.insert(val.to_string());
            claims.claim(full.start(), full.end());
        }
    }

    // 5. Compound weights: 七錢二分 yields both 7 and 2.
    if variant == Variant::Coin {
        for caps in RE_WEIGHT_PAIR.captures_iter(&text) {
            let full = caps.get(0).expect("match");
            if claims.overlaps(full.start(), full.end()) {
                continue;
            }
            for idx in [1, 2] {
                let val = numeral::convert(caps.get(idx).expect("numeral").as_str());
                if val > 0 {
                    out.numbers.insert(val.to_string());
                }
            }
            claims.claim(full.start(), full.end());
        }
    }

    // 6. Numerals bound to unit suffixes (possibly enumerated).
    for caps in RE_UNIT.captures_iter(&text) {
        let full = caps.get(0).expect("match");
        if claims.overlaps(full.start(), full.end()) {
            continue;
        }
        let unit = caps.get(2).expect("unit");
        // A bare 元 directly followed by 年 is 元年, not a currency unit.
        if unit.as_str() == "元" && text[unit.end()..].starts_with('年') {
            continue;
        }
        for piece in RE_ENUM_SEP.split(caps.get(1).expect("numerals").as_str()) {
            if piece.is_empty() {
                continue;
            }
            let val = numeral::convert(piece);
            if val > 0 && !republic_raw.contains(&val.to_string()) {
                out.numbers.insert(val.to_string());
            }
        }
        claims.claim(full.start(), full.end());
    }

    // 7. Bare multi-character numeral runs with no unit.
    for m in RE_BARE.find_iter(&text) {
        if claims.overlaps(m.start(), m.end()) {
            continue;
        }
        let val = numeral::convert(m.as_str());
        if val > 0 && !republic_raw.contains(&val.to_string()) {
            out.numbers.insert(val.to_string());
        }
        claims.claim(m.start(), m.end());
    }

    // 8. 元年 outside any claimed era expression still means year 1.
    for (i, s) in text.match_indices("元年") {
        if !claims.overlaps(i, i + s.len()) {
            out.numbers.insert("1".to_string());
        }
    }

    // 9. Era names feed status classification, not the numeral set.
    if variant == Variant::Coin {
        out.era_names = calendar::find_era_names(&text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(text: &str, variant: Variant) -> BTreeSet<String> {
        extract(text, variant).numbers
    }

    fn set(vals: &[&str]) -> BTreeSet<String> {
        vals.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_republic_year_converted_to_western() {
        let got = extract("民國三年交通銀行壹佰圓", Variant::Banknote);
        assert_eq!(got.numbers, set(&["1914", "100"]));
        assert_eq!(got.republic_years, set(&["1914"]));
    }

    #[test]
    fn test_enumerated_denominations_share_unit() {
        let got = numbers("民國七年中國銀行壹，伍 & 拾圓。三張", Variant::Banknote);
        assert_eq!(got, set(&["1918", "1", "5", "10", "3"]));
    }

    #[test]
    fn test_dynasty_reign_year_and_weight_pair() {
        let got = extract("光绪三年广东省造库平七钱二分", Variant::Coin);
        assert_eq!(got.numbers, set(&["3", "7", "2"]));
        assert!(got.republic_years.is_empty());
    }

    #[test]
    fn test_first_year_expression() {
        let got = numbers("宣統元年大清銀幣", Variant::Coin);
        assert_eq!(got, set(&["1"]));
    }

    #[test]
    fn test_republic_first_year() {
        let got = extract("民國元年軍政府造", Variant::Coin);
        assert_eq!(got.numbers, set(&["1912"]));
        assert_eq!(got.republic_years, set(&["1912"]));
    }

    #[test]
    fn test_year_range_is_atomic() {
        let got = numbers("1973-79年版人民幣拾圓", Variant::Banknote);
        assert!(got.contains("1973-79"));
        assert!(got.contains("10"));
        // Digits of the range never re-surface individually
        assert!(!got.contains("1973"));
        assert!(!got.contains("79"));
    }

    #[test]
    fn test_arabic_with_thousands_commas() {
        let got = numbers("發行量1,500枚", Variant::Coin);
        assert_eq!(got, set(&["1500"]));
    }

    #[test]
    fn test_cash_denomination_not_double_counted() {
        // 當百文: the span is consumed once, not re-read as 100 and 1
        let got = numbers("大清銅幣當制錢二十文", Variant::Coin);
        assert_eq!(got, set(&["20"]));
    }

    #[test]
    fn test_era_names_found_for_coins_only() {
        let coin = extract("庚子京局製造光緒元寶", Variant::Coin);
        assert_eq!(coin.era_names, vec!["庚子"]);
        let note = extract("庚子京局製造光緒元寶", Variant::Banknote);
        assert!(note.era_names.is_empty());
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let got = extract("", Variant::Coin);
        assert!(got.numbers.is_empty());
        assert!(got.era_names.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let text = "民國二十二年孫中山像壹圓";
        let a = extract(text, Variant::Coin);
        let b = extract(text, Variant::Coin);
        assert_eq!(a.numbers, b.numbers);
        assert_eq!(a.numbers, set(&["1933", "1"]));
    }
}
