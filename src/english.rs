//! English-side numeral extraction.
//!
//! Catalog English mixes descriptive numerals (denominations, years,
//! lot sizes) with metadata that must never reach reconciliation:
//! grading-service scores ("PCGS MS-64"), grade abbreviations ("AU-58")
//! and, on banknotes, trailing reference codes after the date. This
//! module extracts the descriptive numerals and classifies them.
//!
//! Real data examples:
//!   100 Yuan, 1.10.1914. PMG Choice Uncirculated 64
//!   Lot of (3). 1, 5, & 10 Dollars, 1918
//!   PCGS MS-64, 1 Dollar, 1921
//!   Kuang Hsu, Year 3, 7 Mace 2 Candareen

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Variant;
use crate::textnorm::{SpanClaims, strip_thousands_commas};

static RE_YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:18|19|20)\d{2}-\d{2}(?:\d{2})?").expect("year range regex"));

static RE_ARABIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("arabic regex"));

// Last bare year or year-range; banknote text is cut after it.
static RE_TRAILING_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:18|19|20)\d{2}(?:-\d{2}(?:\d{2})?)?\b").expect("trailing year regex")
});

// Numeric date: 1.10.1914, 01/10/1914, 1-10-1914. Only the year counts.
static RE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[./-](\d{1,2})[./-]((?:18|19|20)\d{2})\b").expect("date regex")
});

// Grading-service score: company name, optional grade word run, number.
// e.g. "PCGS MS-64", "NGC AU Details--Cleaned 58", "GBCA 82"
static RE_COMPANY_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:PCGS|NGC|ANACS|GBCA|CCG)\s+(?:[A-Z]+(?:\s+Details)?(?:--[^.]*)?[-\s])?(\d+)")
        .expect("company score regex")
});

// Bare grade abbreviation score: "MS-64", "AU 58", "VF-30"
static RE_GRADE_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:AU|MS|EF|VF|XF|VG|AG|PO|F|G)[-\s](\d+)\b").expect("grade score regex")
});

// Lot-size phrases; the count is a descriptive numeral.
static RE_LOT_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Lot|Set|Group)\s+of\s+\((\d+)\)").expect("lot regex")
});

static RE_PIECES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\((\d+)\)\s*(?:pieces?|notes?|bills?)").expect("pieces regex")
});

// A bare currency noun implies face value 1 ("Dollar" = 1 Dollar).
// Singular only; an explicit numeral always precedes the plural form.
static RE_CURRENCY_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Dollar|Peso|Rupee|Yuan|Franc|Mark|Pound|Ruble)\b")
        .expect("currency noun regex")
});

/// Everything extracted from one English description.
///
/// The sets overlap: `years`, `denominations` and `quantities` are views
/// over `numbers`, while `implied_denominations` holds values with no
/// digit in the text at all.
#[derive(Debug, Default, Serialize)]
pub struct EnglishExtraction {
    pub numbers: BTreeSet<String>,
    pub years: BTreeSet<String>,
    pub denominations: BTreeSet<String>,
    pub quantities: BTreeSet<String>,
    pub implied_denominations: BTreeSet<String>,
}

impl EnglishExtraction {
    /// Explicit and implied numerals combined, as reconciliation sees them.
    pub fn all_numbers(&self) -> BTreeSet<String> {
        self.numbers.union(&self.implied_denominations).cloned().collect()
    }
}

pub(crate) fn year_window(variant: Variant) -> (u64, u64) {
    match variant {
        Variant::Coin => (1800, 2100),
        Variant::Banknote => (1850, 2100),
    }
}

/// Extract and classify all descriptive numerals from an English description.
pub fn extract(text: &str, variant: Variant) -> EnglishExtraction {
    let mut out = EnglishExtraction::default();
    if text.is_empty() {
        return out;
    }

    let text = strip_thousands_commas(text);

    // Banknote catalog entries append grading and reference codes after
    // the date; everything past the last year token is metadata.
    let scan: &str = if variant == Variant::Banknote {
        match RE_TRAILING_YEAR.find_iter(&text).last() {
            Some(m) => &text[..m.end()],
            None => &text,
        }
    } else {
        &text
    };

    let mut claims = SpanClaims::new();

    // 1. Year-range literals are atomic tokens.
    for m in RE_YEAR_RANGE.find_iter(scan) {
        out.numbers.insert(m.as_str().to_string());
        out.years.insert(m.as_str().to_string());
        claims.claim(m.start(), m.end());
    }

    // 2. Numeric dates contribute only their year.
    for caps in RE_DATE.captures_iter(scan) {
        let full = caps.get(0).expect("match");
        if claims.overlaps(full.start(), full.end()) {
            continue;
        }
        let year = caps.get(3).expect("year").as_str();
        out.numbers.insert(year.to_string());
        out.years.insert(year.to_string());
        claims.claim(full.start(), full.end());
    }

    // 3. Lot-size phrases; the span is consumed so the count is not
    //    re-read as a denomination.
    for re in [&RE_LOT_OF, &RE_PIECES] {
        for caps in re.captures_iter(scan) {
            let full = caps.get(0).expect("match");
            if claims.overlaps(full.start(), full.end()) {
                continue;
            }
            let count = caps.get(1).expect("count").as_str();
            out.numbers.insert(count.to_string());
            out.quantities.insert(count.to_string());
            claims.claim(full.start(), full.end());
        }
    }

    // 4. Condition scores are excluded by value, everywhere they occur.
    let mut graded: BTreeSet<&str> = BTreeSet::new();
    if variant == Variant::Coin {
        for re in [&RE_COMPANY_SCORE, &RE_GRADE_SCORE] {
            for caps in re.captures_iter(scan) {
                graded.insert(caps.get(1).expect("score").as_str());
            }
        }
    }

    // 5. Remaining bare digit runs, classified by the year window.
    let (year_lo, year_hi) = year_window(variant);
    for m in RE_ARABIC.find_iter(scan) {
        if claims.overlaps(m.start(), m.end()) || graded.contains(m.as_str()) {
            continue;
        }
        let token = m.as_str();
        out.numbers.insert(token.to_string());
        match token.parse::<u64>() {
            Ok(n) if n >= year_lo && n <= year_hi => {
                out.years.insert(token.to_string());
            }
            _ => {
                out.denominations.insert(token.to_string());
            }
        }
    }

    // 6. Currency noun with no explicit face value implies 1.
    if variant == Variant::Coin
        && RE_CURRENCY_NOUN.is_match(scan)
        && !out.denominations.contains("1")
    {
        out.implied_denominations.insert("1".to_string());
    }

    out
}
