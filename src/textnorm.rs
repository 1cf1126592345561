//! Pre-scan text plumbing shared by the two extractors.

use std::sync::LazyLock;

use regex::Regex;

static RE_THOUSANDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d),(\d{3})").expect("thousands regex"));

/// Remove thousands-separator commas from digit runs ("1,234,567" → "1234567").
///
/// Applied repeatedly because each pass joins one comma per run.
pub fn strip_thousands_commas(text: &str) -> String {
    let mut s = text.to_string();
    loop {
        let next = RE_THOUSANDS.replace_all(&s, "$1$2").into_owned();
        if next == s {
            return s;
        }
        s = next;
    }
}

/// Byte spans already consumed by a higher-priority pattern.
///
/// Once a span is claimed, lower-priority patterns must not re-extract
/// numerals from it (prevents a "百文" match being counted as both
/// "X" and "X00", or year-range digits re-surfacing as bare numbers).
#[derive(Debug, Default)]
pub struct SpanClaims(Vec<(usize, usize)>);

impl SpanClaims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.0.iter().any(|&(s, e)| start < e && s < end)
    }

    pub fn claim(&mut self, start: usize, end: usize) {
        self.0.push((start, end));
    }
}
