//! Republic-calendar arithmetic and the sexagenary era table.
//!
//! Republic year 1 is AD 1912, so the conversion is a fixed offset.
//! Sexagenary (干支) era names repeat every 60 years; each name therefore
//! maps to exactly two candidate Western years inside the 1876–1975 window
//! relevant to Qing and Republic coinage.

/// Western year = Republic year + 1911 (Republic 1 = 1912).
pub fn republic_to_western(year: u64) -> u64 {
    year + 1911
}

/// Republic year = Western year − 1911. Callers pass years ≥ 1912; the
/// Republic calendar has no year 0 or earlier.
pub fn western_to_republic(year: u64) -> u64 {
    debug_assert!(year >= 1912, "pre-Republic western year {year}");
    year - 1911
}

// ── Sexagenary era table ─────────────────────────────────────────────

/// A sexagenary era name and its two candidate Western years (60 apart).
pub struct EraEntry {
    pub name: &'static str,
    pub years: [u16; 2],
}

/// The 60-year cycle slice covering coinage dated 1876–1975.
pub static ERA_TABLE: &[EraEntry] = &[
    EraEntry { name: "丙子", years: [1876, 1936] },
    EraEntry { name: "丁丑", years: [1877, 1937] },
    EraEntry { name: "戊寅", years: [1878, 1938] },
    EraEntry { name: "己卯", years: [1879, 1939] },
    EraEntry { name: "庚辰", years: [1880, 1940] },
    EraEntry { name: "辛巳", years: [1881, 1941] },
    EraEntry { name: "壬午", years: [1882, 1942] },
    EraEntry { name: "癸未", years: [1883, 1943] },
    EraEntry { name: "甲申", years: [1884, 1944] },
    EraEntry { name: "乙酉", years: [1885, 1945] },
    EraEntry { name: "丙戌", years: [1886, 1946] },
    EraEntry { name: "丁亥", years: [1887, 1947] },
    EraEntry { name: "戊子", years: [1888, 1948] },
    EraEntry { name: "己丑", years: [1889, 1949] },
    EraEntry { name: "庚寅", years: [1890, 1950] },
    EraEntry { name: "辛卯", years: [1891, 1951] },
    EraEntry { name: "壬辰", years: [1892, 1952] },
    EraEntry { name: "癸巳", years: [1893, 1953] },
    EraEntry { name: "甲午", years: [1894, 1954] },
    EraEntry { name: "乙未", years: [1895, 1955] },
    EraEntry { name: "丙申", years: [1896, 1956] },
    EraEntry { name: "丁酉", years: [1897, 1957] },
    EraEntry { name: "戊戌", years: [1898, 1958] },
    EraEntry { name: "己亥", years: [1899, 1959] },
    EraEntry { name: "庚子", years: [1900, 1960] },
    EraEntry { name: "辛丑", years: [1901, 1961] },
    EraEntry { name: "壬寅", years: [1902, 1962] },
    EraEntry { name: "癸卯", years: [1903, 1963] },
    EraEntry { name: "甲辰", years: [1904, 1964] },
    EraEntry { name: "乙巳", years: [1905, 1965] },
    EraEntry { name: "丙午", years: [1906, 1966] },
    EraEntry { name: "丁未", years: [1907, 1967] },
    EraEntry { name: "戊申", years: [1908, 1968] },
    EraEntry { name: "己酉", years: [1909, 1969] },
    EraEntry { name: "庚戌", years: [1910, 1970] },
    EraEntry { name: "辛亥", years: [1911, 1971] },
    EraEntry { name: "壬子", years: [1912, 1972] },
    EraEntry { name: "癸丑", years: [1913, 1973] },
    EraEntry { name: "甲寅", years: [1914, 1974] },
    EraEntry { name: "乙卯", years: [1915, 1975] },
];

/// Candidate Western years for a sexagenary name, or None if unknown.
pub fn era_candidates(name: &str) -> Option<[u16; 2]> {
    ERA_TABLE.iter().find(|e| e.name == name).map(|e| e.years)
}

/// All sexagenary names appearing as substrings of `text`, in table order.
pub fn find_era_names(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    ERA_TABLE
        .iter()
        .filter(|e| text.contains(e.name))
        .map(|e| e.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_republic_offset() {
        assert_eq!(republic_to_western(3), 1914);
        assert_eq!(republic_to_western(21), 1932);
        assert_eq!(western_to_republic(1912), 1);
    }

    #[test]
    #[should_panic(expected = "pre-Republic")]
    fn test_pre_republic_year_rejected() {
        western_to_republic(1900);
    }

    #[test]
    fn test_round_trip() {
        for y in 1..=99 {
            assert_eq!(western_to_republic(republic_to_western(y)), y);
        }
    }

    #[test]
    fn test_era_candidates_sixty_apart() {
        for e in ERA_TABLE {
            assert_eq!(e.years[1] - e.years[0], 60, "era {}", e.name);
        }
        assert_eq!(era_candidates("庚子"), Some([1900, 1960]));
        assert_eq!(era_candidates("辛亥"), Some([1911, 1971]));
        assert_eq!(era_candidates("不明"), None);
    }

    #[test]
    fn test_find_era_names_in_text() {
        let found = find_era_names("庚子年造光緒元寶");
        assert_eq!(found, vec!["庚子"]);
        assert!(find_era_names("民國三年壹圓").is_empty());
        assert!(find_era_names("").is_empty());
    }
}
