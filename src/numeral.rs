//! Compound Chinese numeral → integer conversion.
//!
//! Catalog descriptions mix basic digits (一二三), formal/banker digits
//! (壹貳叁, plus the simplified 贰/陆 that slip into sloppy entries) and
//! place-value characters (十百千萬 and their formal forms 拾佰仟万).
//! `convert` turns a short run of these into a plain integer.

/// Single Chinese digit character → value 0–9.
///
/// Covers basic, formal-traditional and formal-simplified forms.
fn digit_value(c: char) -> Option<u64> {
    match c {
        '零' => Some(0),
        '一' | '壹' => Some(1),
        '二' | '貳' | '贰' => Some(2),
        '三' | '叁' | '參' => Some(3),
        '四' | '肆' => Some(4),
        '五' | '伍' => Some(5),
        '六' | '陸' | '陆' => Some(6),
        '七' | '柒' => Some(7),
        '八' | '捌' => Some(8),
        '九' | '玖' => Some(9),
        _ => None,
    }
}

/// Place-value character → multiplier.
fn place_value(c: char) -> Option<u64> {
    match c {
        '十' | '拾' => Some(10),
        '百' | '佰' => Some(100),
        '千' | '仟' => Some(1000),
        '萬' | '万' => Some(10_000),
        _ => None,
    }
}

/// Convert a compound Chinese numeral string to an integer.
///
/// Returns 0 for empty or fully unrecognized input; callers must treat
/// 0 as "no value" and never insert it into a numeral set.
///
/// The reign's first year is written without a numeral ("元年"), so a
/// bare 元 or any string containing 元年 means 1. This is checked before
/// the digit tables because 元 is in none of them.
///
/// Myriad-tier rule: on a place value ≥ 10,000 the running total plus the
/// pending digit is multiplied by the place value and becomes the new
/// running total ("三萬" = 3×10000, "拾萬" = 10×10000). For the lower
/// tiers the pending digit times the place value is added ("二十二" =
/// 2×10 + 2), with an implicit 1 when no digit is pending ("十八" = 18);
/// at the myriad tier the implicit 1 applies only when nothing at all has
/// accumulated yet.
pub fn convert(text: &str) -> u64 {
    if text.is_empty() {
        return 0;
    }

    if text == "元" || text.contains("元年") {
        return 1;
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() == 1 {
        let c = chars[0];
        return digit_value(c).or_else(|| place_value(c)).unwrap_or(0);
    }

    let mut result: u64 = 0;
    let mut temp: u64 = 0;
    for &c in &chars {
        if let Some(d) = digit_value(c) {
            temp = d;
        } else if let Some(place) = place_value(c) {
            if place >= 10_000 {
                // The running total ("拾" in 拾萬) is the multiplier here;
                // an implicit 1 applies only with nothing accumulated.
                let multiplier = result + temp;
                result = if multiplier == 0 { place } else { multiplier * place };
            } else {
                if temp == 0 {
                    temp = 1;
                }
                result += temp * place;
            }
            temp = 0;
        }
        // Unrecognized characters contribute nothing.
    }
    result + temp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        assert_eq!(convert("一"), 1);
        assert_eq!(convert("九"), 9);
        assert_eq!(convert("壹"), 1);
        assert_eq!(convert("玖"), 9);
        assert_eq!(convert("贰"), 2);
    }

    #[test]
    fn test_lone_place_values() {
        assert_eq!(convert("十"), 10);
        assert_eq!(convert("百"), 100);
        assert_eq!(convert("仟"), 1000);
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(convert("十八"), 18);
        assert_eq!(convert("二十"), 20);
        assert_eq!(convert("二十二"), 22);
        assert_eq!(convert("三十四"), 34);
    }

    #[test]
    fn test_formal_denominations() {
        assert_eq!(convert("壹佰"), 100);
        assert_eq!(convert("伍拾"), 50);
        assert_eq!(convert("壹仟"), 1000);
        assert_eq!(convert("三千"), 3000);
        assert_eq!(convert("五百二十"), 520);
    }

    #[test]
    fn test_myriad_tier_multiplies_running_total() {
        assert_eq!(convert("三萬"), 30_000);
        assert_eq!(convert("三万"), 30_000);
        assert_eq!(convert("拾萬"), 100_000);
        assert_eq!(convert("十萬"), 100_000);
        assert_eq!(convert("二十萬"), 200_000);
        assert_eq!(convert("二萬"), 20_000);
        assert_eq!(convert("一萬"), 10_000);
    }

    #[test]
    fn test_first_year_of_era() {
        assert_eq!(convert("元"), 1);
        assert_eq!(convert("元年"), 1);
        assert_eq!(convert("宣統元年"), 1);
    }

    #[test]
    fn test_empty_and_unrecognized() {
        assert_eq!(convert(""), 0);
        assert_eq!(convert("甲"), 0);
        assert_eq!(convert("省造"), 0);
    }
}
