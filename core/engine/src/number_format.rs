//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Display formatting for calculator operands.
//! CONTEXT: The display shows operands with grouped integer digits while the
//! fraction is passed through exactly as typed, so in-progress input such as
//! "1234.50" stays "1,234.50" instead of being rounded. Grouping is isolated
//! in `format_integer_grouped` so the locale rules can change without
//! touching the reducer.

use serde::{Deserialize, Serialize};

use crate::number_text::parse_operand;

/// Text placed between the grouped integer and the verbatim fraction.
pub const FRACTION_JOIN: &str = ".";

/// How the integer part of a number is split into groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingStyle {
    /// Text inserted between digit groups.
    pub separator: String,
    /// Size of the rightmost group.
    pub primary: usize,
    /// Size of every group left of the rightmost one.
    pub secondary: usize,
}

impl Default for GroupingStyle {
    fn default() -> Self {
        GroupingStyle::en_us()
    }
}

impl GroupingStyle {
    pub fn new(separator: impl Into<String>, primary: usize, secondary: usize) -> Self {
        GroupingStyle {
            separator: separator.into(),
            primary: primary.max(1),
            secondary: secondary.max(1),
        }
    }

    pub fn en_us() -> Self {
        GroupingStyle::new(",", 3, 3)
    }

    /// Resolve a BCP-47 locale tag ("fr", "en_IN.UTF-8", "de-CH").
    /// Unknown locales, and locales that group with the fraction join
    /// character ("de-DE" uses "."), fall back to en-US grouping.
    pub fn for_locale(tag: &str) -> Self {
        let style = Self::locale_style(tag);
        if style.separator.contains(FRACTION_JOIN) {
            GroupingStyle::en_us()
        } else {
            style
        }
    }

    fn locale_style(tag: &str) -> Self {
        let normalized = tag
            .split('.')
            .next()
            .unwrap_or("")
            .replace('_', "-")
            .to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or("");
        let region = parts.find(|p| p.len() == 2).unwrap_or("");

        match (language, region) {
            ("en", "in") | ("hi", _) => GroupingStyle::new(",", 3, 2),
            ("de", "ch") | ("it", "ch") => GroupingStyle::new("\u{2019}", 3, 3),
            ("de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr", _) => {
                GroupingStyle::new(".", 3, 3)
            }
            ("fr", _) => GroupingStyle::new("\u{202F}", 3, 3),
            ("sv" | "nb" | "no" | "fi" | "pl" | "cs" | "ru" | "uk", _) => {
                GroupingStyle::new("\u{A0}", 3, 3)
            }
            _ => GroupingStyle::en_us(),
        }
    }
}

/// Format an operand with en-US grouping.
pub fn format_operand(operand: &str) -> String {
    format_operand_with(operand, &GroupingStyle::en_us())
}

/// Format an operand for display.
///
/// The integer part (text before the first ".") must start with a number,
/// otherwise the result is empty. Without a decimal point only the grouped
/// integer is returned; with one, the grouped integer is joined by "." to
/// the verbatim fraction text.
pub fn format_operand_with(operand: &str, style: &GroupingStyle) -> String {
    let (integer_text, fraction_text) = match operand.split_once(FRACTION_JOIN) {
        Some((integer, rest)) => (integer, Some(rest.split(FRACTION_JOIN).next().unwrap_or(""))),
        None => (operand, None),
    };

    let integer = match parse_operand(integer_text) {
        Some(n) => n,
        None => return String::new(),
    };

    let grouped = format_integer_grouped(integer, style);
    match fraction_text {
        Some(fraction) => format!("{}{}{}", grouped, FRACTION_JOIN, fraction),
        None => grouped,
    }
}

/// Round to an integer (half away from zero) and insert group separators.
pub fn format_integer_grouped(value: f64, style: &GroupingStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}\u{221E}", sign);
    }

    // f64 formatting prints the exact integer value, however large.
    let digits = format!("{:.0}", value.abs().round());
    format!("{}{}", sign, group_digits(&digits, style))
}

/// Insert separators into a string of ASCII digits.
fn group_digits(digits: &str, style: &GroupingStyle) -> String {
    let len = digits.len();
    if len <= style.primary {
        return digits.to_string();
    }

    // Group boundaries counted from the right: primary first, then secondary.
    let mut boundaries = Vec::new();
    let mut remaining = len - style.primary;
    boundaries.push(remaining);
    while remaining > style.secondary {
        remaining -= style.secondary;
        boundaries.push(remaining);
    }

    let mut result = String::with_capacity(len + boundaries.len() * style.separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && boundaries.contains(&i) {
            result.push_str(&style.separator);
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_operand_groups_integer() {
        assert_eq!(format_operand("1234"), "1,234");
        assert_eq!(format_operand("1234567"), "1,234,567");
        assert_eq!(format_operand("123"), "123");
        assert_eq!(format_operand("0"), "0");
    }

    #[test]
    fn test_format_operand_keeps_fraction_verbatim() {
        assert_eq!(format_operand("1234.50"), "1,234.50");
        assert_eq!(format_operand("0."), "0.");
        assert_eq!(format_operand("12.000"), "12.000");
        assert_eq!(format_operand("0.30000000000000004"), "0.30000000000000004");
    }

    #[test]
    fn test_format_operand_empty_for_non_numbers() {
        assert_eq!(format_operand(""), "");
        assert_eq!(format_operand("."), "");
        assert_eq!(format_operand(".5"), "");
        assert_eq!(format_operand("NaN"), "");
    }

    #[test]
    fn test_format_operand_results() {
        assert_eq!(format_operand("-1234"), "-1,234");
        assert_eq!(format_operand("Infinity"), "\u{221E}");
        assert_eq!(format_operand("-Infinity"), "-\u{221E}");
        assert_eq!(format_operand("1e+21"), "1,000,000,000,000,000,000,000");
        assert_eq!(format_operand("1.5e-7"), "1.5e-7");
    }

    #[test]
    fn test_format_integer_grouped_rounds_half_away_from_zero() {
        let style = GroupingStyle::en_us();
        assert_eq!(format_integer_grouped(2.5, &style), "3");
        assert_eq!(format_integer_grouped(-2.5, &style), "-3");
        assert_eq!(format_integer_grouped(1234.4, &style), "1,234");
        assert_eq!(format_integer_grouped(-0.0, &style), "-0");
    }

    #[test]
    fn test_locale_styles() {
        let sv = GroupingStyle::for_locale("sv-SE");
        assert_eq!(format_integer_grouped(1234567.0, &sv), "1\u{A0}234\u{A0}567");

        let fr = GroupingStyle::for_locale("fr_FR.UTF-8");
        assert_eq!(format_integer_grouped(1234.0, &fr), "1\u{202F}234");

        let ch = GroupingStyle::for_locale("de-CH");
        assert_eq!(format_integer_grouped(1234.0, &ch), "1\u{2019}234");

        assert_eq!(GroupingStyle::for_locale("xx-YY"), GroupingStyle::en_us());
        assert_eq!(GroupingStyle::for_locale("en-US"), GroupingStyle::en_us());
    }

    #[test]
    fn test_indian_grouping() {
        let style = GroupingStyle::for_locale("en-IN");
        assert_eq!(format_integer_grouped(1234567.0, &style), "12,34,567");
        assert_eq!(format_integer_grouped(123456789.0, &style), "12,34,56,789");
        assert_eq!(format_integer_grouped(1000.0, &style), "1,000");
    }

    #[test]
    fn test_format_with_style_keeps_dot_before_fraction() {
        let fr = GroupingStyle::for_locale("fr");
        assert_eq!(format_operand_with("1234.5", &fr), "1\u{202F}234.5");
    }

    #[test]
    fn test_dot_grouping_locales_fall_back_to_en_us() {
        for tag in ["de-DE", "de", "es-ES", "it-IT", "nl-NL", "pt-BR", "da-DK", "id-ID", "tr-TR"] {
            assert_eq!(GroupingStyle::for_locale(tag), GroupingStyle::en_us(), "{}", tag);
        }
    }

    #[test]
    fn test_grouped_integer_never_reads_as_fraction() {
        let tags = [
            "en-US", "en-IN", "hi", "de-CH", "it-CH", "de-DE", "es", "it", "nl", "pt", "da",
            "id", "tr", "fr-FR", "sv-SE", "nb", "no", "fi", "pl", "cs", "ru", "uk", "xx-YY", "",
        ];
        for tag in tags {
            let style = GroupingStyle::for_locale(tag);
            assert_ne!(
                format_operand_with("1234", &style),
                format_operand_with("1.234", &style),
                "locale {:?} makes 1234 and 1.234 look alike",
                tag
            );
            assert!(!style.separator.contains(FRACTION_JOIN), "{}", tag);
        }
    }
}
