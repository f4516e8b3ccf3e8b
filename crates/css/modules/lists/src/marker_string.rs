//! Spec: CSS Counter Styles 3 §6 — predefined counter styles used for markers.
//! <https://www.w3.org/TR/css-counter-styles-3/#predefined-counters>

use css_orchestrator::style_model::ListStyleType;

const LOWER_GREEK: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ',
    'υ', 'φ', 'χ', 'ψ', 'ω',
];

const ROMAN: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Bijective base-N numbering over `symbols`: 1 → a, 26 → z, 27 → aa.
fn alphabetic(mut value: i32, symbols: &[char]) -> Option<String> {
    if value <= 0 || symbols.len() < 2 {
        return None;
    }
    let base = symbols.len() as i32;
    let mut digits = Vec::new();
    while value > 0 {
        value -= 1;
        digits.push(*symbols.get((value % base) as usize)?);
        value /= base;
    }
    Some(digits.iter().rev().collect())
}

/// Additive roman numerals; defined for 1..=3999 only.
fn roman(mut value: i32, uppercase: bool) -> Option<String> {
    if !(1..=3999).contains(&value) {
        return None;
    }
    let mut out = String::new();
    for (weight, symbol) in ROMAN {
        while value >= weight {
            out.push_str(symbol);
            value -= weight;
        }
    }
    Some(if uppercase { out } else { out.to_lowercase() })
}

fn decimal_leading_zero(value: i32) -> String {
    if value < 0 {
        format!("-{:02}", value.unsigned_abs())
    } else {
        format!("{value:02}")
    }
}

/// Counter representation of `value` in a numbering style, without suffix.
///
/// Values outside a style's range use `decimal`, as the fallback of every
/// predefined style is `decimal`. Bullet styles and `none` have no counter
/// representation.
pub fn counter_representation(style: ListStyleType, value: i32) -> Option<String> {
    let representation = match style {
        ListStyleType::None
        | ListStyleType::Disc
        | ListStyleType::Circle
        | ListStyleType::Square => return None,
        ListStyleType::Decimal => None,
        ListStyleType::DecimalLeadingZero => Some(decimal_leading_zero(value)),
        ListStyleType::LowerRoman => roman(value, false),
        ListStyleType::UpperRoman => roman(value, true),
        ListStyleType::LowerAlpha => {
            let letters: Vec<char> = ('a'..='z').collect();
            alphabetic(value, &letters)
        }
        ListStyleType::UpperAlpha => {
            let letters: Vec<char> = ('A'..='Z').collect();
            alphabetic(value, &letters)
        }
        ListStyleType::LowerGreek => alphabetic(value, &LOWER_GREEK),
    };
    Some(representation.unwrap_or_else(|| value.to_string()))
}

/// Text of a marker for the list item with ordinal `value`.
///
/// Bullets are followed by a space, numbers by `". "`. Returns None for
/// `list-style-type: none`.
pub fn marker_string(style: ListStyleType, value: i32) -> Option<String> {
    match style {
        ListStyleType::None => None,
        ListStyleType::Disc => Some("• ".to_owned()),
        ListStyleType::Circle => Some("◦ ".to_owned()),
        ListStyleType::Square => Some("▪ ".to_owned()),
        _ => counter_representation(style, value).map(|counter| format!("{counter}. ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets() {
        assert_eq!(marker_string(ListStyleType::Disc, 7).as_deref(), Some("• "));
        assert_eq!(marker_string(ListStyleType::Circle, 7).as_deref(), Some("◦ "));
        assert_eq!(marker_string(ListStyleType::Square, 7).as_deref(), Some("▪ "));
        assert_eq!(marker_string(ListStyleType::None, 7), None);
    }

    #[test]
    fn numeric_styles() {
        assert_eq!(marker_string(ListStyleType::Decimal, 3).as_deref(), Some("3. "));
        assert_eq!(marker_string(ListStyleType::Decimal, -2).as_deref(), Some("-2. "));
        assert_eq!(
            marker_string(ListStyleType::DecimalLeadingZero, 3).as_deref(),
            Some("03. ")
        );
        assert_eq!(
            counter_representation(ListStyleType::DecimalLeadingZero, -3).as_deref(),
            Some("-03")
        );
        assert_eq!(
            counter_representation(ListStyleType::DecimalLeadingZero, 120).as_deref(),
            Some("120")
        );
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(marker_string(ListStyleType::LowerRoman, 4).as_deref(), Some("iv. "));
        assert_eq!(
            counter_representation(ListStyleType::UpperRoman, 1994).as_deref(),
            Some("MCMXCIV")
        );
        // Out of range falls back to decimal.
        assert_eq!(
            counter_representation(ListStyleType::UpperRoman, 4000).as_deref(),
            Some("4000")
        );
        assert_eq!(counter_representation(ListStyleType::LowerRoman, 0).as_deref(), Some("0"));
    }

    #[test]
    fn alphabetic_styles() {
        assert_eq!(counter_representation(ListStyleType::LowerAlpha, 1).as_deref(), Some("a"));
        assert_eq!(counter_representation(ListStyleType::LowerAlpha, 26).as_deref(), Some("z"));
        assert_eq!(marker_string(ListStyleType::UpperAlpha, 28).as_deref(), Some("AB. "));
        assert_eq!(marker_string(ListStyleType::LowerGreek, 2).as_deref(), Some("β. "));
        assert_eq!(counter_representation(ListStyleType::LowerGreek, 25).as_deref(), Some("αα"));
        assert_eq!(counter_representation(ListStyleType::UpperAlpha, -1).as_deref(), Some("-1"));
    }
}
