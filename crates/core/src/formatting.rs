//! Display helpers shared by every view.

/// Currency prefix used for all amounts shown in the viewer.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Magnitude suffixes, smallest first. The empty suffix covers |x| < 1000.
const MAGNITUDES: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Uppercase the first letter of every whitespace-delimited word.
///
/// Everything else, whitespace included, is left as is:
/// `"john  smith"` → `"John  Smith"`. A word that starts with a
/// non-letter (e.g. `"(uk)"`) is not changed.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Abbreviated, `£`-prefixed, uppercase amount with one decimal digit.
///
/// `2_430_000_000.0` → `"£2.4B"`, `1_500.0` → `"£1.5K"`, `-1_500.0` → `"-£1.5K"`.
/// `value` must be finite.
pub fn format_number(value: f64) -> String {
    format_number_with_symbol(value, DEFAULT_CURRENCY_SYMBOL)
}

/// [`format_number`] with a caller-chosen currency prefix.
pub fn format_number_with_symbol(value: f64, symbol: &str) -> String {
    debug_assert!(value.is_finite(), "format_number called with {value}");

    let abs = value.abs();
    let mut tier = MAGNITUDES
        .iter()
        .rposition(|(threshold, _)| abs >= *threshold)
        .unwrap_or(0);
    let mut scaled = round_one_decimal(abs / MAGNITUDES[tier].0);

    // 999_999 rounds to 1000.0K; show it as 1.0M instead.
    if scaled >= 1000.0 && tier + 1 < MAGNITUDES.len() {
        tier += 1;
        scaled = round_one_decimal(abs / MAGNITUDES[tier].0);
    }

    let sign = if value < 0.0 && scaled != 0.0 { "-" } else { "" };
    let suffix = MAGNITUDES[tier].1;
    format!("{sign}{symbol}{scaled:.1}{suffix}").to_uppercase()
}

fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

