//! Natural-language numeral parsing.
//!
//! Turns a token span like "twenty three point five" or "7/8" into an f64.
//! The span is whatever the extractor collected immediately before a unit
//! keyword, so unrecognized input is expected; it yields `f64::NAN` rather
//! than an error and the caller keeps the record as "value not determined".

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
    static ref FRACTION_RE: Regex = Regex::new(r"^(\d+)/(\d+)$").unwrap();
}

/// One-to-nineteen words.
const ONES: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

/// Tens words.
const TENS: &[(&str, i64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn ones_value(word: &str) -> Option<i64> {
    ONES.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn tens_value(word: &str) -> Option<i64> {
    TENS.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

/// True if `token` belongs to the numeral vocabulary the parser understands.
/// The extractor uses this to decide how far back to collect tokens.
pub fn is_numeral_token(token: &str) -> bool {
    let t = token.trim().to_lowercase();
    DECIMAL_RE.is_match(&t)
        || FRACTION_RE.is_match(&t)
        || ones_value(&t).is_some()
        || tens_value(&t).is_some()
        || matches!(
            t.as_str(),
            "point" | "dot" | "and" | "a" | "half" | "halves" | "quarter" | "quarters"
        )
}

/// Parse a numeral phrase into a number.
///
/// Precedence:
/// 1. A literal digit token ("3.25") parses directly and wins over word
///    parsing, unless a `N/D` fraction is present in the span.
/// 2. Word accumulation over the ones/tens tables; "point"/"dot" starts a
///    fractional digit string; "half"/"quarter" contribute half/quarter
///    values ("one half" -> 0.5, "seven and a half" -> 7.5).
/// 3. `N/D` fractions add n/d, or extend the fractional digits in decimal
///    mode.
///
/// Returns `f64::NAN` when no numeral token is recognized.
pub fn parse_numeral(span: &str) -> f64 {
    let cleaned = span.replace('-', " ");
    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| c == ',' || c == ';').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let has_fraction = tokens.iter().any(|t| FRACTION_RE.is_match(t));

    // Digit literals take priority over word parsing. When a N/D fraction
    // is present the digits join the accumulation below instead, so
    // "3 and 7/8" still reads as 3.875.
    if !has_fraction {
        if let Some(tok) = tokens.iter().find(|t| DECIMAL_RE.is_match(t)) {
            return tok.parse().unwrap_or(f64::NAN);
        }
    }

    let mut integer: i64 = 0;
    let mut extra = 0.0f64;
    let mut decimal: Option<String> = None;
    let mut recognized = false;
    // Value of the immediately preceding ones-word, consumed as a count by
    // a following "half"/"quarter" ("one half" means one half, not 1.5).
    let mut last_ones: Option<i64> = None;
    // "a" before "half"/"quarter" reads as a count of one without touching
    // the integer part ("seven and a half" -> 7.5).
    let mut pending_article = false;

    for token in &tokens {
        match token.as_str() {
            "and" => {
                last_ones = None;
            }
            "a" => {
                pending_article = true;
            }
            "point" | "dot" => {
                decimal = Some(String::new());
                last_ones = None;
                pending_article = false;
            }
            "half" | "halves" | "quarter" | "quarters" => {
                let is_half = token.starts_with("half");
                let fraction = if is_half { 0.5 } else { 0.25 };
                if let Some(digits) = decimal.as_mut() {
                    digits.push_str(if is_half { "5" } else { "25" });
                } else if pending_article {
                    extra += fraction;
                } else if let Some(count) = last_ones.take() {
                    integer -= count;
                    extra += count as f64 * fraction;
                } else {
                    extra += fraction;
                }
                pending_article = false;
                recognized = true;
            }
            other => {
                if let Some(caps) = FRACTION_RE.captures(other) {
                    let n: f64 = caps[1].parse().unwrap_or(0.0);
                    let d: f64 = caps[2].parse().unwrap_or(1.0);
                    if d != 0.0 {
                        let value = n / d;
                        if let Some(digits) = decimal.as_mut() {
                            // Fold the fraction's digits after the point.
                            let text = format!("{}", value);
                            if let Some(frac) = text.split('.').nth(1) {
                                digits.push_str(frac);
                            }
                        } else {
                            extra += value;
                        }
                        recognized = true;
                    }
                } else if DECIMAL_RE.is_match(other) {
                    let value: f64 = other.parse().unwrap_or(0.0);
                    if let Some(digits) = decimal.as_mut() {
                        digits.push_str(other);
                    } else if other.contains('.') {
                        extra += value;
                    } else {
                        integer += value as i64;
                    }
                    recognized = true;
                } else if let Some(v) = tens_value(other) {
                    if let Some(digits) = decimal.as_mut() {
                        digits.push_str(&v.to_string());
                    } else {
                        integer += v;
                    }
                    last_ones = None;
                    recognized = true;
                } else if let Some(v) = ones_value(other) {
                    if let Some(digits) = decimal.as_mut() {
                        digits.push_str(&v.to_string());
                        last_ones = None;
                    } else {
                        integer += v;
                        last_ones = Some(v);
                    }
                    recognized = true;
                }
                // Unknown tokens are skipped; the extractor already
                // filtered the span down to numeral vocabulary.
                pending_article = false;
            }
        }
    }

    if !recognized {
        return f64::NAN;
    }

    let mut value = integer as f64 + extra;
    if let Some(digits) = decimal {
        if !digits.is_empty() {
            value += format!("0.{}", digits).parse::<f64>().unwrap_or(0.0);
        }
    }
    value
}
