//! Locale-aware string ordering for name sorting.
//!
//! A lightweight approximation of the default Unicode collation order used by
//! browsers for `en` locales: strings are compared in three levels.
//! - Primary: base letters with accents removed, case folded. Whitespace sorts
//!   first, then punctuation and symbols in root collation order (`_ - , ; : ! ?
//!   . ' " ( ) [ ] { } @ * / \ & # %` before `` ` ^ + < = > | ~ $``), then
//!   digits, then letters.
//! - Secondary: accents (an unaccented letter sorts before its accented form).
//! - Tertiary: case, lowercase before uppercase.
//!
//! Strings equal at all three levels fall back to code point order so the
//! result is a total order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII punctuation and symbols in root collation order.
const ASCII_SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Weight of an ASCII symbol: twice its position, leaving odd slots between.
fn ascii_symbol_weight(c: char) -> Option<u32> {
    ASCII_SYMBOL_ORDER
        .chars()
        .position(|s| s == c)
        .and_then(|i| u32::try_from(i).ok())
        .map(|i| i * 2)
}

/// Primary collation element: character class, then weight within the class.
fn primary_element(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, u32::from(c));
    }
    if let Some(w) = ascii_symbol_weight(c) {
        return (1, w);
    }
    if c.is_numeric() {
        return (2, u32::from(c));
    }
    if c.is_alphabetic() {
        return (3, u32::from(c));
    }
    match c {
        // Unicode hyphens and dashes follow the ASCII hyphen-minus.
        '\u{2010}'..='\u{2015}' => (1, ascii_symbol_weight('-').unwrap_or(0) + 1),
        // Remaining general punctuation sits after `%`, ahead of the symbols.
        '\u{2016}'..='\u{2027}' => (1, ascii_symbol_weight('%').unwrap_or(0) + 1),
        // Other symbols follow every ASCII symbol, in code point order.
        _ => (1, 1000 + u32::from(c)),
    }
}

/// Accent-free, case-folded collation elements.
fn primary_key(s: &str) -> Vec<(u8, u32)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_element)
        .collect()
}

/// Case-folded decomposition, still carrying combining marks.
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Per-character case flags; `false` (lowercase) sorts first.
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// What: Compare two display strings the way a user expects an A–Z list to read.
///
/// Inputs:
/// - `a`, `b`: Strings to compare
///
/// Output:
/// - `Ordering` from primary, then secondary, then tertiary keys, then code points.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}
