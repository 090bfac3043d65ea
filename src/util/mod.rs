//! Small formatting and comparison helpers shared across modules.

pub mod collate;

pub use collate::locale_cmp;

/// What: Format a rupee amount for display.
///
/// Inputs:
/// - `amount`: Whole-rupee amount
///
/// Output:
/// - String of the form `Rs. 45,990`: fixed `Rs.` prefix, comma-grouped thousands.
///
/// Details:
/// - Matches the `en-LK` number grouping (groups of three digits).
#[must_use]
pub fn format_lkr(amount: u64) -> String {
    format!("Rs. {}", group_thousands(amount))
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What: Case-insensitive substring test.
///
/// Inputs:
/// - `haystack`: Text to search
/// - `needle_lower`: Already lowercased needle
///
/// Output:
/// - `true` when `needle_lower` occurs in the lowercased haystack.
#[must_use]
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
