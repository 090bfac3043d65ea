/// What: Strip a trailing `//` or `#` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A leading `#` is kept as part of the value (so `#ff0000` style values
///   survive); only a second `#` starts a comment.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Interpret a config flag: `true`, `1`, `yes` and `on` (any case) are true.
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Split a settings line into a normalized key and its value.
///
/// Inputs:
/// - `line`: One line of the settings file
///
/// Output:
/// - `Some((key, value))` for `key = value` lines; `None` for blanks, comments, or lines without `=`.
///
/// Details:
/// - Keys are lowercased with `.`, `-` and spaces mapped to `_`.
pub(crate) fn split_setting(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(raw_val.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_comments_are_removed() {
        assert_eq!(strip_inline_comment("price_asc # cheapest first"), "price_asc");
        assert_eq!(strip_inline_comment("true // default"), "true");
        assert_eq!(strip_inline_comment("#abc # note"), "#abc");
    }

    #[test]
    /// What: Lines split into normalized keys and comment-free values.
    ///
    /// Inputs:
    /// - "Sort-Mode = name_asc # x", "# comment", "novalue", "  "
    ///
    /// Output:
    /// - ("sort_mode", "name_asc"), then `None` for the rest.
    fn split_setting_normalizes() {
        assert_eq!(
            split_setting("Sort-Mode = name_asc # x"),
            Some(("sort_mode".to_string(), "name_asc"))
        );
        assert_eq!(split_setting("# comment"), None);
        assert_eq!(split_setting("novalue"), None);
        assert_eq!(split_setting("  "), None);
    }

    #[test]
    fn bools() {
        for t in ["true", "1", "YES", "On"] {
            assert!(parse_bool(t));
        }
        for f in ["false", "0", "no", "maybe"] {
            assert!(!parse_bool(f));
        }
    }
}
