//! Quote-aware row tokenization.

/// Split a single line into fields on the given delimiter.
///
/// Single-pass scan with an "inside quotes" flag:
/// - `"` toggles the flag, except that `""` while inside quotes emits one
///   literal quote without toggling,
/// - the delimiter ends a field only outside quotes,
/// - everything else is copied verbatim.
///
/// The trailing field is always emitted, even when empty. No trimming is
/// applied here; callers trim at the point of use.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                // escaped quote inside a quoted segment
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(tokenize("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        assert_eq!(tokenize("a,\"b,c\",d", ','), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(tokenize("a,\"b\"\"c\",d", ','), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_empty_fields_preserved() {
        assert_eq!(tokenize(",,", ','), vec!["", "", ""]);
        assert_eq!(tokenize("a,,b,", ','), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_semicolon_delimiter_leaves_commas_literal() {
        assert_eq!(tokenize("a,b;c", ';'), vec!["a,b", "c"]);
    }

    #[test]
    fn test_no_trimming_applied() {
        assert_eq!(tokenize(" a ; b ", ';'), vec![" a ", " b "]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        assert_eq!(tokenize("a,\"b,c", ','), vec!["a", "b,c"]);
    }

    #[test]
    fn test_tab_delimiter() {
        assert_eq!(tokenize("a\tb\tc", '\t'), vec!["a", "b", "c"]);
    }
}
