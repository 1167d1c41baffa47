const QUOTES: [char; 2] = ['"', '\''];

/// Collapse one level of backslash-escaping of quote characters.
///
/// Every run of backslashes immediately preceding a `"` or `'` loses one
/// backslash, and the escaped quote is normalized to a literal `"`. Quotes
/// with no preceding backslash are left alone.
///
/// This is a narrow transform for quote characters only; `\n`, `\t` and
/// other escape sequences pass through verbatim.
///
/// ```
/// assert_eq!(satchel_text::unescape(r#"\"hi\""#), r#""hi""#);
/// assert_eq!(satchel_text::unescape("it's"), "it's");
/// ```
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut backslashes = 0usize;

    for c in s.chars() {
        if c == '\\' {
            backslashes += 1;
            continue;
        }
        if QUOTES.contains(&c) && backslashes > 0 {
            out.extend(std::iter::repeat_n('\\', backslashes - 1));
            out.push('"');
        } else {
            out.extend(std::iter::repeat_n('\\', backslashes));
            out.push(c);
        }
        backslashes = 0;
    }
    out.extend(std::iter::repeat_n('\\', backslashes));

    out
}
