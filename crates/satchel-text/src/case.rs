use crate::error::{Error, Result};

/// Upper-case only the first character, leaving the rest untouched.
///
/// ```
/// assert_eq!(satchel_text::capitalize("fooBAR").unwrap(), "FooBAR");
/// ```
///
/// Empty input is an error: there is no first character to transform.
pub fn capitalize(s: &str) -> Result<String> {
    let mut chars = s.chars();
    match chars.next() {
        None => Err(Error::Empty),
        Some(first) => Ok(first.to_uppercase().collect::<String>() + chars.as_str()),
    }
}

/// Lower-case only the first character.
///
/// With `preserve_acronyms`, input whose first two characters are both
/// upper-case is returned unchanged, so "NTSC" does not become "nTSC".
/// A single upper-case character counts as an acronym as well.
///
/// Empty input comes back empty; unlike [`capitalize`] this never fails.
///
/// ```
/// assert_eq!(satchel_text::uncapitalize("NTSC", true), "NTSC");
/// assert_eq!(satchel_text::uncapitalize("NTSC", false), "nTSC");
/// ```
pub fn uncapitalize(s: &str, preserve_acronyms: bool) -> String {
    if preserve_acronyms && leads_with_acronym(s) {
        return s.to_string();
    }

    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

fn leads_with_acronym(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => a.is_uppercase() && b.is_uppercase(),
        (Some(a), None) => a.is_uppercase(),
        (None, _) => false,
    }
}
