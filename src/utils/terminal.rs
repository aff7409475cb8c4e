//! Terminal output sanitization
//!
//! File and directory names come straight from disk and may contain escape
//! sequences or other control characters. Anything printed to a terminal
//! (CLI text output, TUI rows) goes through [`sanitize_name`] first.

/// Replace escape sequences and control characters with `?`
///
/// A CSI sequence (`ESC [ ... final-byte`) collapses to a single `?`, the way
/// `ls` renders unprintable bytes in names.
///
/// # Examples
///
/// ```
/// use dirsearch::utils::sanitize_name;
///
/// assert_eq!(sanitize_name("evil\x1b[2Jname"), "evil?name");
/// assert_eq!(sanitize_name("tab\there"), "tab?here");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes, then one final byte in @..~
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
            out.push('?');
        } else if ch.is_control() {
            out.push('?');
        } else {
            out.push(ch);
        }
    }

    out
}
