//! Comment decoration stripping.
//!
//! Turns a raw block comment such as
//!
//! ```text
//! /**
//!  * Builds a widget.
//!  * @return Widget
//!  */
//! ```
//!
//! into plain text (`Builds a widget.\n@return Widget`) that the tag
//! splitter can work on.

use std::sync::OnceLock;

use regex::Regex;

/// Left-margin decoration on one line: indentation, asterisks, one space/tab.
fn margin_regex() -> &'static Regex {
    static MARGIN: OnceLock<Regex> = OnceLock::new();
    MARGIN.get_or_init(|| Regex::new(r"(?m)^[ \t]*\**[ \t]?").expect("Invalid margin regex"))
}

/// Normalize a raw comment for tag parsing.
///
/// Returns `None` when nothing but decoration is left.
pub fn normalize(comment: &str) -> Option<String> {
    let trimmed = trim_decoration(comment);
    if trimmed.is_empty() {
        return None;
    }

    let unified = unify_line_endings(trimmed);
    let stripped = strip_margins(&unified);
    let text = stripped.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Trim slashes, asterisks and whitespace from both ends of the block.
pub fn trim_decoration(comment: &str) -> &str {
    comment.trim_matches(|c: char| c == '/' || c == '*' || c.is_whitespace())
}

/// Convert CR+LF and bare CR line endings to LF.
pub fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strip the left-margin decoration from every line.
///
/// Expects LF line endings.
pub fn strip_margins(text: &str) -> String {
    margin_regex().replace_all(text, "").into_owned()
}
