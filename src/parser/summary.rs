//! Summary queries over a raw comment: the first line and the description.
//!
//! Both work on the comment text directly and never go through tag
//! splitting, so they stay consistent regardless of allow/ignore options.

use std::sync::OnceLock;

use regex::Regex;

use super::normalize::{strip_margins, unify_line_endings};

/// First tag line: indentation, `@`, then a word character.
fn first_tag_regex() -> &'static Regex {
    static FIRST_TAG: OnceLock<Regex> = OnceLock::new();
    FIRST_TAG.get_or_init(|| Regex::new(r"(?m)^[ \t]*@\w").expect("Invalid first tag regex"))
}

/// Return the first content line of a doc block.
///
/// Line 0 is taken to be the opening `/**` line, so this is line 1 with
/// decoration trimmed. Single-line comments have no first line.
pub fn first_line(comment: &str) -> String {
    comment
        .split("\r\n")
        .flat_map(|line| line.split(['\n', '\r']))
        .nth(1)
        .map(|line| {
            line.trim_matches(|c: char| matches!(c, '/' | '*' | '\t' | ' '))
                .to_string()
        })
        .unwrap_or_default()
}

/// Return all text before the first tag line, decoration removed.
///
/// Multi-line descriptions are returned with their line breaks.
pub fn description(comment: &str) -> String {
    let unified = unify_line_endings(comment.trim().trim_matches('/'));
    let stripped = strip_margins(&unified);
    let text = stripped.trim();

    match first_tag_regex().find(text) {
        Some(tag) => text[..tag.start()].trim().to_string(),
        None => text.to_string(),
    }
}
