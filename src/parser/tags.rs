//! Tag extraction.
//!
//! A normalized comment is split into segments at every line that starts
//! with `@`. Each segment is one tag occurrence: the name is the word right
//! after the `@`, the value is everything up to the next tag line.

use std::sync::OnceLock;

use regex::Regex;

use super::normalize::normalize;
use super::options::ParseOptions;
use super::types::TagMap;

/// Start of a tag line: optional indentation, then `@`.
fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"(?m)^[ \t]*@").expect("Invalid tag marker regex"))
}

/// Parse a doc-block comment into a tag map.
///
/// Text before the first tag line is stored under `options.default`.
/// Segments without a valid tag name are skipped.
///
/// ```
/// use doctag::parser::{parse_tags, ParseOptions};
///
/// let comment = "/**\n * Adds two numbers.\n * @since 1.0\n */";
/// let tags = parse_tags(comment, &ParseOptions::default());
///
/// assert_eq!(tags.get("description").unwrap().first(), "Adds two numbers.");
/// assert_eq!(tags.get("since").unwrap().first(), "1.0");
/// ```
pub fn parse_tags(comment: &str, options: &ParseOptions) -> TagMap {
    let mut tags = TagMap::new();

    let Some(text) = normalize(comment) else {
        return tags;
    };

    let (lead, segments) = split_segments(&text);

    if let Some(default) = options.default_tag() {
        if options.keeps(default) {
            tags.append(default, lead.trim().to_string());
        }
    }

    for segment in segments {
        let Some((name, value)) = split_name(segment) else {
            continue;
        };

        if options.keeps(name) {
            tags.append(name, value.trim().to_string());
        }
    }

    tags
}

/// Split normalized text into the leading untagged text and tag segments.
///
/// Each segment starts just after a line's leading `@` and runs to the start
/// of the next tag line.
pub fn split_segments(text: &str) -> (&str, Vec<&str>) {
    let markers: Vec<_> = marker_regex().find_iter(text).collect();
    let lead_end = markers.first().map(|first| first.start()).unwrap_or(text.len());

    let segments = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map(|next| next.start()).unwrap_or(text.len());
            &text[marker.end()..end]
        })
        .collect();

    (&text[..lead_end], segments)
}

/// Whether `name` is usable as a tag name: a letter, then word characters.
pub fn is_valid_tag_name(name: &str) -> bool {
    split_name(name).is_some_and(|(parsed, rest)| parsed.len() == name.len() && rest.is_empty())
}

/// Split a segment into its tag name and raw value.
///
/// The name is the longest run of word characters at the start of the
/// segment and must begin with a letter.
pub fn split_name(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim_start();
    let name_len = segment
        .find(|c: char| !is_word_char(c))
        .unwrap_or(segment.len());
    let name = &segment[..name_len];

    if !name.chars().next().is_some_and(char::is_alphabetic) {
        return None;
    }

    Some((name, &segment[name_len..]))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
