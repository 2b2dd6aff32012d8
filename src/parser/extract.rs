//! Doc-block extraction from source files.
//!
//! Finds every `/** ... */` comment in a file together with the
//! declaration line that follows it.

use serde::Serialize;

use super::span::Span;

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// A doc-block comment found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// Raw comment text including the `/**` and `*/` delimiters
    pub text: String,
    /// Location of the comment in the source
    pub span: Span,
    /// First non-blank line after the comment, if it is code
    pub declaration: Option<String>,
}

/// Extract all doc blocks from a source file.
///
/// `/**/` is an empty ordinary comment, not a doc block. An unterminated
/// `/**` ends extraction.
pub fn extract_doc_blocks(source: &str) -> Vec<DocBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(OPEN) {
        let start = cursor + found;
        let body_start = start + OPEN.len();

        if source[body_start..].starts_with('/') {
            cursor = body_start + 1;
            continue;
        }

        let Some(close) = source[body_start..].find(CLOSE) else {
            break;
        };
        let end = body_start + close + CLOSE.len();

        blocks.push(DocBlock {
            text: source[start..end].to_string(),
            span: Span::from_offsets(source, start, end),
            declaration: find_declaration(&source[end..]),
        });

        cursor = end;
    }

    blocks
}

/// The first non-blank line of `rest`, unless it opens another comment.
fn find_declaration(rest: &str) -> Option<String> {
    let line = rest.lines().map(str::trim).find(|line| !line.is_empty())?;

    if line.starts_with("/*") || line.starts_with("//") {
        return None;
    }

    Some(line.to_string())
}
