//! Doc-block comment parsing.
//!
//! A doc block is a `/** ... */` comment attached to a declaration. Its
//! body is free text optionally followed by tag lines:
//!
//! ```text
//! /**
//!  * Builds a widget.
//!  * @param string $name
//!  * @throws Error first
//!  * @throws Error second
//!  */
//! ```
//!
//! Parsing never fails. Empty comments give empty results and tag lines
//! without a valid name are skipped.
//!
//! # Usage
//!
//! ```
//! use doctag::parser::{description, first_line, parse_tags, ParseOptions};
//!
//! let comment = "/**\n * Builds a widget.\n * @throws Error first\n */";
//! let tags = parse_tags(comment, &ParseOptions::default());
//!
//! assert_eq!(tags.get("throws").unwrap().first(), "Error first");
//! assert_eq!(first_line(comment), "Builds a widget.");
//! assert_eq!(description(comment), "Builds a widget.");
//! ```

mod extract;
mod normalize;
mod options;
mod summary;
mod tags;
pub mod span;
pub mod types;

pub use extract::{extract_doc_blocks, DocBlock};
pub use normalize::{normalize, strip_margins};
pub use options::{ParseOptions, DEFAULT_TAG};
pub use span::{Location, Span};
pub use summary::{description, first_line};
pub use tags::{is_valid_tag_name, parse_tags};
pub use types::{TagMap, TagValue};
