//! doctag - Doc-block comment tag parser
//!
//! A library for pulling tags, descriptions and summary lines out of
//! `/** ... */` comments, plus the `doctag` CLI built on it.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;

pub use config::Manifest;
pub use error::{DocError, Result};
pub use parser::{
    description, extract_doc_blocks, first_line, normalize, parse_tags, DocBlock, ParseOptions,
    TagMap, TagValue,
};
