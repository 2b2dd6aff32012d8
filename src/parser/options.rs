//! Tag filtering options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tag name that absorbs text before the first explicit tag.
pub const DEFAULT_TAG: &str = "description";

/// Options controlling which tags `parse_tags` keeps.
///
/// `ParseOptions::default()` is neutral: nothing is ignored and every tag
/// is allowed. Caller-level defaults such as ignoring `param` and `return`
/// belong in the project manifest, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// When non-empty, only these tags (and `default`) are kept.
    pub allow: BTreeSet<String>,

    /// Tags dropped unconditionally. Checked before `allow`.
    pub ignore: BTreeSet<String>,

    /// Tag that receives the leading untagged text. Empty disables it.
    pub default: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow: BTreeSet::new(),
            ignore: BTreeSet::new(),
            default: DEFAULT_TAG.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tags to the allow list.
    pub fn allow<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add tags to the ignore list.
    pub fn ignore<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the default tag name.
    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default = name.into();
        self
    }

    /// The default tag name, or `None` when leading text should be dropped.
    pub fn default_tag(&self) -> Option<&str> {
        if self.default.is_empty() {
            None
        } else {
            Some(self.default.as_str())
        }
    }

    /// Whether a tag with this name survives the ignore and allow filters.
    pub fn keeps(&self, name: &str) -> bool {
        if self.ignore.contains(name) {
            return false;
        }

        if self.allow.is_empty() {
            return true;
        }

        self.allow.contains(name) || self.default_tag() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_neutral() {
        let options = ParseOptions::default();

        assert!(options.allow.is_empty());
        assert!(options.ignore.is_empty());
        assert_eq!(options.default, "description");
        assert!(options.keeps("param"));
        assert!(options.keeps("return"));
    }

    #[test]
    fn test_allow_includes_default_tag() {
        let options = ParseOptions::new().allow(["since"]);

        assert!(options.keeps("since"));
        assert!(options.keeps("description"));
        assert!(!options.keeps("author"));
    }

    #[test]
    fn test_ignore_beats_allow() {
        let options = ParseOptions::new().allow(["since"]).ignore(["since"]);

        assert!(!options.keeps("since"));
    }

    #[test]
    fn test_ignore_can_drop_default_tag() {
        let options = ParseOptions::new().ignore(["description"]);

        assert!(!options.keeps("description"));
    }

    #[test]
    fn test_empty_default_disables_default_tag() {
        let options = ParseOptions::new().with_default("").allow(["since"]);

        assert_eq!(options.default_tag(), None);
        assert!(!options.keeps(""));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ParseOptions = serde_yaml::from_str("ignore: [param]").unwrap();

        assert!(options.ignore.contains("param"));
        assert_eq!(options.default, "description");
    }
}
