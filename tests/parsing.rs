//! End-to-end parsing of fixture comments and source files.

use std::fs;
use std::path::PathBuf;

use insta::assert_json_snapshot;
use pretty_assertions::assert_eq;

use doctag::cli::scan::scan_source;
use doctag::parser::{description, first_line, normalize, parse_tags, ParseOptions, TagValue};
use doctag::Manifest;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

#[test]
fn test_widget_with_manifest_defaults() {
    let comment = load_fixture("widget.txt");
    let tags = parse_tags(&comment, &Manifest::default().parse_options());

    assert_json_snapshot!(tags, @r###"
    {
      "description": "Builds a widget.",
      "throws": [
        "Error first",
        "Error second"
      ]
    }
    "###);
}

#[test]
fn test_widget_with_neutral_options() {
    let comment = load_fixture("widget.txt");
    let tags = parse_tags(&comment, &ParseOptions::default());

    assert_eq!(
        tags.get("param"),
        Some(&TagValue::Scalar("string $name".to_string()))
    );
    assert_eq!(tags.get("return"), Some(&TagValue::Scalar("Widget".to_string())));
    assert_eq!(tags.len(), 4);
}

#[test]
fn test_widget_summaries() {
    let comment = load_fixture("widget.txt");

    assert_eq!(first_line(&comment), "Builds a widget.");
    assert_eq!(description(&comment), "Builds a widget.");
}

#[test]
fn test_empty_comment() {
    assert!(parse_tags("", &ParseOptions::default()).is_empty());
    assert_eq!(first_line(""), "");
    assert_eq!(description(""), "");
}

#[test]
fn test_crlf_fixture() {
    let comment = load_fixture("crlf.txt");
    let tags = parse_tags(&comment, &ParseOptions::default());

    assert_eq!(tags.get("description").unwrap().first(), "Windows line endings.");
    assert_eq!(tags.get("since").unwrap().first(), "2.1");
    assert_eq!(first_line(&comment), "Windows line endings.");
    assert_eq!(description(&comment), "Windows line endings.");
}

#[test]
fn test_description_matches_default_tag_with_trailing_newline() {
    for comment in ["/**\n */\n", "/**\n * Just text.\n */\n", "/**\r\n * Windows.\r\n */\r\n"] {
        let tags = parse_tags(comment, &ParseOptions::default());
        let default = tags.get("description").map(|value| value.first().to_string());

        assert_eq!(default.unwrap_or_default(), description(comment));
    }
}

#[test]
fn test_untagged_text_equals_normalized_text() {
    let comment = "/**\n * Line one.\n *\n * Line three.\n */";
    let tags = parse_tags(comment, &ParseOptions::default());

    assert_eq!(tags.len(), 1);
    assert_eq!(
        tags.get("description").unwrap().as_scalar(),
        normalize(comment).as_deref()
    );
}

#[test]
fn test_scan_widget_source() {
    let source = load_fixture("Widget.php");
    let records = scan_source("Widget.php", &source, &Manifest::default().parse_options());

    assert_json_snapshot!(records, @r###"
    [
      {
        "file": "Widget.php",
        "line": 5,
        "declaration": "class WidgetFactory",
        "tags": {
          "description": "Class WidgetFactory",
          "package": "Acme\\Factory"
        }
      },
      {
        "file": "Widget.php",
        "line": 11,
        "declaration": "public function build(string $name): Widget",
        "tags": {
          "description": "Builds a widget.\n\nThe widget is configured but not yet started.",
          "throws": [
            "Error first",
            "Error second"
          ]
        }
      },
      {
        "file": "Widget.php",
        "line": 25,
        "declaration": "public function make(string $name): Widget",
        "tags": {
          "deprecated": "use build()",
          "description": "",
          "see": [
            "WidgetFactory::build()",
            "Widget"
          ]
        }
      }
    ]
    "###);
}

#[test]
fn test_scan_widget_source_with_allow_list() {
    let source = load_fixture("Widget.php");
    let options = ParseOptions::new().allow(["see"]).ignore(["param", "return"]);
    let records = scan_source("Widget.php", &source, &options);

    let names: Vec<Vec<&str>> = records.iter().map(|r| r.tags.names().collect()).collect();
    assert_eq!(
        names,
        vec![
            vec!["description"],
            vec!["description"],
            vec!["description", "see"],
        ]
    );
}
