//! Extract scalar field values from Drupal Services XML using quick-xml.
//!
//! Lookups are addressed with a small XPath subset (see [`XPath`]). The
//! [`parse_field`] entry point is lenient: malformed documents and bad
//! expressions are logged and reported as an absent value.

mod document;
mod xpath;

pub use document::{Document, ElementRef};
pub use xpath::{Axis, NameTest, Step, XPath};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("xml: {0}")]
    Xml(String),
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("invalid expression '{expr}': {reason}")]
    Expression { expr: String, reason: String },
}

/// Evaluate `xpath` against `xml` and return the string value of the first
/// selected element in document order.
///
/// Unlike [`parse_field`] this surfaces parse failures and keeps blank text.
pub fn evaluate(xpath: &str, xml: &str) -> Result<Option<String>, XmlError> {
    let path = XPath::parse(xpath)?;
    let document = Document::parse(xml)?;
    Ok(document
        .select(&path)
        .first()
        .map(|&element| document.string_value(element)))
}

/// Look up a single field, treating blank text, missing elements and any
/// evaluation failure as absent.
pub fn parse_field(xpath: &str, xml: &str) -> Option<String> {
    match evaluate(xpath, xml) {
        Ok(value) => value.filter(|text| !is_blank(text)),
        Err(err) => {
            warn!(xpath, error = %err, "field lookup failed, treating as absent");
            None
        }
    }
}

/// `true` when the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Convert looked-up text into an integer; blank or unparsable text is absent.
pub fn safe_integer(text: Option<&str>) -> Option<i64> {
    let text = text.filter(|text| !is_blank(text))?;
    text.parse().ok()
}

/// Drupal encodes flags as `"0"` / `"1"`. Any other content is unknown.
pub fn safe_boolean(text: Option<&str>) -> Option<bool> {
    match text {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<result>
  <nid>42</nid>
  <title>Hello &amp; welcome</title>
  <status>1</status>
  <log>   </log>
  <body><und><item><value><![CDATA[<p>raw</p>]]></value></item></und></body>
</result>"#;

    #[test]
    fn parse_field_reads_absolute_paths() {
        assert_eq!(parse_field("/result/nid", NODE).as_deref(), Some("42"));
        assert_eq!(
            parse_field("/result/title", NODE).as_deref(),
            Some("Hello & welcome")
        );
        assert_eq!(
            parse_field("//body//value", NODE).as_deref(),
            Some("<p>raw</p>")
        );
    }

    #[test]
    fn parse_field_blank_and_missing_are_absent() {
        assert_eq!(parse_field("/result/log", NODE), None);
        assert_eq!(parse_field("/result/missing", NODE), None);
        assert_eq!(
            evaluate("/result/log", NODE).expect("evaluate").as_deref(),
            Some("   ")
        );
    }

    #[test]
    fn parse_field_swallows_errors() {
        assert_eq!(parse_field("/result/nid", "<result><nid>1</result>"), None);
        assert_eq!(parse_field("result[1]", NODE), None);
        assert_eq!(parse_field("/result/nid", ""), None);
        assert!(matches!(
            evaluate("/result/nid", "<result><nid>1</result>"),
            Err(XmlError::Xml(_)) | Err(XmlError::Malformed(_))
        ));
        assert!(matches!(
            evaluate("result", NODE),
            Err(XmlError::Expression { .. })
        ));
    }

    #[test]
    fn safe_integer_rejects_non_numeric() {
        assert_eq!(safe_integer(Some("1700000000")), Some(1_700_000_000));
        assert_eq!(safe_integer(Some("-3")), Some(-3));
        assert_eq!(safe_integer(Some("abc")), None);
        assert_eq!(safe_integer(Some("")), None);
        assert_eq!(safe_integer(Some("  ")), None);
        assert_eq!(safe_integer(Some("12.5")), None);
        assert_eq!(safe_integer(None), None);
    }

    #[test]
    fn safe_boolean_only_accepts_zero_and_one() {
        assert_eq!(safe_boolean(Some("1")), Some(true));
        assert_eq!(safe_boolean(Some("0")), Some(false));
        for other in ["true", "false", "", " ", "2", "01", " 1"] {
            assert_eq!(safe_boolean(Some(other)), None, "input {other:?}");
        }
        assert_eq!(safe_boolean(None), None);
    }

    #[test]
    fn random_integers_convert() {
        for _ in 0..256 {
            let value = fastrand::i64(..);
            assert_eq!(safe_integer(Some(&value.to_string())), Some(value));
        }
    }

    #[test]
    fn random_flag_text_is_unknown() {
        for _ in 0..256 {
            let len = fastrand::usize(..6);
            let text: String = (0..len).map(|_| fastrand::alphanumeric()).collect();
            let expected = match text.as_str() {
                "0" => Some(false),
                "1" => Some(true),
                _ => None,
            };
            assert_eq!(safe_boolean(Some(&text)), expected, "input {text:?}");
        }
    }
}
