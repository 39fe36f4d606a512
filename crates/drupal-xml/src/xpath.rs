//! Location-path subset of XPath used to address Services fields.
//!
//! Supported: absolute paths made of `/name` (child) and `//name`
//! (descendant) steps, where a name may carry a prefix or be `*`.

use std::fmt;

use crate::XmlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `/name`
    Child,
    /// `//name`
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTest {
    /// `*`
    Any,
    Named(String),
}

impl NameTest {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameTest::Any => true,
            NameTest::Named(expected) => expected == name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: NameTest,
}

/// A compiled expression. Immutable, so one instance can be evaluated
/// against any number of documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    source: String,
    steps: Vec<Step>,
}

impl XPath {
    pub fn parse(expr: &str) -> Result<Self, XmlError> {
        let invalid = |reason: &str| XmlError::Expression {
            expr: expr.to_string(),
            reason: reason.to_string(),
        };

        let mut rest = expr.trim();
        if !rest.starts_with('/') {
            return Err(invalid("only absolute location paths are supported"));
        }

        let mut steps = Vec::new();
        while !rest.is_empty() {
            let (axis, after) = if let Some(after) = rest.strip_prefix("//") {
                (Axis::Descendant, after)
            } else if let Some(after) = rest.strip_prefix('/') {
                (Axis::Child, after)
            } else {
                return Err(invalid("expected '/' between steps"));
            };
            let end = after.find('/').unwrap_or(after.len());
            let test = parse_name_test(&after[..end]).map_err(invalid)?;
            steps.push(Step { axis, test });
            rest = &after[end..];
        }

        Ok(XPath {
            source: expr.trim().to_string(),
            steps,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_name_test(token: &str) -> Result<NameTest, &'static str> {
    if token.is_empty() {
        return Err("empty step");
    }
    if token == "*" {
        return Ok(NameTest::Any);
    }
    let mut parts = token.split(':');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), None, _) => is_ncname(local),
        (Some(prefix), Some(local), None) => is_ncname(prefix) && is_ncname(local),
        _ => false,
    };
    if valid {
        Ok(NameTest::Named(token.to_string()))
    } else {
        Err("unsupported step; expected an element name or '*'")
    }
}

fn is_ncname(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
