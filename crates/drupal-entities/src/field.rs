//! Node fields addressed by machine name.

/// Text field sub-element holding the raw value.
pub const VALUE: &str = "value";
/// Text field sub-element holding the rendered, sanitized value.
pub const SAFE_VALUE: &str = "safe_value";
/// Text field sub-element holding the input format.
pub const FORMAT: &str = "format";

/// A typed sub-value attached to a node under a machine name.
///
/// A field is either unset (nothing found or assigned) or set. Only set
/// fields produce XML; the `inner_*` methods return `None` otherwise so
/// callers never emit placeholder elements.
pub trait Field {
    /// Stable key of the field, e.g. `field_body`.
    fn machine_name(&self) -> &str;

    /// `true` when the field carries a value worth sending.
    fn is_set(&self) -> bool;

    /// Replace the field's sub-values with those found in `xml`.
    ///
    /// A document that does not mention the machine name leaves the field
    /// unset.
    fn from_xml(&mut self, xml: &str);

    /// Writable sub-values only, as sent in a create/update request.
    fn inner_post_xml(&self) -> Option<String>;

    /// Writable sub-values followed by the read-only ones.
    fn inner_all_xml(&self) -> Option<String>;

    /// Post fragment of a set field; `None` when unset.
    fn to_post_xml(&self) -> Option<String> {
        if self.is_set() {
            self.inner_post_xml()
        } else {
            None
        }
    }

    /// Full fragment of a set field; `None` when unset.
    fn to_all_xml(&self) -> Option<String> {
        if self.is_set() {
            self.inner_all_xml()
        } else {
            None
        }
    }

    /// Look up `//<machine_name>//<subfield>` in `xml`, leniently.
    fn parse_subfield(&self, subfield: &str, xml: &str) -> Option<String> {
        let xpath = format!("//{}//{}", self.machine_name(), subfield);
        drupal_xml::parse_field(&xpath, xml)
    }
}

/// Formatted long text: raw value, server-rendered safe value and format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    machine_name: String,
    value: Option<String>,
    safe_value: Option<String>,
    format: Option<String>,
}

impl TextField {
    pub fn new(machine_name: impl Into<String>) -> Self {
        TextField {
            machine_name: machine_name.into(),
            ..TextField::default()
        }
    }

    /// Create the field and populate it from a node document.
    pub fn from_xml_named(machine_name: impl Into<String>, xml: &str) -> Self {
        let mut field = TextField::new(machine_name);
        field.from_xml(xml);
        field
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn safe_value(&self) -> Option<&str> {
        self.safe_value.as_deref()
    }

    pub fn set_safe_value(&mut self, safe_value: Option<String>) {
        self.safe_value = safe_value;
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn set_format(&mut self, format: Option<String>) {
        self.format = format;
    }
}

impl Field for TextField {
    fn machine_name(&self) -> &str {
        &self.machine_name
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn from_xml(&mut self, xml: &str) {
        self.value = self.parse_subfield(VALUE, xml);
        self.safe_value = self.parse_subfield(SAFE_VALUE, xml);
        self.format = self.parse_subfield(FORMAT, xml);
    }

    fn inner_post_xml(&self) -> Option<String> {
        let value = self.value.as_deref()?;
        Some(format!("<item><value>{value}</value></item>"))
    }

    fn inner_all_xml(&self) -> Option<String> {
        let mut out = self.inner_post_xml()?;
        // Values are written verbatim: safe_value already holds markup.
        out.push_str("<safe_value>");
        out.push_str(self.safe_value.as_deref().unwrap_or_default());
        out.push_str("</safe_value><format>");
        out.push_str(self.format.as_deref().unwrap_or_default());
        out.push_str("</format>");
        Some(out)
    }
}
