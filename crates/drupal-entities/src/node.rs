//! Common node attributes parsed from a Services `GET` response.

use drupal_xml::{parse_field, safe_boolean, safe_integer};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::field::Field;

/// Root element of a Services node document.
pub const RESULT_ROOT: &str = "/result";

#[derive(Debug, Error)]
pub enum NodeError {
    /// `nid`, `title` or `type` could not be extracted.
    #[error("invalid node XML: {xml}")]
    InvalidDocument { xml: String },
}

/// Attributes shared by every content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    nid: Option<i64>,
    uid: Option<i64>,
    title: Option<String>,
    log: Option<String>,
    status: Option<bool>,
    comment: Option<i64>,
    vid: Option<i64>,
    #[serde(rename = "type")]
    node_type: Option<String>,
    language: Option<String>,
    created: Option<i64>,
    changed: Option<i64>,
    tnid: Option<i64>,
    translate: Option<bool>,
    revision_timestamp: Option<i64>,
    revision_uid: Option<i64>,
    access_state: Option<String>,
    path: Option<String>,
    name: Option<String>,
}

fn text(field: &str, xml: &str) -> Option<String> {
    parse_field(&format!("{RESULT_ROOT}/{field}"), xml)
}

fn integer(field: &str, xml: &str) -> Option<i64> {
    safe_integer(text(field, xml).as_deref())
}

fn boolean(field: &str, xml: &str) -> Option<bool> {
    safe_boolean(text(field, xml).as_deref())
}

impl Node {
    /// Parse the common node fields from a Services `GET` response.
    pub fn from_xml(xml: &str) -> Result<Self, NodeError> {
        let mut node = Node::default();
        node.populate_from_xml(xml)?;
        Ok(node)
    }

    /// Overwrite every attribute with the values found in `xml`.
    ///
    /// The node is left untouched when the document lacks `nid`, `title` or
    /// `type`. Other attributes are looked up independently; missing or
    /// unparsable ones become `None`.
    pub fn populate_from_xml(&mut self, xml: &str) -> Result<(), NodeError> {
        // TODO: validate against a schema once Services publishes one; only
        // the identity fields are checked for now.
        if !is_valid_node_xml(xml) {
            debug!("rejecting node document without nid, title or type");
            return Err(NodeError::InvalidDocument {
                xml: xml.to_string(),
            });
        }

        *self = Node {
            nid: integer("nid", xml),
            uid: integer("uid", xml),
            title: text("title", xml),
            log: text("log", xml),
            status: boolean("status", xml),
            comment: integer("comment", xml),
            vid: integer("vid", xml),
            node_type: text("type", xml),
            language: text("language", xml),
            created: integer("created", xml),
            changed: integer("changed", xml),
            tnid: integer("tnid", xml),
            translate: boolean("translate", xml),
            revision_timestamp: integer("revision_timestamp", xml),
            revision_uid: integer("revision_uid", xml),
            access_state: text("access_state", xml),
            path: text("path", xml),
            name: text("name", xml),
        };
        debug!(nid = ?self.nid, node_type = ?self.node_type, "parsed node");
        Ok(())
    }

    pub fn nid(&self) -> Option<i64> {
        self.nid
    }

    pub fn set_nid(&mut self, nid: Option<i64>) {
        self.nid = nid;
    }

    /// Owner; initially the user that created the node.
    pub fn uid(&self) -> Option<i64> {
        self.uid
    }

    pub fn set_uid(&mut self, uid: Option<i64>) {
        self.uid = uid;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Log message of the last revision.
    pub fn log(&self) -> Option<&str> {
        self.log.as_deref()
    }

    pub fn set_log(&mut self, log: Option<String>) {
        self.log = log;
    }

    /// Published flag; `None` when the document did not say.
    pub fn status(&self) -> Option<bool> {
        self.status
    }

    pub fn set_status(&mut self, status: Option<bool>) {
        self.status = status;
    }

    pub fn comment(&self) -> Option<i64> {
        self.comment
    }

    pub fn set_comment(&mut self, comment: Option<i64>) {
        self.comment = comment;
    }

    /// Current revision id.
    pub fn vid(&self) -> Option<i64> {
        self.vid
    }

    pub fn set_vid(&mut self, vid: Option<i64>) {
        self.vid = vid;
    }

    /// Content type machine name.
    pub fn node_type(&self) -> Option<&str> {
        self.node_type.as_deref()
    }

    pub fn set_node_type(&mut self, node_type: Option<String>) {
        self.node_type = node_type;
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    /// Unix timestamp.
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    pub fn set_created(&mut self, created: Option<i64>) {
        self.created = created;
    }

    /// Unix timestamp.
    pub fn changed(&self) -> Option<i64> {
        self.changed
    }

    pub fn set_changed(&mut self, changed: Option<i64>) {
        self.changed = changed;
    }

    /// Node this one is a translation of.
    pub fn tnid(&self) -> Option<i64> {
        self.tnid
    }

    pub fn set_tnid(&mut self, tnid: Option<i64>) {
        self.tnid = tnid;
    }

    /// Whether this translation needs to be updated.
    pub fn translate(&self) -> Option<bool> {
        self.translate
    }

    pub fn set_translate(&mut self, translate: Option<bool>) {
        self.translate = translate;
    }

    pub fn revision_timestamp(&self) -> Option<i64> {
        self.revision_timestamp
    }

    pub fn set_revision_timestamp(&mut self, revision_timestamp: Option<i64>) {
        self.revision_timestamp = revision_timestamp;
    }

    /// Author of the current revision.
    pub fn revision_uid(&self) -> Option<i64> {
        self.revision_uid
    }

    pub fn set_revision_uid(&mut self, revision_uid: Option<i64>) {
        self.revision_uid = revision_uid;
    }

    /// e.g. `private`, `retired`, `active`.
    pub fn access_state(&self) -> Option<&str> {
        self.access_state.as_deref()
    }

    pub fn set_access_state(&mut self, access_state: Option<String>) {
        self.access_state = access_state;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    /// User name of the author.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

fn is_valid_node_xml(xml: &str) -> bool {
    integer("nid", xml).is_some() && text("title", xml).is_some() && text("type", xml).is_some()
}

/// Append the field's post fragment to `buffer` when it is set; unset fields
/// contribute nothing and no separator is added.
pub fn append_valid_xml(buffer: &mut String, field: &dyn Field) {
    if field.is_set() {
        if let Some(xml) = field.to_post_xml() {
            buffer.push_str(&xml);
        }
    }
}

/// A content type: the common node attributes plus its own fields.
pub trait ContentType {
    fn node(&self) -> &Node;

    fn node_mut(&mut self) -> &mut Node;

    /// Attached fields in output order.
    fn fields(&self) -> Vec<&dyn Field>;

    fn fields_mut(&mut self) -> Vec<&mut dyn Field>;

    /// Parse the node attributes and every attached field from `xml`.
    fn populate_from_xml(&mut self, xml: &str) -> Result<(), NodeError> {
        self.node_mut().populate_from_xml(xml)?;
        for field in self.fields_mut() {
            field.from_xml(xml);
        }
        Ok(())
    }

    /// Post XML of every set field, concatenated.
    fn fields_post_xml(&self) -> String {
        let mut buffer = String::new();
        for field in self.fields() {
            append_valid_xml(&mut buffer, field);
        }
        buffer
    }
}
