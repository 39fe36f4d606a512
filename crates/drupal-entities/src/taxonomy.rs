//! Taxonomy terms as exchanged in JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A category/tag entity. Missing keys and `null` both decode to `None`;
/// absent values are left out when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl TaxonomyTerm {
    pub fn new(tid: Option<i64>, vid: Option<i64>, name: Option<String>) -> Self {
        TaxonomyTerm { tid, vid, name }
    }

    pub fn from_json(json: &str) -> Result<Self, TermError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TermError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn tid(&self) -> Option<i64> {
        self.tid
    }

    pub fn set_tid(&mut self, tid: Option<i64>) {
        self.tid = tid;
    }

    /// Vocabulary the term belongs to.
    pub fn vid(&self) -> Option<i64> {
        self.vid
    }

    pub fn set_vid(&mut self, vid: Option<i64>) {
        self.vid = vid;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}
