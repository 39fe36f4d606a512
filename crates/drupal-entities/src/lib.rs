//! Drupal node, field and taxonomy term models mapped from Services XML and
//! JSON.

pub mod field;
pub mod node;
pub mod taxonomy;

pub use field::{Field, TextField};
pub use node::{append_valid_xml, ContentType, Node, NodeError, RESULT_ROOT};
pub use taxonomy::{TaxonomyTerm, TermError};
