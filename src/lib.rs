//! Facade re-exporting the Drupal Services mapping crates.

pub use drupal_entities::{
    append_valid_xml, ContentType, Field, Node, NodeError, TaxonomyTerm, TermError, TextField,
};
pub use drupal_xml::{parse_field, safe_boolean, safe_integer, XmlError};

pub mod xml {
    pub use drupal_xml::*;
}

pub mod entities {
    pub use drupal_entities::*;
}
