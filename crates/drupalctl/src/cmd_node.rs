use std::path::Path;

use anyhow::{Context, Result};
use drupal_entities::Node;
use tracing::info;

use crate::common::{self, display_opt};

pub fn run(file: &Path, json: bool) -> Result<()> {
    let xml = common::read_input(file)?;
    let node = Node::from_xml(&xml).with_context(|| format!("parse node from {}", file.display()))?;
    info!(nid = ?node.nid(), "node parsed");

    if json {
        common::print_json(&node)?;
    } else {
        println!("nid:      {}", display_opt(node.nid()));
        println!("type:     {}", display_opt(node.node_type()));
        println!("title:    {}", display_opt(node.title()));
        println!("status:   {}", display_opt(node.status()));
        println!("vid:      {}", display_opt(node.vid()));
        println!("language: {}", display_opt(node.language()));
        println!("author:   {}", display_opt(node.name()));
        println!("path:     {}", display_opt(node.path()));
    }
    Ok(())
}
