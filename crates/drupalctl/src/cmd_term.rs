use std::path::Path;

use anyhow::{Context, Result};
use drupal_entities::TaxonomyTerm;

use crate::common;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let text = common::read_input(file)?;
    let term = TaxonomyTerm::from_json(&text)
        .with_context(|| format!("decode taxonomy term from {}", file.display()))?;

    if json {
        println!("{}", term.to_json().context("encode taxonomy term")?);
    } else {
        println!(
            "tid {} in vocabulary {}: {}",
            common::display_opt(term.tid()),
            common::display_opt(term.vid()),
            common::display_opt(term.name())
        );
    }
    Ok(())
}
