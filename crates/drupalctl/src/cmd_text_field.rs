use std::path::Path;

use anyhow::{bail, Result};
use drupal_entities::{Field, TextField};
use serde::Serialize;

use crate::common;

#[derive(Serialize)]
struct TextFieldView<'a> {
    machine_name: &'a str,
    value: Option<&'a str>,
    safe_value: Option<&'a str>,
    format: Option<&'a str>,
    xml: String,
}

pub fn run(file: &Path, name: &str, all: bool, json: bool) -> Result<()> {
    let xml = common::read_input(file)?;
    let field = TextField::from_xml_named(name, &xml);
    let rendered = if all {
        field.to_all_xml()
    } else {
        field.to_post_xml()
    };
    let Some(rendered) = rendered else {
        bail!("field {name} is not set in {}", file.display());
    };

    if json {
        let view = TextFieldView {
            machine_name: field.machine_name(),
            value: field.value(),
            safe_value: field.safe_value(),
            format: field.format(),
            xml: rendered,
        };
        common::print_json(&view)?;
    } else {
        println!("{rendered}");
    }
    Ok(())
}
