//! Human-readable output.

use anyhow::Result;
use colored::Colorize;

use databind_core::{FieldCatalogue, RenderedComponent};

pub fn print_catalogue(catalogue: &FieldCatalogue) {
    for entry in catalogue.entries() {
        println!("{}\t{}", entry.path, entry.kind);
    }
}

pub fn print_rendered(rendered: &[RenderedComponent]) -> Result<()> {
    for output in rendered {
        println!("{} ({})", output.id.bold(), output.component_type);
        for (property, value) in &output.props {
            println!("  {property} = {}", serde_json::to_string(value)?);
        }

        if let Some(content) = output.content.as_deref() {
            println!("  content: {content}");
        }
        for label in &output.unresolved {
            eprintln!(
                "{} {}: placeholder {{{{{label}}}}} was not resolved",
                "warning:".yellow().bold(),
                output.id
            );
        }
    }
    Ok(())
}
