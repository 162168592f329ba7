//! Markdown renderer.
//!
//! Fixed heading levels and literal labels. Extracted values are emitted
//! verbatim with no escaping, and a missing value renders as nothing.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

/// Separator between rendered classes and between top-level functions.
const SECTION_GAP: &str = "\n\n\n\n";

impl Renderer for MarkdownRenderer {
    fn render(&self, files: &[FileDoc]) -> Result<String> {
        Ok(files
            .iter()
            .map(render_file)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn value(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

/// Render one file: header fields, then classes, then top-level functions.
pub fn render_file(file: &FileDoc) -> String {
    let mut out = String::new();

    out.push_str(&format!("# FILE NAME: {}\n", value(&file.filename)));
    out.push_str(&format!("### REPOSITORY: {}\n", value(&file.repository)));
    out.push_str(&format!("### CREATOR: {}\n", value(&file.creator)));
    out.push_str(&format!("### DESCRIPTION:\n{}\n", value(&file.description)));
    out.push_str(&format!("###DEPENDENCIES: \n{}\n", value(&file.dependencies)));
    out.push_str("\n\n\n");

    out.push_str("## CLASSES:\n");
    let classes: Vec<String> = file.classes.iter().map(render_class).collect();
    out.push_str(&classes.join(SECTION_GAP));
    out.push('\n');

    out.push_str("## FUNCTIONS:\n");
    let functions: Vec<String> = file.functions.iter().map(render_function).collect();
    out.push_str(&functions.join(SECTION_GAP));
    out.push('\n');

    out
}

pub fn render_class(class: &ClassDoc) -> String {
    let mut out = String::new();

    out.push_str(&format!("### NAME: {}\n", value(&class.name)));
    out.push_str(&format!("#### DESCRIPTION:\n{}\n", value(&class.description)));
    out.push_str(&format!("#### DEPENDENCIES: {}\n", value(&class.dependencies)));
    out.push_str("#### METHODS:\n");

    let methods: Vec<String> = class.methods.iter().map(render_function).collect();
    out.push_str(&methods.join("\n"));
    out
}

/// Render a function or method. Every list prints one entry per line.
pub fn render_function(func: &FunctionDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### NAME: {}", value(&func.name)));
    lines.push("#### DESCRIPTION:".to_string());
    lines.push(value(&func.description).to_string());
    lines.push(format!("DEPENDENCIES: {}", value(&func.dependencies)));
    lines.push("#### ARGUMENTS:".to_string());
    lines.push(func.args.join("\n"));
    lines.push("#### SIDE EFFECTS:".to_string());
    lines.push(func.side_effects.join("\n"));
    lines.push("#### RETURNS:".to_string());
    lines.push(func.returns.join("\n"));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
