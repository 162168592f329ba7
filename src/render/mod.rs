//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::FileDoc;
use anyhow::{anyhow, Result};

/// Trait for rendering parsed files into a specific output format.
pub trait Renderer {
    /// Render every file, in input order, into one document.
    fn render(&self, files: &[FileDoc]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("markdown").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = create_renderer("html").err().unwrap();
        assert!(err.to_string().contains("unknown format: html"));
    }
}
