//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the record model directly; absent fields become `null`.

use crate::model::FileDoc;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, files: &[FileDoc]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(files).context("failed to serialize records")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;

    #[test]
    fn records_as_json() {
        let file = parse_file("@filename: a.ts\n@function\n@name: go\n@sideEffects: none\n@function\n");
        let out = JsonRenderer.render(&[file]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["filename"], "a.ts");
        assert!(value[0]["creator"].is_null());
        assert_eq!(value[0]["functions"][0]["name"], "go");
        assert_eq!(value[0]["functions"][0]["sideEffects"][0], "none");
        assert_eq!(value[0]["classes"].as_array().map(Vec::len), Some(0));
    }
}
