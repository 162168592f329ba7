//! Data model for parsed annotations — format-agnostic.
//!
//! Every record is built once from a span of text and never mutated
//! afterwards. Singular fields are `None` when the tag is absent.

use serde::Serialize;

/// A documented function, or a method when it sits inside a class block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDoc {
    /// First `@name:` value
    pub name: Option<String>,
    /// First `@description` block
    pub description: Option<String>,
    /// First `@dependencies:` value
    pub dependencies: Option<String>,
    /// Every `@args:` value, one per line
    pub args: Vec<String>,
    /// Every `@sideEffects:` value
    pub side_effects: Vec<String>,
    /// Every `@returns:` value
    pub returns: Vec<String>,
}

/// A documented class and the methods declared inside its block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dependencies: Option<String>,
    pub methods: Vec<FunctionDoc>,
}

/// Complete parsed document from a single source file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDoc {
    /// `@filename:`
    pub filename: Option<String>,
    /// `@repository:`
    pub repository: Option<String>,
    /// `@creator:`
    pub creator: Option<String>,
    pub description: Option<String>,
    pub dependencies: Option<String>,
    pub classes: Vec<ClassDoc>,
    /// Top-level functions only; methods live in their class
    pub functions: Vec<FunctionDoc>,
}
