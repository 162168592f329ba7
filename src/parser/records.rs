//! Record builder — assembles function, class and file records from text.
//!
//! Every field is derived from the span handed in; nothing looks at a
//! sibling or parent record.

use super::tags::{self, exclude_blocks, extract_tag, first_block, first_tag, split_blocks};
use crate::model::*;

/// Parse one `@function` block.
pub fn parse_function(text: &str) -> FunctionDoc {
    FunctionDoc {
        name: first_tag(text, tags::NAME),
        description: first_block(text, tags::DESCRIPTION),
        dependencies: first_tag(text, tags::DEPENDENCIES),
        args: extract_tag(text, tags::ARGS),
        side_effects: extract_tag(text, tags::SIDE_EFFECTS),
        returns: extract_tag(text, tags::RETURNS),
    }
}

/// Parse every `@function` block that is not nested in a `@class` block.
pub fn parse_functions(text: &str) -> Vec<FunctionDoc> {
    let outside_classes = exclude_blocks(text, tags::CLASS);
    split_blocks(&outside_classes, tags::FUNCTION)
        .into_iter()
        .map(parse_function)
        .collect()
}

/// Parse one `@class` block; its `@function` blocks become methods.
pub fn parse_class(text: &str) -> ClassDoc {
    ClassDoc {
        name: first_tag(text, tags::NAME),
        description: first_block(text, tags::DESCRIPTION),
        dependencies: first_tag(text, tags::DEPENDENCIES),
        methods: parse_functions(text),
    }
}

pub fn parse_classes(text: &str) -> Vec<ClassDoc> {
    split_blocks(text, tags::CLASS)
        .into_iter()
        .map(parse_class)
        .collect()
}

/// Parse a whole source file.
///
/// File-level scalars are the first match anywhere in the text, so a file
/// without its own `@description` picks up the first one it contains.
pub fn parse_file(text: &str) -> FileDoc {
    FileDoc {
        filename: first_tag(text, tags::FILENAME),
        repository: first_tag(text, tags::REPOSITORY),
        creator: first_tag(text, tags::CREATOR),
        description: first_block(text, tags::DESCRIPTION),
        dependencies: first_tag(text, tags::DEPENDENCIES),
        classes: parse_classes(text),
        functions: parse_functions(text),
    }
}
