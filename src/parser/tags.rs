//! Tag and block primitives.
//!
//! A *tag* is a single-line marker followed by its value (`@args: x`).
//! A *block* is the text between two occurrences of the same marker
//! (`@description ... @description`). Blocks are paired purely by parity:
//! splitting on the marker gives segments whose odd positions are inside a
//! block and whose even positions are outside. Nothing checks that markers
//! are balanced: an odd count simply makes the trailing segment "inside".

// -- Designators --------------------------------------------------------------

pub const NAME: &str = "@name:";
pub const DESCRIPTION: &str = "@description";
pub const DEPENDENCIES: &str = "@dependencies:";
pub const ARGS: &str = "@args:";
pub const SIDE_EFFECTS: &str = "@sideEffects:";
pub const RETURNS: &str = "@returns:";
pub const FILENAME: &str = "@filename:";
pub const REPOSITORY: &str = "@repository:";
pub const CREATOR: &str = "@creator:";
pub const CLASS: &str = "@class";
pub const FUNCTION: &str = "@function";

// -- Tags ---------------------------------------------------------------------

/// Collect the value of `designator` from every line that contains it.
///
/// The value is whatever follows the first occurrence on that line, trimmed.
/// Lines without the designator are skipped; no match yields an empty list.
pub fn extract_tag(text: &str, designator: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            line.find(designator)
                .map(|pos| line[pos + designator.len()..].trim().to_string())
        })
        .collect()
}

/// First value of `designator`, if any line carries it.
pub fn first_tag(text: &str, designator: &str) -> Option<String> {
    extract_tag(text, designator).into_iter().next()
}

// -- Blocks -------------------------------------------------------------------

/// Segments strictly between paired occurrences of `delim`, in order.
pub fn split_blocks<'a>(text: &'a str, delim: &str) -> Vec<&'a str> {
    text.split(delim)
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, segment)| segment)
        .collect()
}

/// Text outside every `delim` block, segments joined by a single space.
pub fn exclude_blocks(text: &str, delim: &str) -> String {
    text.split(delim)
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, segment)| segment)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `delim` block, trimmed.
pub fn first_block(text: &str, delim: &str) -> Option<String> {
    split_blocks(text, delim)
        .first()
        .map(|block| block.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_values_in_line_order() {
        let text = "@args: x\nnothing here\n  * @args: y \n";
        assert_eq!(extract_tag(text, ARGS), vec!["x", "y"]);
    }

    #[test]
    fn tag_absent_is_empty() {
        assert!(extract_tag("no tags at all\n", RETURNS).is_empty());
        assert_eq!(first_tag("no tags at all\n", NAME), None);
    }

    #[test]
    fn tag_value_follows_first_occurrence() {
        assert_eq!(
            extract_tag("@name: a @name: b", NAME),
            vec!["a @name: b"]
        );
    }

    #[test]
    fn tag_strips_crlf() {
        assert_eq!(first_tag("@name: foo\r\n", NAME).as_deref(), Some("foo"));
    }

    #[test]
    fn blocks_paired_by_parity() {
        let text = "a @x b @x c @x d @x e";
        assert_eq!(split_blocks(text, "@x"), vec![" b ", " d "]);
        assert_eq!(exclude_blocks(text, "@x"), "a   c   e");
    }

    #[test]
    fn block_counts_for_even_markers() {
        let text = "0@f1@f2@f3@f4@f5@f6";
        // 6 markers -> 3 inside, 4 outside
        assert_eq!(split_blocks(text, "@f"), vec!["1", "3", "5"]);
        assert_eq!(exclude_blocks(text, "@f"), "0 2 4 6");
    }

    #[test]
    fn absent_marker_keeps_whole_text_outside() {
        assert!(split_blocks("plain text", "@class").is_empty());
        assert_eq!(exclude_blocks("plain text", "@class"), "plain text");
    }

    #[test]
    fn unbalanced_marker_still_splits_by_parity() {
        assert_eq!(split_blocks("head @class tail", "@class"), vec![" tail"]);
        assert_eq!(exclude_blocks("head @class tail", "@class"), "head ");
        assert_eq!(split_blocks("a @x b @x c @x d", "@x"), vec![" b ", " d"]);
    }

    #[test]
    fn first_block_is_trimmed() {
        assert_eq!(
            first_block("@description\n  hello\n@description", DESCRIPTION).as_deref(),
            Some("hello")
        );
        assert_eq!(first_block("nothing", DESCRIPTION), None);
    }
}
