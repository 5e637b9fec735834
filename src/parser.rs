//! Block splitting and classification.
//!
//! A document is a sequence of blocks separated by blank lines. Each
//! block is classified structurally, first match wins: heading, fenced
//! code, quote, unordered list, ordered list, paragraph. The line
//! predicates apply to the whole block, so a block mixing list markers
//! and plain lines falls through to paragraph.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::BlockKind;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} \S").unwrap());

// Anchored on both ends, so a lone ``` cannot open and close the same fence.
static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```.*```$").unwrap());

/// Split a document into trimmed, non-empty block strings.
///
/// Blocks are separated by blank lines; runs of extra blank lines only
/// produce empty candidates, which are dropped.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a single block.
pub fn classify_block(block: &str) -> BlockKind {
    if HEADING_PATTERN.is_match(block) {
        return BlockKind::Heading;
    }
    if FENCE_PATTERN.is_match(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    if !lines.is_empty() && lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if !lines.is_empty()
        && lines
            .iter()
            .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockKind::UnorderedList;
    }
    if !lines.is_empty()
        && lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
