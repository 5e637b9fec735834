//! Error types for the rendering pipeline and site generation.

use std::path::PathBuf;

/// Errors produced while rendering a single Markdown document.
///
/// Every variant is terminal for the document being processed; the
/// pipeline never recovers or defaults internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A `**`, `` ` `` or `*` delimiter run was opened but never closed.
    #[error("invalid markdown: missing closing '{delimiter}' delimiter")]
    UnbalancedDelimiter { delimiter: &'static str },

    /// A link or image span carried no destination URL.
    #[error("invalid HTML: <{tag}> tags must have a destination URL")]
    MissingUrl { tag: &'static str },

    /// A block classified as a heading had no leading `#` run.
    #[error("invalid markdown: heading block has no '#' marker")]
    InvalidHeading,

    /// A line inside a quote block lacked the `>` prefix.
    #[error("invalid markdown: quote lines must start with '>'")]
    InvalidQuote,

    /// A line inside an unordered list matched neither `* ` nor `- `.
    #[error("invalid markdown: list entries must start with '* ' or '- '")]
    InvalidListItem,

    /// A parent node was constructed without a tag name.
    #[error("parent node must have a tag")]
    MissingTag,

    /// A parent node was constructed with no children.
    #[error("parent node must have child node(s)")]
    MissingChildren,

    /// A leaf node that requires text content had none.
    #[error("leaf node must have a value")]
    MissingValue,

    /// No level-1 heading line exists to extract the page title from.
    #[error("invalid markdown: no h1 header found")]
    NoTitleFound,
}

/// Errors produced while generating the site on disk.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render {}: {source}", path.display())]
    Page {
        path: PathBuf,
        source: RenderError,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
