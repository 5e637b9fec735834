//! sitegen — convert a tree of Markdown documents into a static HTML site.
//!
//! The core is a pure Markdown→HTML pipeline: [`spans_of`] classifies
//! inline text, [`split_blocks`]/[`classify_block`] recognize block
//! structure, and [`markdown_to_html`] compiles the result into an
//! [`HtmlNode`] tree serialized to markup. [`generate_site`] wraps the
//! pipeline with the filesystem plumbing that turns a content tree,
//! a template and a static directory into a finished site.

mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
mod site;

pub use block::{BlockKind, Span};
pub use config::Config;
pub use error::{RenderError, SiteError};
pub use html::{block_to_node, document_to_node, extract_title, markdown_to_html};
pub use inline::spans_of;
pub use node::HtmlNode;
pub use parser::{classify_block, split_blocks};
pub use site::{assemble_page, generate_page, generate_site};
