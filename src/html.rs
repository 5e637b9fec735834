//! Compile classified blocks into an HTML node tree.

use crate::block::{BlockKind, Span};
use crate::error::RenderError;
use crate::inline::spans_of;
use crate::node::HtmlNode;
use crate::parser::{classify_block, split_blocks};

/// Compile a whole Markdown document to serialized HTML.
pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    document_to_node(markdown)?.render()
}

/// Compile a whole Markdown document to its root `<div>` node, one
/// child per block in document order.
pub fn document_to_node(markdown: &str) -> Result<HtmlNode, RenderError> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(block_to_node(&block, classify_block(&block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Extract the page title: the remainder of the first level-1 heading
/// line. Page generation cannot proceed without one.
pub fn extract_title(markdown: &str) -> Result<String, RenderError> {
    for line in markdown.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            let title = rest.trim();
            if !title.is_empty() {
                return Ok(title.to_string());
            }
        }
    }
    Err(RenderError::NoTitleFound)
}

/// Compile one classified block into its node subtree.
///
/// The list, quote and heading arms re-validate their line markers
/// independently of the classifier.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, RenderError> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => code_to_node(block),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", inline_children(&text)?))
}

fn heading_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return Err(RenderError::InvalidHeading);
    }
    let text = block[level..].trim();
    Ok(HtmlNode::parent(
        format!("h{level}"),
        inline_children(text)?,
    ))
}

fn code_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let interior = block
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(block);
    let interior = interior.strip_prefix('\n').unwrap_or(interior);

    // Inline classification runs inside fenced code as well; flagged
    // for a product decision, kept as observed until then.
    let code = HtmlNode::parent("code", inline_children(interior)?);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let mut parts = Vec::new();
    for line in block.lines() {
        let Some(rest) = line.strip_prefix('>') else {
            return Err(RenderError::InvalidQuote);
        };
        let rest = rest.trim();
        if !rest.is_empty() {
            parts.push(rest);
        }
    }
    Ok(HtmlNode::parent(
        "blockquote",
        inline_children(&parts.join(" "))?,
    ))
}

fn unordered_list_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let rest = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "))
            .ok_or(RenderError::InvalidListItem)?;
        items.push(HtmlNode::parent("li", inline_children(rest.trim())?));
    }
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    let mut items = Vec::new();
    for (i, line) in block.lines().enumerate() {
        let marker = format!("{}. ", i + 1);
        let rest = line
            .strip_prefix(&marker)
            .ok_or(RenderError::InvalidListItem)?;
        items.push(HtmlNode::parent("li", inline_children(rest.trim())?));
    }
    Ok(HtmlNode::parent("ol", items))
}

/// Inline-classify `text` and map each span to a leaf node.
///
/// Text that classifies to nothing (empty, or delimiters only) yields a
/// single empty text leaf so the wrapping parent is never childless.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    let children: Vec<HtmlNode> = spans_of(text)?
        .iter()
        .map(span_to_node)
        .collect::<Result<_, _>>()?;
    if children.is_empty() {
        return Ok(vec![HtmlNode::text("")]);
    }
    Ok(children)
}

fn span_to_node(span: &Span) -> Result<HtmlNode, RenderError> {
    match span {
        Span::Plain(text) => Ok(HtmlNode::text(text.clone())),
        Span::Bold(text) => Ok(HtmlNode::leaf("b", text.clone())),
        Span::Italic(text) => Ok(HtmlNode::leaf("i", text.clone())),
        Span::Code(text) => Ok(HtmlNode::leaf("code", text.clone())),
        Span::Link { text, url } => {
            if url.is_empty() {
                return Err(RenderError::MissingUrl { tag: "a" });
            }
            Ok(HtmlNode::leaf_with_attrs(
                "a",
                text.clone(),
                vec![("href".to_string(), url.clone())],
            ))
        }
        Span::Image { alt, url } => {
            if url.is_empty() {
                return Err(RenderError::MissingUrl { tag: "img" });
            }
            Ok(HtmlNode::void(
                "img",
                vec![
                    ("src".to_string(), url.clone()),
                    ("alt".to_string(), alt.clone()),
                ],
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph() {
        assert_eq!(
            markdown_to_html("Hello world").unwrap(),
            "<div><p>Hello world</p></div>"
        );
    }

    #[test]
    fn paragraph_lines_join_with_a_space() {
        assert_eq!(
            markdown_to_html("line one\nline two").unwrap(),
            "<div><p>line one line two</p></div>"
        );
    }

    #[test]
    fn paragraph_with_inline_formatting() {
        assert_eq!(
            markdown_to_html("some **bold** and *italic* words").unwrap(),
            "<div><p>some <b>bold</b> and <i>italic</i> words</p></div>"
        );
    }

    #[test]
    fn headings() {
        assert_eq!(markdown_to_html("# One").unwrap(), "<div><h1>One</h1></div>");
        assert_eq!(
            markdown_to_html("### Three").unwrap(),
            "<div><h3>Three</h3></div>"
        );
        assert_eq!(
            markdown_to_html("###### Six").unwrap(),
            "<div><h6>Six</h6></div>"
        );
    }

    #[test]
    fn non_heading_fed_to_heading_compiler_fails() {
        assert_eq!(
            block_to_node("no markers here", BlockKind::Heading),
            Err(RenderError::InvalidHeading)
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            markdown_to_html("```\nlet x = 1;\n```").unwrap(),
            "<div><pre><code>let x = 1;\n</code></pre></div>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(
            markdown_to_html("```\n```").unwrap(),
            "<div><pre><code></code></pre></div>"
        );
    }

    #[test]
    fn code_block_still_runs_inline_classification() {
        // Observed behavior, kept deliberately (see DESIGN.md).
        assert_eq!(
            markdown_to_html("```\na **bold** claim\n```").unwrap(),
            "<div><pre><code>a <b>bold</b> claim\n</code></pre></div>"
        );
    }

    #[test]
    fn quote() {
        assert_eq!(
            markdown_to_html("> hello").unwrap(),
            "<div><blockquote>hello</blockquote></div>"
        );
    }

    #[test]
    fn multiline_quote_joins_with_a_space() {
        assert_eq!(
            markdown_to_html("> hello\n> world").unwrap(),
            "<div><blockquote>hello world</blockquote></div>"
        );
    }

    #[test]
    fn unquoted_lines_fed_to_quote_compiler_fail() {
        assert_eq!(
            block_to_node("hello\nworld", BlockKind::Quote),
            Err(RenderError::InvalidQuote)
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_html("* a\n* b").unwrap(),
            "<div><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn unordered_list_with_dash_markers() {
        assert_eq!(
            markdown_to_html("- a\n- b").unwrap(),
            "<div><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn unmarked_line_fed_to_list_compiler_fails() {
        assert_eq!(
            block_to_node("* a\nb", BlockKind::UnorderedList),
            Err(RenderError::InvalidListItem)
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_html("1. one\n2. two\n3. three").unwrap(),
            "<div><ol><li>one</li><li>two</li><li>three</li></ol></div>"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            markdown_to_html("go [home](https://example.com)").unwrap(),
            "<div><p>go <a href='https://example.com'>home</a></p></div>"
        );
    }

    #[test]
    fn link_without_url_fails() {
        assert_eq!(
            markdown_to_html("go [home]()"),
            Err(RenderError::MissingUrl { tag: "a" })
        );
    }

    #[test]
    fn image() {
        assert_eq!(
            markdown_to_html("see ![a cat](cat.png)").unwrap(),
            "<div><p>see <img src='cat.png' alt='a cat'></p></div>"
        );
    }

    #[test]
    fn image_without_url_fails() {
        assert_eq!(
            markdown_to_html("see ![a cat]()"),
            Err(RenderError::MissingUrl { tag: "img" })
        );
    }

    #[test]
    fn whole_document() {
        let md = "# Title\n\nSome **bold** text\n\n* a\n* b\n\n> fin";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h1>Title</h1><p>Some <b>bold</b> text</p><ul><li>a</li><li>b</li></ul><blockquote>fin</blockquote></div>"
        );
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let md = "# Title\n\nSome `code` and a [link](x.html)";
        let node = document_to_node(md).unwrap();
        assert_eq!(node.render().unwrap(), node.render().unwrap());
    }

    #[test]
    fn extract_title_from_h1() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn extract_title_skips_deeper_headings() {
        assert_eq!(
            extract_title("## Subheading\n\n# The Title\n\nbody").unwrap(),
            "The Title"
        );
    }

    #[test]
    fn extract_title_trims_whitespace() {
        assert_eq!(extract_title("#   Hello   ").unwrap(), "Hello");
    }

    #[test]
    fn missing_h1_fails() {
        assert_eq!(
            extract_title("## only level two\n\nbody text"),
            Err(RenderError::NoTitleFound)
        );
    }
}
