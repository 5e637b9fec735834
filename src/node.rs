//! Tree of renderable HTML nodes.
//!
//! A node either holds text directly (leaf) or is entirely the
//! concatenation of its children's renderings (parent). Nodes are
//! immutable once built; each parent exclusively owns its children.

use crate::error::RenderError;

/// Tags whose content comes entirely from attributes and which render
/// without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Untagged leaf: renders as its raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with text content.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with text content and attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs,
        }
    }

    /// Void-element leaf: no text content, rendered from attributes alone.
    pub fn void(tag: impl Into<String>, attrs: Vec<(String, String)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: None,
            attrs,
        }
    }

    /// Parent node wrapping a sequence of children.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Serialize this node (and its subtree) to HTML text.
    ///
    /// Children render in order, depth-first. Text content is emitted
    /// verbatim; no HTML escaping is performed.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => match (tag, value) {
                (None, Some(value)) => Ok(value.clone()),
                (Some(tag), Some(value)) => {
                    Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs)))
                }
                (Some(tag), None) if VOID_TAGS.contains(&tag.as_str()) => {
                    Ok(format!("<{tag}{}>", render_attrs(attrs)))
                }
                _ => Err(RenderError::MissingValue),
            },
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::MissingChildren);
                }
                let mut out = format!("<{tag}{}>", render_attrs(attrs));
                for child in children {
                    out.push_str(&child.render()?);
                }
                out.push_str(&format!("</{tag}>"));
                Ok(out)
            }
        }
    }
}

/// Render attributes as ` name='value'` pairs in insertion order.
/// An empty attribute list renders as the empty string.
fn render_attrs(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        out.push_str(&format!(" {name}='{value}'"));
    }
    out
}
