//! Inline span classification.
//!
//! Turns a run of text into an ordered sequence of typed [`Span`]s by a
//! fixed series of passes: bold, code, italic delimiter splits, then
//! image and link extraction. Each pass only re-inspects spans still
//! classified [`Span::Plain`]; anything already typed passes through
//! untouched, so a `*` inside inline code never becomes italic.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::Span;
use crate::error::RenderError;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

// Safe to run without a lookbehind for `!` because the image pass has
// already consumed every `![..](..)` occurrence.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Classify `text` into an ordered sequence of inline spans.
///
/// Bold runs with `**` before italic runs with `*`, so a double star is
/// consumed whole and never false-matches as two italics.
pub fn spans_of(text: &str) -> Result<Vec<Span>, RenderError> {
    let mut spans = vec![Span::Plain(text.to_string())];
    spans = split_delimiter(spans, "**", Span::Bold)?;
    spans = split_delimiter(spans, "`", Span::Code)?;
    spans = split_delimiter(spans, "*", Span::Italic)?;
    spans = extract_pattern(spans, &IMAGE_PATTERN, |alt, url| Span::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    });
    spans = extract_pattern(spans, &LINK_PATTERN, |text, url| Span::Link {
        text: text.to_string(),
        url: url.to_string(),
    });
    Ok(spans)
}

/// Split every plain span on `delimiter`, typing the odd-indexed
/// segments with `styled`.
///
/// An even segment count means a delimiter run was opened but never
/// closed. Empty segments are dropped, so adjacent delimiters don't
/// produce empty spans.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    styled: fn(String) -> Span,
) -> Result<Vec<Span>, RenderError> {
    let mut out = Vec::new();
    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let segments: Vec<&str> = text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(RenderError::UnbalancedDelimiter { delimiter });
        }
        for (i, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                out.push(styled(segment.to_string()));
            } else {
                out.push(Span::Plain(segment.to_string()));
            }
        }
    }
    Ok(out)
}

/// Extract every non-overlapping, leftmost match of `pattern` from the
/// plain spans, leaving the text between matches plain.
fn extract_pattern(
    spans: Vec<Span>,
    pattern: &Regex,
    make: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut rest = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > rest {
                out.push(Span::Plain(text[rest..whole.start()].to_string()));
            }
            out.push(make(&caps[1], &caps[2]));
            rest = whole.end();
        }
        if rest < text.len() {
            out.push(Span::Plain(text[rest..].to_string()));
        }
    }
    out
}
