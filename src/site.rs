//! Page assembly and site generation.
//!
//! The rendering pipeline stays pure; everything that touches the
//! filesystem lives here. A generation run cleans the output
//! directory, mirrors the static assets verbatim, then renders every
//! Markdown document under the content directory into the template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{RenderError, SiteError};
use crate::html::{extract_title, markdown_to_html};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Splice title and content into the template. Each placeholder is
/// replaced once, at its first occurrence.
pub fn assemble_page(template: &str, title: &str, content: &str) -> String {
    template
        .replacen(TITLE_PLACEHOLDER, title, 1)
        .replacen(CONTENT_PLACEHOLDER, content, 1)
}

/// Render one Markdown document into a complete page.
pub fn generate_page(markdown: &str, template: &str) -> Result<String, RenderError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(assemble_page(template, &title, &content))
}

/// Generate the whole site described by `config`.
///
/// A failing document aborts the run; nothing is skipped silently.
pub fn generate_site(config: &Config) -> Result<(), SiteError> {
    clean_output(&config.output)?;
    copy_static(&config.static_dir, &config.output)?;

    let template = fs::read_to_string(&config.template)?;
    generate_pages(&config.content, &config.output, &template)
}

/// Remove a previous run's output and recreate the directory empty.
fn clean_output(output: &Path) -> Result<(), SiteError> {
    if output.exists() {
        if !output.is_dir() {
            return Err(SiteError::NotADirectory(output.to_path_buf()));
        }
        fs::remove_dir_all(output)?;
    }
    fs::create_dir_all(output)?;
    Ok(())
}

/// Mirror the static assets directory verbatim into the output.
fn copy_static(static_dir: &Path, output: &Path) -> Result<(), SiteError> {
    if !static_dir.exists() {
        debug!(path = %static_dir.display(), "no static directory, skipping");
        return Ok(());
    }
    if !static_dir.is_dir() {
        return Err(SiteError::NotADirectory(static_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    walk_files(static_dir, &mut files)?;
    for file in files {
        let Ok(rel) = file.strip_prefix(static_dir) else {
            continue;
        };
        let dest = output.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&file, &dest)?;
        debug!(asset = %rel.display(), "copied static asset");
    }
    Ok(())
}

/// Render every `.md` file under `content` to the mirrored `.html`
/// path in `output`. Non-Markdown content files are skipped.
fn generate_pages(content: &Path, output: &Path, template: &str) -> Result<(), SiteError> {
    if !content.is_dir() {
        return Err(SiteError::NotADirectory(content.to_path_buf()));
    }

    let mut files = Vec::new();
    walk_files(content, &mut files)?;
    for file in files {
        if file.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        let Ok(rel) = file.strip_prefix(content) else {
            continue;
        };
        let dest = output.join(rel).with_extension("html");

        let markdown = fs::read_to_string(&file)?;
        let page = generate_page(&markdown, template).map_err(|source| SiteError::Page {
            path: file.clone(),
            source,
        })?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, page)?;
        info!(from = %file.display(), to = %dest.display(), "generated page");
    }
    Ok(())
}

/// Recursively collect every file under `dir` into `files`.
fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>";

    #[test]
    fn assemble_substitutes_both_placeholders() {
        assert_eq!(
            assemble_page(TEMPLATE, "Home", "<div><p>hi</p></div>"),
            "<html><title>Home</title><body><div><p>hi</p></div></body></html>"
        );
    }

    #[test]
    fn assemble_replaces_first_occurrence_only() {
        assert_eq!(
            assemble_page("{{ Title }} / {{ Title }}", "A", ""),
            "A / {{ Title }}"
        );
    }

    #[test]
    fn generate_page_extracts_title_and_content() {
        let page = generate_page("# Hello\n\nSome *text*", TEMPLATE).unwrap();
        assert_eq!(
            page,
            "<html><title>Hello</title><body><div><h1>Hello</h1><p>Some <i>text</i></p></div></body></html>"
        );
    }

    #[test]
    fn generate_page_without_title_fails() {
        assert_eq!(
            generate_page("just a paragraph", TEMPLATE),
            Err(RenderError::NoTitleFound)
        );
    }
}
