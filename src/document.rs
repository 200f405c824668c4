//! Source documents and assembly of the final printable HTML.

use crate::markdown::MarkdownRenderer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fixed `<head>` of every assembled document.
const HEAD: &str = "<head>\n<meta charset=\"utf-8\">\n</head>\n";

/// A source file to be printed.
#[derive(Debug)]
pub struct Document {
    pub source_path: PathBuf,
    pub raw_content: String,
    pub is_markdown: bool,
}

impl Document {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(source_path: P, raw_content: S) -> Document {
        let source_path = source_path.into();
        let is_markdown = is_markdown_path(&source_path);
        Document {
            source_path,
            raw_content: raw_content.into(),
            is_markdown,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        // legacy encodings still convert, with undecodable bytes replaced
        let raw_content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Document::new(path, raw_content))
    }

    /// The file name without directory or extension.
    pub fn title(&self) -> String {
        self.source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The document body as HTML, rendering Markdown sources first.
    pub fn body_html(&self, renderer: &dyn MarkdownRenderer) -> String {
        if self.is_markdown {
            renderer.render(&self.raw_content)
        } else {
            self.raw_content.clone()
        }
    }
}

fn is_markdown_path(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("md" | "markdown")
    )
}

/// Wraps a transformed body into a complete, self-contained HTML document.
pub struct DocumentAssembler {
    stylesheet: String,
}

impl DocumentAssembler {
    pub fn new<S: Into<String>>(stylesheet: S) -> DocumentAssembler {
        DocumentAssembler {
            stylesheet: stylesheet.into(),
        }
    }

    pub fn assemble(&self, title: Option<&str>, body: &str) -> String {
        let mut html = String::with_capacity(
            HEAD.len() + self.stylesheet.len() + body.len() + 128,
        );
        html.push_str("<html>");
        html.push_str(HEAD);
        html.push_str("<body>");
        if let Some(title) = title {
            html.push_str(&format!(
                r#"<div class="title">{}</div>"#,
                html_escape::encode_text(title)
            ));
        }
        html.push_str(body);
        html.push_str("</body>");
        html.push_str("\n<style>\n");
        html.push_str(&self.stylesheet);
        html.push_str("</style>\n");
        html.push_str("</html>");
        html
    }
}
