//! Syntax highlighting of code blocks.
//!
//! Language tags coming from the document are normalised through a small alias
//! table, their grammars are pulled into the shared [`GrammarRegistry`] the first
//! time they are needed, and code is tokenized into class-based HTML spans that
//! the stylesheet colours from the configured theme. Anything that goes wrong
//! along the way leaves the code as it was; highlighting never fails a render.

mod registry;

pub use registry::GrammarRegistry;

use anyhow::{Context, Result};
use log::warn;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

pub const SERIALIZED_SYNTAX: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/syntaxes.bin"));
pub const SERIALIZED_THEMES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/themes.bin"));

/// CSS class prefix for syntax highlighting spans.
const CLASS_PREFIX: &str = "syn-";

/// Class style shared by the tokenizer and the generated stylesheet.
pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed {
    prefix: CLASS_PREFIX,
};

/// Lower-case a language tag and resolve its aliases to a grammar id.
pub fn normalize_language(tag: &str) -> String {
    let tag = tag.to_lowercase();
    match tag.as_str() {
        "vue" | "html" => "markup".to_string(),
        "md" => "markdown".to_string(),
        "ts" => "typescript".to_string(),
        "py" => "python".to_string(),
        _ => tag,
    }
}

pub struct Highlighter<'r> {
    registry: &'r GrammarRegistry,
}

impl Default for Highlighter<'static> {
    fn default() -> Self {
        Highlighter::new(GrammarRegistry::global())
    }
}

impl<'r> Highlighter<'r> {
    pub fn new(registry: &'r GrammarRegistry) -> Highlighter<'r> {
        Highlighter { registry }
    }

    /// Highlight `text` as `language`.
    ///
    /// Returns `text` unchanged when no language is given, when no grammar can be
    /// loaded for it, or when tokenizing fails.
    pub fn highlight(&self, text: &str, language: &str) -> String {
        let id = normalize_language(language);
        if id.is_empty() {
            return text.to_string();
        }

        if !self.registry.ensure_loaded(&id) {
            warn!("No grammar available for language `{id}`, leaving code unhighlighted");
        }

        let Some(syntax) = self.registry.grammar(&id) else {
            return text.to_string();
        };

        match tokenize(text, syntax, self.registry.syntaxes()) {
            Ok(html) => html,
            Err(e) => {
                warn!("{e:#}");
                text.to_string()
            }
        }
    }
}

/// Tokenize `text` into HTML spans classed by syntax scope.
fn tokenize(text: &str, syntax: &SyntaxReference, ss: &SyntaxSet) -> Result<String> {
    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, ss, CLASS_STYLE);
    for (line_num, line) in LinesWithEndings::from(text).enumerate() {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .with_context(|| {
                format!(
                    "Failed to highlight line {} as {}",
                    line_num + 1,
                    syntax.name
                )
            })?;
    }
    Ok(generator.finalize())
}
