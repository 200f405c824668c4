//! Stylesheet for the printed document.
//!
//! The print layout itself is a static stylesheet compiled into the binary. Syntax
//! highlighting colours are appended to it, generated from the configured syntect
//! theme for the `syn-` classes the highlighter emits.

use crate::config::SyntaxTheme;
use crate::highlight::{CLASS_STYLE, SERIALIZED_THEMES};
use anyhow::{anyhow, Context, Result};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::css_for_theme_with_class_style;

/// Print layout: typography, tables, lists, code block containers.
const PRINT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/print.css"));

/// Generate the complete stylesheet for a document.
pub fn generate_stylesheet(theme: SyntaxTheme) -> Result<String> {
    let theme = load_theme(theme)?;
    let syntax_css = css_for_theme_with_class_style(&theme, CLASS_STYLE)
        .with_context(|| "Failed to generate syntax highlighting CSS")?;

    let mut css = String::with_capacity(PRINT_CSS.len() + syntax_css.len() + 32);
    css.push_str(PRINT_CSS);
    css.push_str("\n/* Syntax highlighting */\n");
    css.push_str(&syntax_css);
    Ok(css)
}

/// Load a theme by name from the serialised theme set.
pub fn load_theme(theme: SyntaxTheme) -> Result<Theme> {
    let ts: ThemeSet =
        bincode::serde::decode_from_slice(SERIALIZED_THEMES, bincode::config::standard())
            .with_context(|| "Failed to deserialise bundled themes")?
            .0;
    ts.themes
        .get(theme.name())
        .cloned()
        .ok_or_else(|| anyhow!("Theme `{theme}` is not bundled"))
}
