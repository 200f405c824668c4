//! Rewrites a rendered HTML body into something that prints well.
//!
//! Elements that only make sense on screen are replaced with printable stand-ins:
//! iframes become links to their source, and fenced code blocks become
//! highlighted, line-numbered listings. Both passes scan the raw HTML text for
//! fixed open/close tokens rather than parsing it, and neither ever fails: markup
//! they can't make sense of is left as it was.

mod attribute;
mod code_block;
mod iframe;
mod scan;

pub use iframe::DEFAULT_LABEL;

use crate::highlight::Highlighter;
use code_block::transform_code_blocks;
use iframe::replace_iframes;

/// Run every body transformation, in order.
pub fn transform_body(html: &str, iframe_label: &str, highlighter: &Highlighter<'_>) -> String {
    let html = replace_iframes(html, iframe_label);
    transform_code_blocks(&html, highlighter)
}
