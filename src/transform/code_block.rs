//! Print layout for fenced code blocks.
//!
//! Each `<pre><code>` block is highlighted and wrapped in a container carrying a
//! line-number gutter and a language label, laid out by the `language-*` and
//! `line-numbers-*` rules of the print stylesheet.

use super::attribute::extract_attribute;
use super::scan::replace_elements;
use crate::highlight::Highlighter;

const OPEN: &str = "<pre><code";
const CLOSE: &str = "</code></pre>";

/// Language assumed for blocks without a `language-*` class.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Highlight, number and label every complete code block in `html`.
pub fn transform_code_blocks(html: &str, highlighter: &Highlighter<'_>) -> String {
    replace_elements(html, OPEN, CLOSE, |element| {
        let language = language_tag(element.attributes);
        let code = unescape_angle_brackets(element.inner);
        let highlighted = highlighter.highlight(&code, &language);

        let mut out = String::with_capacity(highlighted.len() + 256);
        out.push_str(&format!(
            r#"<div class="language-{language} line-numbers-mode">{OPEN}{attributes}>{highlighted}{CLOSE}"#,
            attributes = element.attributes,
        ));
        out.push_str(&line_number_gutter(line_count(element.inner)));
        out.push_str(r#"<button class="copy"></button>"#);
        out.push_str(&format!(r#"<span class="lang">{language}</span></div>"#));
        out
    })
}

/// The `<tag>` of a `language-<tag>` class, or [`DEFAULT_LANGUAGE`].
fn language_tag(attributes: &str) -> String {
    let class = extract_attribute(attributes, r#"class=""#);
    let tag = class
        .split_whitespace()
        .find_map(|c| c.strip_prefix("language-"))
        .filter(|tag| !tag.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);
    tag.to_string()
}

/// Number of `\n`-separated lines; a trailing newline starts one more (empty) line.
fn line_count(code: &str) -> usize {
    code.split('\n').count()
}

fn line_number_gutter(lines: usize) -> String {
    let mut gutter = String::from(r#"<div class="line-numbers-wrapper">"#);
    for line in 1..=lines {
        gutter.push_str(&format!(r#"<span class="line-number">{line}</span><br>"#));
    }
    gutter.push_str("</div>");
    gutter
}

/// Undo the `&lt;`/`&gt;` escaping of the renderer so the highlighter sees the
/// original code. Other entities are left alone.
fn unescape_angle_brackets(code: &str) -> String {
    code.replace("&lt;", "<").replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::GrammarRegistry;
    use pretty_assertions::assert_eq;

    fn transform(html: &str) -> String {
        transform_code_blocks(html, &Highlighter::new(GrammarRegistry::global()))
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn strip_tags(html: &str) -> String {
        let mut text = String::with_capacity(html.len());
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => text.push(c),
                _ => {}
            }
        }
        text
    }

    #[test]
    fn html_without_code_blocks_is_untouched() {
        let html = "<p>inline <code>code</code> only</p>\n<pre>preformatted</pre>";
        assert_eq!(transform(html), html);
    }

    #[test]
    fn numbers_every_line() {
        let out = transform("<pre><code class=\"language-python\">a\nb\nc</code></pre>");
        assert_eq!(count(&out, r#"<span class="line-number">"#), 3);
        assert!(out.contains(r#"<span class="line-number">3</span>"#));
        assert!(!out.contains(r#"<span class="line-number">4</span>"#));
    }

    #[test]
    fn trailing_newline_counts_as_a_line() {
        let out = transform("<pre><code class=\"language-python\">a\nb\n</code></pre>");
        assert_eq!(count(&out, r#"<span class="line-number">"#), 3);
    }

    #[test]
    fn defaults_to_plaintext() {
        let out = transform("<pre><code>hello</code></pre>");
        assert!(out.starts_with(r#"<div class="language-plaintext line-numbers-mode">"#));
        assert!(out.contains(r#"<span class="lang">plaintext</span>"#));
    }

    #[test]
    fn label_keeps_the_original_tag() {
        let out = transform("<pre><code class=\"language-py\">x = 1\n</code></pre>");
        assert!(out.contains(r#"<div class="language-py line-numbers-mode">"#));
        assert!(out.contains(r#"<span class="lang">py</span>"#));
        assert!(out.contains(r#"<span class="syn-"#));
    }

    #[test]
    fn wraps_in_order() {
        let out = transform("<pre><code class=\"language-zzzfake\">x</code></pre>");
        assert_eq!(
            out,
            concat!(
                r#"<div class="language-zzzfake line-numbers-mode">"#,
                r#"<pre><code class="language-zzzfake">x</code></pre>"#,
                r#"<div class="line-numbers-wrapper"><span class="line-number">1</span><br></div>"#,
                r#"<button class="copy"></button>"#,
                r#"<span class="lang">zzzfake</span>"#,
                "</div>",
            )
        );
    }

    #[test]
    fn unknown_language_passes_unescaped_code_through() {
        let out = transform(
            "<pre><code class=\"language-zzzfake\">if a &lt; b &amp;&amp; c &gt; d</code></pre>",
        );
        assert!(out.contains("<code class=\"language-zzzfake\">if a < b &amp;&amp; c > d</code>"));
    }

    #[test]
    fn highlighted_ampersand_entities_are_escaped_again() {
        // only &lt; and &gt; are decoded, so the grammar sees a literal "&amp;"
        let out = transform(
            "<pre><code class=\"language-python\">if a &lt; b &amp;&amp; c:\n    pass\n</code></pre>",
        );
        let text = strip_tags(&out);
        assert!(text.contains("if a &lt; b &amp;amp;&amp;amp; c:"));
        assert!(!text.contains(" &amp;&amp; "));
    }

    #[test]
    fn unterminated_block_is_untouched() {
        let html = "<p>x</p><pre><code class=\"language-rust\">fn main() {}\n";
        assert_eq!(transform(html), html);
    }

    #[test]
    fn transforms_each_block() {
        let html = concat!(
            "<pre><code class=\"language-rust\">fn a() {}\n</code></pre>\n",
            "<p>between</p>\n",
            "<pre><code class=\"language-js\">let b;\n</code></pre>\n",
        );
        let out = transform(html);
        assert_eq!(count(&out, "line-numbers-mode"), 2);
        assert!(out.contains(r#"<span class="lang">rust</span>"#));
        assert!(out.contains(r#"<span class="lang">js</span>"#));
        assert!(out.contains("\n<p>between</p>\n"));
    }

    #[test]
    fn picks_the_language_class_among_others() {
        assert_eq!(language_tag(r#" class="hljs language-rust extra""#), "rust");
        assert_eq!(language_tag(r#" class="language-""#), DEFAULT_LANGUAGE);
        assert_eq!(language_tag(r#" data-x="1""#), DEFAULT_LANGUAGE);
    }
}
