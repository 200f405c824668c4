use pulldown_cmark::{html, Options, Parser};

/// Renders Markdown source into an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer with the GitHub-flavoured extensions documents commonly
/// rely on.
#[derive(Debug, Default)]
pub struct CommonMark;

impl MarkdownRenderer for CommonMark {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fenced_code_with_language_class() {
        let html = CommonMark.render("```rust\nfn main() {\n    a < b;\n}\n```\n");
        assert!(html.starts_with(r#"<pre><code class="language-rust">"#));
        assert!(html.contains("a &lt; b;"));
        assert!(html.contains("</code></pre>"));
    }

    #[test]
    fn renders_unlabelled_code_without_class() {
        let html = CommonMark.render("```\nplain\n```\n");
        assert!(html.starts_with("<pre><code>plain"));
    }

    #[test]
    fn passes_raw_html_through() {
        let html = CommonMark.render(
            "# Demo\n\n<iframe src=\"https://example.com/v\"></iframe>\n",
        );
        assert!(html.contains("<h1>Demo</h1>"));
        assert!(html.contains(r#"<iframe src="https://example.com/v"></iframe>"#));
    }

    #[test]
    fn renders_tables() {
        let html = CommonMark.render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
