//! Iframes can't be printed, so each one is swapped for a link to its source.

use super::attribute::extract_attribute;
use super::scan::replace_elements;

const OPEN: &str = "<iframe ";
const CLOSE: &str = "</iframe>";

/// Default text placed in front of the link that replaces an iframe.
pub const DEFAULT_LABEL: &str = "视频地址：";

/// Replace every complete `<iframe ...></iframe>` element with a paragraph
/// linking to the iframe's `src`.
pub fn replace_iframes(html: &str, label: &str) -> String {
    replace_elements(html, OPEN, CLOSE, |element| {
        let src = extract_attribute(element.attributes, r#"src=""#);
        format!(r#"<p>{label}<a href="{src}" target="_blank">{src}</a></p>"#)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn html_without_iframes_is_untouched() {
        let html = "<h1>Title</h1>\n<p>Some <em>text</em> and <code>iframe</code></p>\n";
        assert_eq!(replace_iframes(html, DEFAULT_LABEL), html);
    }

    #[test]
    fn replaces_iframe_with_link() {
        let html = r#"<p>Watch:</p><iframe src="https://example.com/v"></iframe><p>after</p>"#;
        let out = replace_iframes(html, DEFAULT_LABEL);
        assert!(out.contains(r#"<a href="https://example.com/v" target="_blank">https://example.com/v</a>"#));
        assert!(!out.contains("<iframe"));
        assert_eq!(
            out,
            r#"<p>Watch:</p><p>视频地址：<a href="https://example.com/v" target="_blank">https://example.com/v</a></p><p>after</p>"#
        );
    }

    #[test]
    fn uses_the_given_label() {
        let out = replace_iframes(r#"<iframe src="x"></iframe>"#, "Video: ");
        assert_eq!(out, r#"<p>Video: <a href="x" target="_blank">x</a></p>"#);
    }

    #[test]
    fn unterminated_iframe_is_untouched() {
        let html = r#"<p>a</p><iframe src="https://example.com/v" width="560"><p>b</p>"#;
        assert_eq!(replace_iframes(html, DEFAULT_LABEL), html);
    }

    #[test]
    fn replaces_multiple_iframes() {
        let html = concat!(
            r#"<iframe width="560" src="https://a.example/1" frameborder="0"></iframe>"#,
            "\n<p>between</p>\n",
            r#"<iframe src="https://b.example/2" allowfullscreen></iframe>"#,
        );
        let out = replace_iframes(html, "");
        assert_eq!(
            out,
            concat!(
                r#"<p><a href="https://a.example/1" target="_blank">https://a.example/1</a></p>"#,
                "\n<p>between</p>\n",
                r#"<p><a href="https://b.example/2" target="_blank">https://b.example/2</a></p>"#,
            )
        );
    }

    #[test]
    fn iframe_without_src_links_nowhere() {
        let out = replace_iframes(r#"<iframe title="t"></iframe>"#, "");
        assert_eq!(out, r#"<p><a href="" target="_blank"></a></p>"#);
    }
}
