//! Leftmost-first scanning for elements bounded by fixed open and close tokens.

/// An element found between an opening and a closing token.
pub struct Element<'a> {
    /// Everything between the opening token and the first `>`, i.e. the
    /// attributes of the opening tag.
    pub attributes: &'a str,
    /// Everything after the first `>` up to the closing token.
    pub inner: &'a str,
}

impl<'a> Element<'a> {
    fn split(body: &'a str) -> Element<'a> {
        match body.find('>') {
            Some(gt) => Element {
                attributes: &body[..gt],
                inner: &body[gt + 1..],
            },
            None => Element {
                attributes: body,
                inner: "",
            },
        }
    }
}

/// Replace every `open ... close` element in `input` with the output of `replace`.
///
/// Elements are matched left to right and never overlap. An element has to close
/// before the next opening token; an opening token without one is copied through
/// untouched and scanning resumes at the next opening token.
pub fn replace_elements<F>(input: &str, open: &str, close: &str, mut replace: F) -> String
where
    F: FnMut(Element<'_>) -> String,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(open) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + open.len()..];
        let limit = after_open.find(open).unwrap_or(after_open.len());

        match after_open[..limit].find(close) {
            Some(end) => {
                out.push_str(&replace(Element::split(&after_open[..end])));
                rest = &after_open[end + close.len()..];
            }
            None => {
                out.push_str(&rest[start..start + open.len() + limit]);
                rest = &after_open[limit..];
            }
        }
    }

    out.push_str(rest);
    out
}
