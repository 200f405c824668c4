/// Pull a double-quoted attribute value out of an opening-tag fragment.
///
/// `marker` is the text immediately preceding the value, e.g. `src="`. Returns the
/// text between the marker and the next `"`, or an empty string if the marker is
/// missing or the value is never closed. Single-quoted and unquoted values are not
/// recognised.
pub fn extract_attribute(fragment: &str, marker: &str) -> String {
    let Some(start) = fragment.find(marker) else {
        return String::new();
    };
    let value = &fragment[start + marker.len()..];
    match value.find('"') {
        Some(end) => value[..end].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_values() {
        let fragment = r#"width="560" src="https://example.com/v" allowfullscreen"#;
        assert_eq!(extract_attribute(fragment, r#"src=""#), "https://example.com/v");
        assert_eq!(extract_attribute(fragment, r#"width=""#), "560");
    }

    #[test]
    fn missing_marker_is_empty() {
        assert_eq!(extract_attribute("", r#"src=""#), "");
        assert_eq!(extract_attribute("width=\"1\"", r#"src=""#), "");
        assert_eq!(extract_attribute("src='single'", r#"src=""#), "");
    }

    #[test]
    fn unterminated_value_is_empty() {
        assert_eq!(extract_attribute(r#"src="https://example.com"#, r#"src=""#), "");
    }

    #[test]
    fn empty_value() {
        assert_eq!(extract_attribute(r#"class="""#, r#"class=""#), "");
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(extract_attribute(r#"src="a" src="b""#, r#"src=""#), "a");
    }
}
