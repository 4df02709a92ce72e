use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use longan::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<f>'A1'</f>"), "&lt;f&gt;&apos;A1&apos;&lt;/f&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_passthrough() {
        // No specials means no rewriting
        assert_eq!(escape_xml("Sheet1!$A$1:$A$10"), "Sheet1!$A$1:$A$10");
    }

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<&>"'"#),
            "&lt;&amp;&gt;&quot;&apos;"
        );
    }
}
