/// Convert a snake_case field key to the lower camelCase attribute name the
/// SpreadsheetML schema uses.
///
/// # Examples
///
/// ```
/// use longan::common::xml::lower_camel;
/// assert_eq!(lower_camel("show_first_column"), "showFirstColumn");
/// assert_eq!(lower_camel("name"), "name");
/// ```
pub fn lower_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("show_row_stripes"), "showRowStripes");
        assert_eq!(lower_camel("show_column_stripes"), "showColumnStripes");
        assert_eq!(lower_camel("name"), "name");
        assert_eq!(lower_camel(""), "");
    }
}
