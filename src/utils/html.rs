//! HTML text escaping.

use quick_xml::escape::escape;

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text or attribute values.
pub fn escape_html(text: &str) -> String {
    escape(text).into_owned()
}
