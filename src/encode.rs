//! Encode INI documents back to text.
//!
//! The encoder renders the canonical form: sections in list order, a
//! `[name]` header line for every section except the implicit unnamed
//! one, and one `name = value` line per key. Irregular spacing in the
//! source is not preserved; a document parsed from canonical text
//! re-encodes byte for byte.

use crate::Document;

/// Encode a document to a string.
pub fn encode(document: &Document) -> String {
    let mut out = String::new();
    encode_into(document, &mut out);
    out
}

/// Encode a document, appending the rendering to `out`.
///
/// This is the buffer-reuse variant of [`encode`]; the buffer grows as
/// needed and existing content is left in place.
pub fn encode_into(document: &Document, out: &mut String) {
    for section in document.sections() {
        if !section.name().is_empty() {
            out.push('[');
            out.push_str(section.name());
            out.push_str("]\n");
        }
        for key in section.keys() {
            out.push_str(key.name());
            out.push_str(" = ");
            out.push_str(key.value());
            out.push('\n');
        }
    }
}
