//! Character escaping for serialized output.

use std::borrow::Cow;

/// Escapes character data.
///
/// Replaces `&`, `<`, and `>`. Returns a borrowed reference if no escaping is
/// needed.
pub(crate) fn escape_text(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes an attribute value for use inside double quotes.
///
/// In addition to the character data escapes this replaces `"` and the
/// whitespace characters that attribute-value normalization would otherwise
/// collapse.
pub(crate) fn escape_attr(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\n' => escaped.push_str("&#10;"),
				'\r' => escaped.push_str("&#13;"),
				'\t' => escaped.push_str("&#09;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
