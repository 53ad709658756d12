//! Name cleaning for tags and attributes.
//!
//! Names that collide with Rust keywords can be written with a trailing
//! marker (`type_`, `for_`, `class_`) or as raw identifiers (`r#type`). Both
//! spellings resolve to the bare markup name.

/// Default reserved-word marker stripped from the end of names.
pub const DEFAULT_NAME_MARKER: char = '_';

const RAW_IDENT_PREFIX: &str = "r#";

/// Strips the raw identifier prefix and any trailing markers from `raw`.
///
/// A name made only of markers is returned unchanged rather than cleaned to
/// an empty string.
///
/// # Examples
///
/// ```
/// use etree_factory_builder::clean_name;
///
/// assert_eq!(clean_name("class_", '_'), "class");
/// assert_eq!(clean_name("r#type", '_'), "type");
/// assert_eq!(clean_name("data_value", '_'), "data_value");
/// assert_eq!(clean_name("_", '_'), "_");
/// ```
pub fn clean_name(raw: &str, marker: char) -> &str {
	let name = raw.strip_prefix(RAW_IDENT_PREFIX).unwrap_or(raw);
	let trimmed = name.trim_end_matches(marker);
	if trimmed.is_empty() { name } else { trimmed }
}
