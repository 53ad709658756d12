//! Locating previously built elements.
//!
//! These helpers search the descendants of a root element (never the root
//! itself) by name and, optionally, by the value of an identifier attribute.
//! Identifiers are expected to be unique per element name, so a duplicate is
//! reported as [`FindError::Ambiguous`] rather than resolved silently.

use crate::element::Element;
use crate::qname::QName;

/// Name of the identifier attribute used by [`find_unique`].
pub const ID_ATTR: &str = "id";

/// Error type for element lookups
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FindError {
	/// No descendant matched the requested name (and id, if given).
	#[error("{}", not_found_message(.tag, .id))]
	NotFound { tag: String, id: Option<String> },

	/// More than one descendant matched the requested name and id.
	#[error("Found {count} {tag} elements with id {id}")]
	Ambiguous {
		tag: String,
		id: String,
		count: usize,
	},
}

impl FindError {
	/// Returns true for the zero-match case.
	pub fn is_not_found(&self) -> bool {
		matches!(self, FindError::NotFound { .. })
	}

	/// Returns true for the duplicate-id case.
	pub fn is_ambiguous(&self) -> bool {
		matches!(self, FindError::Ambiguous { .. })
	}
}

fn not_found_message(tag: &str, id: &Option<String>) -> String {
	match id {
		Some(id) => format!("Cannot find a {tag} element with id {id}"),
		None => format!("Cannot find any {tag} elements"),
	}
}

/// Finds a descendant by name and optional `id` attribute.
///
/// Without an `id`, the first matching descendant in document order is
/// returned. With an `id`, exactly one descendant must match.
///
/// # Examples
///
/// ```
/// use etree_factory_tree::{Element, FindError, QName, find_unique};
///
/// let mut root = Element::new("ul");
/// for id in ["a", "b", "b"] {
///     let mut li = Element::new("li");
///     li.set("id", id);
///     root.append(li);
/// }
///
/// let li = QName::local("li");
/// assert!(find_unique(&root, &li, Some("a")).is_ok());
/// assert!(matches!(
///     find_unique(&root, &li, Some("b")),
///     Err(FindError::Ambiguous { count: 2, .. })
/// ));
/// assert!(find_unique(&root, &QName::local("p"), None).unwrap_err().is_not_found());
/// ```
pub fn find_unique<'a>(
	root: &'a Element,
	tag: &QName,
	id: Option<&str>,
) -> Result<&'a Element, FindError> {
	find_unique_by(root, tag, &QName::local(ID_ATTR), id)
}

/// Like [`find_unique`], but with an explicit identifier attribute name.
pub fn find_unique_by<'a>(
	root: &'a Element,
	tag: &QName,
	id_attr: &QName,
	id: Option<&str>,
) -> Result<&'a Element, FindError> {
	let path = locate(root, tag, id_attr, id)?;
	Ok(path.iter().fold(root, |node, &index| &node.children()[index]))
}

/// Mutable counterpart of [`find_unique_by`].
pub fn find_unique_mut<'a>(
	root: &'a mut Element,
	tag: &QName,
	id_attr: &QName,
	id: Option<&str>,
) -> Result<&'a mut Element, FindError> {
	let path = locate(root, tag, id_attr, id)?;
	Ok(path
		.iter()
		.fold(root, |node, &index| &mut node.children_mut()[index]))
}

/// Running state of a lookup: the path to the first match plus a match count.
#[derive(Debug, Default)]
struct Matches {
	first: Option<Vec<usize>>,
	count: usize,
}

/// Resolves a lookup to the child-index path of the element it selects.
fn locate(
	root: &Element,
	tag: &QName,
	id_attr: &QName,
	id: Option<&str>,
) -> Result<Vec<usize>, FindError> {
	let is_match = |el: &Element| {
		el.tag() == tag
			&& id.is_none_or(|id| el.get(id_attr.clone()).unwrap_or_default() == id)
	};
	// Without an id the first match wins, so the walk can stop there.
	let limit = if id.is_some() { usize::MAX } else { 1 };

	let mut matches = Matches::default();
	let mut path = Vec::new();
	walk(root, &is_match, limit, &mut path, &mut matches);

	match (matches.first, id) {
		(None, _) => {
			tracing::debug!(tag = %tag, id = ?id, "element lookup found no match");
			Err(FindError::NotFound {
				tag: tag.to_string(),
				id: id.map(str::to_string),
			})
		}
		(Some(_), Some(id)) if matches.count > 1 => {
			tracing::debug!(tag = %tag, id, count = matches.count, "element lookup is ambiguous");
			Err(FindError::Ambiguous {
				tag: tag.to_string(),
				id: id.to_string(),
				count: matches.count,
			})
		}
		(Some(first), _) => Ok(first),
	}
}

fn walk(
	node: &Element,
	is_match: &dyn Fn(&Element) -> bool,
	limit: usize,
	path: &mut Vec<usize>,
	matches: &mut Matches,
) {
	for (index, child) in node.children().iter().enumerate() {
		if matches.count >= limit {
			return;
		}
		path.push(index);
		if is_match(child) {
			matches.count += 1;
			if matches.first.is_none() {
				matches.first = Some(path.clone());
			}
		}
		walk(child, is_match, limit, path, matches);
		path.pop();
	}
}
