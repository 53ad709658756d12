//! Element nodes.
//!
//! An [`Element`] follows the text/tail model: character data before the first
//! child lives in the element's `text`, and character data that follows a child
//! (up to the next sibling or the parent's closing tag) lives in that child's
//! `tail`. There are no separate text nodes.
//!
//! ## Example
//!
//! ```
//! use etree_factory_tree::{Element, QName};
//!
//! // <p>A <a class="menuitem">link</a> here</p>
//! let mut link = Element::new("a");
//! link.set("class", "menuitem");
//! link.push_text("link");
//! link.push_tail(" here");
//!
//! let mut p = Element::new("p");
//! p.push_text("A ");
//! p.append(link);
//!
//! assert_eq!(p.text(), Some("A "));
//! assert_eq!(p.children()[0].tail(), Some(" here"));
//! assert_eq!(p.find(&QName::local("a")).unwrap().get("class"), Some("menuitem"));
//! ```

use std::fmt;

use crate::qname::QName;
use crate::serialize::{self, SerializeOptions};

/// A node in an element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: QName,
	attrs: Vec<(QName, String)>,
	text: Option<String>,
	children: Vec<Element>,
	tail: Option<String>,
}

impl Element {
	/// Creates an empty, detached element.
	pub fn new(tag: impl Into<QName>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			text: None,
			children: Vec::new(),
			tail: None,
		}
	}

	/// Returns the element name.
	pub fn tag(&self) -> &QName {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(QName, String)] {
		&self.attrs
	}

	/// Returns the value of an attribute by name.
	pub fn get(&self, name: impl Into<QName>) -> Option<&str> {
		let name = name.into();
		self.attrs
			.iter()
			.find(|(key, _)| *key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Sets an attribute.
	///
	/// Setting an attribute that already exists replaces its value in place,
	/// so the attribute keeps its original position.
	pub fn set(&mut self, name: impl Into<QName>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(key, _)| *key == name) {
			Some((_, existing)) => *existing = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Removes an attribute, returning its value.
	pub fn remove(&mut self, name: impl Into<QName>) -> Option<String> {
		let name = name.into();
		let index = self.attrs.iter().position(|(key, _)| *key == name)?;
		Some(self.attrs.remove(index).1)
	}

	/// Returns the leading text.
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Replaces the leading text.
	pub fn set_text(&mut self, text: Option<String>) {
		self.text = text;
	}

	/// Appends to the leading text, concatenating onto an existing run.
	pub fn push_text(&mut self, run: &str) {
		push_run(&mut self.text, run);
	}

	/// Returns the trailing text.
	pub fn tail(&self) -> Option<&str> {
		self.tail.as_deref()
	}

	/// Replaces the trailing text.
	pub fn set_tail(&mut self, tail: Option<String>) {
		self.tail = tail;
	}

	/// Appends to the trailing text, concatenating onto an existing run.
	pub fn push_tail(&mut self, run: &str) {
		push_run(&mut self.tail, run);
	}

	/// Returns the children in document order.
	pub fn children(&self) -> &[Element] {
		&self.children
	}

	/// Returns the children for in-place editing.
	pub fn children_mut(&mut self) -> &mut Vec<Element> {
		&mut self.children
	}

	/// Returns the last child, if any.
	pub fn last_child_mut(&mut self) -> Option<&mut Element> {
		self.children.last_mut()
	}

	/// Appends a child. The child keeps whatever tail it carries.
	pub fn append(&mut self, child: Element) {
		self.children.push(child);
	}

	/// Returns the number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns true if the element has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Iterates over this element and all of its descendants in document order.
	pub fn iter(&self) -> Iter<'_> {
		Iter { stack: vec![self] }
	}

	/// Iterates over the descendants of this element in document order,
	/// excluding the element itself.
	pub fn descendants(&self) -> impl Iterator<Item = &Element> {
		self.iter().skip(1)
	}

	/// Returns the first descendant with the given name.
	pub fn find(&self, tag: &QName) -> Option<&Element> {
		self.descendants().find(|el| el.tag == *tag)
	}

	/// Returns every descendant with the given name, in document order.
	pub fn findall<'a>(&'a self, tag: &QName) -> impl Iterator<Item = &'a Element> + use<'a> {
		let tag = tag.clone();
		self.descendants().filter(move |el| el.tag == tag)
	}

	/// Serializes the element with default options.
	pub fn to_xml_string(&self) -> String {
		serialize::to_string(self, &SerializeOptions::default())
	}

	/// Consumes the element and returns its parts.
	///
	/// Returns a tuple of (tag, attrs, text, children, tail).
	#[allow(clippy::type_complexity)] // Tuple decomposition is intentional for destructuring
	pub fn into_parts(
		self,
	) -> (
		QName,
		Vec<(QName, String)>,
		Option<String>,
		Vec<Element>,
		Option<String>,
	) {
		(self.tag, self.attrs, self.text, self.children, self.tail)
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_xml_string())
	}
}

fn push_run(slot: &mut Option<String>, run: &str) {
	match slot {
		Some(existing) => existing.push_str(run),
		None => *slot = Some(run.to_string()),
	}
}

/// Pre-order iterator over an element subtree.
#[derive(Debug)]
pub struct Iter<'a> {
	stack: Vec<&'a Element>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = &'a Element;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev());
		Some(node)
	}
}

impl<'a> IntoIterator for &'a Element {
	type Item = &'a Element;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn leaf(tag: &str, text: &str) -> Element {
		let mut el = Element::new(tag);
		el.push_text(text);
		el
	}

	#[rstest]
	fn test_new_element_is_empty() {
		let el = Element::new("div");
		assert_eq!(el.tag(), &QName::local("div"));
		assert!(el.attrs().is_empty());
		assert!(el.text().is_none());
		assert!(el.tail().is_none());
		assert!(el.is_empty());
	}

	#[rstest]
	fn test_set_replaces_existing_attribute_in_place() {
		// Arrange
		let mut el = Element::new("a");
		el.set("class", "first");
		el.set("href", "/");

		// Act
		el.set("class", "second");

		// Assert
		assert_eq!(
			el.attrs(),
			&[
				(QName::local("class"), "second".to_string()),
				(QName::local("href"), "/".to_string()),
			]
		);
	}

	#[rstest]
	fn test_remove_attribute() {
		let mut el = Element::new("a");
		el.set("href", "/");
		assert_eq!(el.remove("href"), Some("/".to_string()));
		assert_eq!(el.remove("href"), None);
		assert!(el.get("href").is_none());
	}

	#[rstest]
	fn test_namespaced_attribute_is_distinct_from_local() {
		let mut el = Element::new("a");
		el.set(QName::qualified("urn:x", "id"), "one");
		assert_eq!(el.get(QName::qualified("urn:x", "id")), Some("one"));
		assert_eq!(el.get("id"), None);
	}

	#[rstest]
	fn test_push_text_concatenates_runs() {
		let mut el = Element::new("p");
		el.push_text("a");
		el.push_text("b");
		el.push_tail("c");
		el.push_tail("d");
		assert_eq!(el.text(), Some("ab"));
		assert_eq!(el.tail(), Some("cd"));
	}

	#[rstest]
	fn test_iter_is_document_order() {
		// Arrange
		let mut inner = Element::new("b");
		inner.append(leaf("c", "1"));
		let mut root = Element::new("a");
		root.append(inner);
		root.append(leaf("d", "2"));

		// Act
		let names: Vec<_> = root.iter().map(|el| el.tag().local_name()).collect();

		// Assert
		assert_eq!(names, ["a", "b", "c", "d"]);
		assert_eq!(root.descendants().count(), 3);
	}

	#[rstest]
	fn test_find_skips_root() {
		let mut root = Element::new("li");
		root.append(leaf("li", "nested"));
		let found = root.find(&QName::local("li")).unwrap();
		assert_eq!(found.text(), Some("nested"));
	}

	#[rstest]
	fn test_findall_returns_every_match() {
		let mut root = Element::new("ul");
		root.append(leaf("li", "1"));
		root.append(leaf("li", "2"));
		root.append(leaf("p", "x"));
		let name = QName::local("li");
		let texts: Vec<_> = root.findall(&name).filter_map(Element::text).collect();
		assert_eq!(texts, ["1", "2"]);
	}

	#[rstest]
	fn test_findall_results_outlive_query_name() {
		let mut root = Element::new("ul");
		root.append(leaf("li", "1"));
		root.append(leaf("li", "2"));

		let found: Vec<&Element> = root.findall(&QName::local("li")).collect();

		assert_eq!(found.len(), 2);
		assert_eq!(found[1].text(), Some("2"));
	}

	#[rstest]
	fn test_into_parts() {
		let mut el = leaf("p", "body");
		el.set_tail(Some("after".to_string()));
		let (tag, attrs, text, children, tail) = el.into_parts();
		assert_eq!(tag, QName::local("p"));
		assert!(attrs.is_empty());
		assert_eq!(text.as_deref(), Some("body"));
		assert!(children.is_empty());
		assert_eq!(tail.as_deref(), Some("after"));
	}
}
