//! Markup serialization.
//!
//! Renders an element tree as an XML fragment. Namespaced names receive
//! generated `ns0`, `ns1`, ... prefixes in document order (the XML namespace
//! always uses `xml`), and every declaration is emitted on the root element.
//! The root's own tail is not part of the fragment and is not written.
//!
//! ## Example
//!
//! ```
//! use etree_factory_tree::{Element, QName};
//!
//! let mut a = Element::new(QName::qualified("urn:example", "a"));
//! a.push_text("x");
//! assert_eq!(a.to_xml_string(), r#"<ns0:a xmlns:ns0="urn:example">x</ns0:a>"#);
//! ```

use std::collections::HashMap;

use crate::element::Element;
use crate::escape::{escape_attr, escape_text};
use crate::qname::{QName, XML_NAMESPACE};

/// Serializer options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
	/// Render elements without text or children as `<tag />` instead of
	/// `<tag></tag>`.
	pub short_empty_elements: bool,
}

impl Default for SerializeOptions {
	fn default() -> Self {
		Self {
			short_empty_elements: true,
		}
	}
}

/// Serializes `root` and its descendants to a string.
pub fn to_string(root: &Element, options: &SerializeOptions) -> String {
	let prefixes = Prefixes::collect(root);
	let mut output = String::new();
	write_element(root, &prefixes, true, options, &mut output);
	output
}

/// Namespace URI to prefix assignments for one serialization.
#[derive(Debug, Default)]
struct Prefixes<'a> {
	by_uri: HashMap<&'a str, String>,
	/// Declarations in assignment order, as (prefix, uri).
	declarations: Vec<(String, &'a str)>,
}

impl<'a> Prefixes<'a> {
	fn collect(root: &'a Element) -> Self {
		let mut prefixes = Self::default();
		for el in root.iter() {
			prefixes.assign(el.tag());
			for (name, _) in el.attrs() {
				prefixes.assign(name);
			}
		}
		prefixes
	}

	fn assign(&mut self, name: &'a QName) {
		let Some(uri) = name.namespace() else {
			return;
		};
		if self.by_uri.contains_key(uri) {
			return;
		}
		let prefix = if uri == XML_NAMESPACE {
			"xml".to_string()
		} else {
			let prefix = format!("ns{}", self.declarations.len());
			self.declarations.push((prefix.clone(), uri));
			prefix
		};
		self.by_uri.insert(uri, prefix);
	}

	fn push_name(&self, name: &QName, output: &mut String) {
		if let Some(prefix) = name.namespace().and_then(|uri| self.by_uri.get(uri)) {
			output.push_str(prefix);
			output.push(':');
		}
		output.push_str(name.local_name());
	}
}

fn write_element(
	el: &Element,
	prefixes: &Prefixes<'_>,
	is_root: bool,
	options: &SerializeOptions,
	output: &mut String,
) {
	output.push('<');
	prefixes.push_name(el.tag(), output);

	if is_root {
		for (prefix, uri) in &prefixes.declarations {
			output.push_str(" xmlns:");
			output.push_str(prefix);
			output.push_str("=\"");
			output.push_str(&escape_attr(uri));
			output.push('"');
		}
	}

	for (name, value) in el.attrs() {
		output.push(' ');
		prefixes.push_name(name, output);
		output.push_str("=\"");
		output.push_str(&escape_attr(value));
		output.push('"');
	}

	let text = el.text().unwrap_or_default();
	if text.is_empty() && el.is_empty() && options.short_empty_elements {
		output.push_str(" />");
	} else {
		output.push('>');
		output.push_str(&escape_text(text));
		for child in el.children() {
			write_element(child, prefixes, false, options, output);
			if let Some(tail) = child.tail() {
				output.push_str(&escape_text(tail));
			}
		}
		output.push_str("</");
		prefixes.push_name(el.tag(), output);
		output.push('>');
	}
}
