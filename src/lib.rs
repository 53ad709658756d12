//! # etree-factory
//!
//! Declarative construction of element trees through dynamic tag constructors.
//!
//! A factory returns a constructor for any tag name; calling it with content
//! and attributes builds an element. Strings become text, elements become
//! children, and nested sequences are flattened in order, so a document reads
//! like the markup it produces.
//!
//! ## Quick Start
//!
//! ```
//! use etreefactory::prelude::*;
//!
//! let t = tag();
//! let p = tag!(t, p("A ", tag!(t, a("link"; class_ = "menuitone"))));
//! assert_eq!(p.to_xml_string(), r#"<p>A <a class="menuitone">link</a></p>"#);
//!
//! let link = t.find(&p, "a", None).unwrap();
//! assert_eq!(link.get("class"), Some("menuitone"));
//! ```
//!
//! ## Crates
//!
//! - [`tree`]: elements, qualified names, lookup, and serialization
//! - [`builder`]: factories, content normalization, and the HTML dialect
//!
//! ## Feature Flags
//!
//! - `chrono`: dates and times from `chrono` as content and attribute values

pub use etree_factory_builder as builder;
pub use etree_factory_tree as tree;

pub use etree_factory_builder::{
	AttrValue, Attrs, ConfigError, Content, DEFAULT_NAME_MARKER, ElementFactory, FactoryConfig,
	HtmlFactory, IntoAttrValue, IntoContent, TagConstructor, XHTML_NAMESPACE, append_content,
	attrs, clean_name, default_factory, tag,
};
pub use etree_factory_tree::{
	Element, FindError, ID_ATTR, QName, QNameError, SerializeOptions, XML_NAMESPACE, find_unique,
	find_unique_by, find_unique_mut,
};

/// Returns the shared factory that produces unqualified names.
///
/// Constructors obtained from it are cached for the life of the process.
pub fn tag() -> &'static ElementFactory {
	default_factory()
}

/// Commonly used items
pub mod prelude {
	pub use crate::tag;
	pub use etree_factory_builder::{
		Attrs, Content, ElementFactory, HtmlFactory, IntoAttrValue, IntoContent, attrs,
	};
	pub use etree_factory_tree::{Element, FindError, QName};
}
