//! # etree-factory-builder
//!
//! Declarative construction of element trees.
//!
//! ## Overview
//!
//! An [`ElementFactory`] returns a [`TagConstructor`] for any tag name. Calling
//! the constructor with content and attributes produces an [`Element`]:
//!
//! - Strings become text, merged into the parent's `text` or the previous
//!   child's `tail`
//! - Elements become children
//! - Sequences (vectors, arrays, tuples, options) are flattened in order
//! - Other scalars are rendered with `Display`
//!
//! Tag and attribute names lose a trailing `_` (or the `r#` raw identifier
//! prefix), so keywords such as `class_` and `r#type` can be written directly.
//!
//! ## Example
//!
//! ```
//! use etree_factory_builder::{ElementFactory, attrs, tag};
//!
//! let t = ElementFactory::new();
//! let p = t.element("p", ("A ", t.element("a", "link", attrs! { class_ = "menuitone" })), ());
//! assert_eq!(p.to_xml_string(), r#"<p>A <a class="menuitone">link</a></p>"#);
//!
//! let same = tag!(t, p("A ", tag!(t, a("link"; class_ = "menuitone"))));
//! assert_eq!(p, same);
//! ```
//!
//! ## Feature Flags
//!
//! - `chrono`: dates and times from `chrono` as content and attribute values

pub mod attrs;
pub mod config;
pub mod content;
pub mod factory;
pub mod html;
mod macros;
pub mod names;

pub use attrs::{AttrValue, Attrs, IntoAttrValue};
pub use config::{ConfigError, FactoryConfig};
pub use content::{Content, IntoContent, append_content};
pub use factory::{ElementFactory, TagConstructor, default_factory};
pub use html::{HtmlFactory, XHTML_NAMESPACE};
pub use names::{DEFAULT_NAME_MARKER, clean_name};

pub use etree_factory_tree::{Element, FindError, QName};
