//! # etree-factory-tree
//!
//! The element tree that `etree-factory` builders populate.
//!
//! ## Overview
//!
//! - [`QName`]: element and attribute names, optionally namespace-qualified
//! - [`Element`]: a node with attributes, leading text, children, and tail
//! - [`find_unique`]: locate a previously built element by name and id
//! - [`serialize`]: render a tree as markup
//!
//! Elements follow the text/tail model rather than storing text nodes: text
//! before the first child is the parent's `text`, and text after a child is
//! that child's `tail`.

pub mod element;
mod escape;
pub mod find;
pub mod qname;
pub mod serialize;

pub use element::{Element, Iter};
pub use find::{FindError, ID_ATTR, find_unique, find_unique_by, find_unique_mut};
pub use qname::{QName, QNameError, XML_NAMESPACE};
pub use serialize::SerializeOptions;
