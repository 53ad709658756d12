//! Element factories and tag constructors.
//!
//! An [`ElementFactory`] hands out a [`TagConstructor`] for any tag name. The
//! constructor is built on first access and cached on the factory, so looking
//! up the same name twice is a read-locked map hit.
//!
//! ## Example
//!
//! ```
//! use etree_factory_builder::{ElementFactory, attrs};
//!
//! let tag = ElementFactory::new();
//! let link = tag.tag("a").call("link", attrs! { class_ = "menuitem" });
//! let p = tag.tag("p").with_content(("A ", link));
//!
//! assert_eq!(p.to_xml_string(), r#"<p>A <a class="menuitem">link</a></p>"#);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use etree_factory_tree::{Element, FindError, ID_ATTR, QName, find_unique_by, find_unique_mut};
use parking_lot::RwLock;

use crate::attrs::Attrs;
use crate::config::FactoryConfig;
use crate::content::{IntoContent, append_content};
use crate::names::{DEFAULT_NAME_MARKER, clean_name};

/// Builds elements, optionally qualified with a namespace URI.
///
/// The namespace applies to element names and attribute names alike.
pub struct ElementFactory {
	namespace: Option<Arc<str>>,
	marker: char,
	constructors: RwLock<HashMap<String, TagConstructor>>,
}

impl ElementFactory {
	/// Creates a factory that produces unqualified names.
	pub fn new() -> Self {
		Self::build(None, DEFAULT_NAME_MARKER)
	}

	/// Creates a factory that qualifies every name with `namespace`.
	///
	/// An empty namespace is treated as no namespace.
	pub fn with_namespace(namespace: impl AsRef<str>) -> Self {
		Self::build(non_empty(namespace.as_ref()), DEFAULT_NAME_MARKER)
	}

	/// Creates a factory from a loaded configuration.
	pub fn from_config(config: &FactoryConfig) -> Self {
		let namespace = config.namespace.as_deref().and_then(non_empty);
		Self::build(namespace, config.name_marker)
	}

	fn build(namespace: Option<Arc<str>>, marker: char) -> Self {
		Self {
			namespace,
			marker,
			constructors: RwLock::new(HashMap::new()),
		}
	}

	/// Returns the namespace URI, if any.
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Returns the reserved-word marker.
	pub fn marker(&self) -> char {
		self.marker
	}

	/// Returns the constructor for `name`, creating and caching it on first
	/// access.
	///
	/// The cache is keyed by the name as given, so `class_` and `class`
	/// occupy separate entries even though they build the same tag.
	pub fn tag(&self, name: &str) -> TagConstructor {
		{
			let constructors = self.constructors.read();
			if let Some(constructor) = constructors.get(name) {
				return constructor.clone();
			}
		}

		let mut constructors = self.constructors.write();
		constructors
			.entry(name.to_string())
			.or_insert_with(|| {
				let constructor =
					TagConstructor::new(self.qualify(name), self.namespace.clone(), self.marker);
				tracing::trace!(raw = name, tag = %constructor.tag(), "created tag constructor");
				constructor
			})
			.clone()
	}

	/// Builds an element named `name`.
	///
	/// Equivalent to `self.tag(name).call(content, attrs)`.
	pub fn element(
		&self,
		name: &str,
		content: impl IntoContent,
		attrs: impl Into<Attrs>,
	) -> Element {
		self.tag(name).call(content, attrs)
	}

	/// Returns the number of cached constructors.
	pub fn cached_tags(&self) -> usize {
		self.constructors.read().len()
	}

	/// Cleans `raw` and qualifies it with the factory namespace.
	pub fn qualify(&self, raw: &str) -> QName {
		QName::new(self.namespace.clone(), clean_name(raw, self.marker))
	}

	/// Finds a descendant of `root` named `name`, optionally by its `id`.
	///
	/// Both the tag name and the `id` attribute name are qualified the way this
	/// factory qualifies names. See [`find_unique_by`] for the matching rules.
	pub fn find<'a>(
		&self,
		root: &'a Element,
		name: &str,
		id: Option<&str>,
	) -> Result<&'a Element, FindError> {
		find_unique_by(root, &self.qualify(name), &self.qualify(ID_ATTR), id)
	}

	/// Mutable counterpart of [`find`](Self::find).
	pub fn find_mut<'a>(
		&self,
		root: &'a mut Element,
		name: &str,
		id: Option<&str>,
	) -> Result<&'a mut Element, FindError> {
		find_unique_mut(root, &self.qualify(name), &self.qualify(ID_ATTR), id)
	}
}

impl Default for ElementFactory {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ElementFactory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementFactory")
			.field("namespace", &self.namespace)
			.field("marker", &self.marker)
			.field("cached_tags", &self.cached_tags())
			.finish()
	}
}

fn non_empty(namespace: &str) -> Option<Arc<str>> {
	(!namespace.is_empty()).then(|| Arc::from(namespace))
}

/// A constructor bound to one qualified tag name.
///
/// Cloning is cheap. Constructors are only obtained from
/// [`ElementFactory::tag`].
#[derive(Debug, Clone)]
pub struct TagConstructor {
	inner: Arc<ConstructorInner>,
}

#[derive(Debug)]
struct ConstructorInner {
	tag: QName,
	namespace: Option<Arc<str>>,
	marker: char,
}

impl TagConstructor {
	fn new(tag: QName, namespace: Option<Arc<str>>, marker: char) -> Self {
		Self {
			inner: Arc::new(ConstructorInner {
				tag,
				namespace,
				marker,
			}),
		}
	}

	/// Returns the qualified tag name this constructor builds.
	pub fn tag(&self) -> &QName {
		&self.inner.tag
	}

	/// Builds a new element with the given content and attributes.
	///
	/// Attribute names are cleaned and qualified like the tag name. A `true`
	/// value uses the cleaned attribute name as its value, while `false` and
	/// `None` leave the attribute out.
	pub fn call(&self, content: impl IntoContent, attrs: impl Into<Attrs>) -> Element {
		let mut element = Element::new(self.inner.tag.clone());
		for (raw, value) in attrs.into() {
			let name = clean_name(&raw, self.inner.marker);
			if let Some(value) = value.resolve(name) {
				element.set(QName::new(self.inner.namespace.clone(), name), value);
			}
		}
		append_content(&mut element, content.into_content());
		element
	}

	/// Builds a new element with content and no attributes.
	pub fn with_content(&self, content: impl IntoContent) -> Element {
		self.call(content, ())
	}

	/// Returns true if both handles share one cached constructor.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

// Process-wide factory without a namespace
static DEFAULT_FACTORY: once_cell::sync::Lazy<ElementFactory> =
	once_cell::sync::Lazy::new(ElementFactory::new);

/// Returns the shared, namespace-less factory.
pub fn default_factory() -> &'static ElementFactory {
	&DEFAULT_FACTORY
}
