//! Qualified names for elements and attributes.
//!
//! A [`QName`] pairs an optional namespace URI with a local name. It renders in
//! Clark notation (`{uri}local`), which is how namespaced names are written
//! wherever a plain string is needed (error messages, lookups by string).

use std::fmt;
use std::sync::Arc;

/// The namespace bound to the reserved `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Errors raised when parsing a name written in Clark notation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QNameError {
	#[error("Qualified name is missing its closing brace: '{0}'")]
	UnclosedNamespace(String),

	#[error("Qualified name has an empty local part: '{0}'")]
	EmptyLocalName(String),
}

/// Element or attribute name, optionally qualified by a namespace URI.
///
/// The namespace is reference counted so that every name produced by one
/// factory shares a single allocation for its URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
	namespace: Option<Arc<str>>,
	local: String,
}

impl QName {
	/// Creates a name without a namespace.
	pub fn local(name: impl Into<String>) -> Self {
		Self {
			namespace: None,
			local: name.into(),
		}
	}

	/// Creates a name qualified by `namespace`.
	///
	/// An empty namespace URI is treated as no namespace at all.
	pub fn new(namespace: Option<Arc<str>>, name: impl Into<String>) -> Self {
		Self {
			namespace: namespace.filter(|ns| !ns.is_empty()),
			local: name.into(),
		}
	}

	/// Creates a name qualified by the given namespace URI.
	pub fn qualified(namespace: &str, name: impl Into<String>) -> Self {
		Self::new(Some(Arc::from(namespace)), name)
	}

	/// Parses a name written in Clark notation.
	///
	/// # Examples
	///
	/// ```
	/// use etree_factory_tree::QName;
	///
	/// let name = QName::from_clark("{http://www.w3.org/1999/xhtml}p").unwrap();
	/// assert_eq!(name.namespace(), Some("http://www.w3.org/1999/xhtml"));
	/// assert_eq!(name.local_name(), "p");
	///
	/// assert_eq!(QName::from_clark("p").unwrap(), QName::local("p"));
	/// assert!(QName::from_clark("{urn:x").is_err());
	/// ```
	pub fn from_clark(raw: &str) -> Result<Self, QNameError> {
		let Some(rest) = raw.strip_prefix('{') else {
			if raw.is_empty() {
				return Err(QNameError::EmptyLocalName(raw.to_string()));
			}
			return Ok(Self::local(raw));
		};
		let (namespace, local) = rest
			.split_once('}')
			.ok_or_else(|| QNameError::UnclosedNamespace(raw.to_string()))?;
		if local.is_empty() {
			return Err(QNameError::EmptyLocalName(raw.to_string()));
		}
		Ok(Self::qualified(namespace, local))
	}

	/// Returns the namespace URI, if any.
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Returns the shared namespace handle, if any.
	pub fn namespace_arc(&self) -> Option<&Arc<str>> {
		self.namespace.as_ref()
	}

	/// Returns the local part of the name.
	pub fn local_name(&self) -> &str {
		&self.local
	}

	/// Returns true if the name has a namespace.
	pub fn is_qualified(&self) -> bool {
		self.namespace.is_some()
	}
}

impl fmt::Display for QName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.namespace {
			Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
			None => f.write_str(&self.local),
		}
	}
}

impl From<&str> for QName {
	fn from(name: &str) -> Self {
		Self::local(name)
	}
}

impl From<String> for QName {
	fn from(name: String) -> Self {
		Self::local(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_local_name_display() {
		assert_eq!(QName::local("a").to_string(), "a");
	}

	#[rstest]
	fn test_qualified_name_display_uses_clark_notation() {
		let name = QName::qualified("urn:example", "item");
		assert_eq!(name.to_string(), "{urn:example}item");
		assert!(name.is_qualified());
	}

	#[rstest]
	fn test_empty_namespace_is_unqualified() {
		let name = QName::qualified("", "item");
		assert_eq!(name, QName::local("item"));
		assert!(!name.is_qualified());
	}

	#[rstest]
	#[case("{urn:a}b", Some("urn:a"), "b")]
	#[case("b", None, "b")]
	#[case("{}b", None, "b")]
	fn test_from_clark(#[case] raw: &str, #[case] ns: Option<&str>, #[case] local: &str) {
		let name = QName::from_clark(raw).unwrap();
		assert_eq!(name.namespace(), ns);
		assert_eq!(name.local_name(), local);
	}

	#[rstest]
	fn test_from_clark_rejects_malformed_names() {
		assert_eq!(
			QName::from_clark("{urn:a"),
			Err(QNameError::UnclosedNamespace("{urn:a".to_string()))
		);
		assert_eq!(
			QName::from_clark("{urn:a}"),
			Err(QNameError::EmptyLocalName("{urn:a}".to_string()))
		);
		assert!(QName::from_clark("").is_err());
	}

	#[rstest]
	fn test_display_roundtrips_through_clark() {
		let name = QName::qualified("http://www.w3.org/1999/xhtml", "td");
		assert_eq!(QName::from_clark(&name.to_string()).unwrap(), name);
	}
}
