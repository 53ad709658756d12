//! Attribute values and attribute sets.
//!
//! Attribute values follow markup conventions for booleans: `true` renders
//! the attribute with its own name as the value (`checked="checked"`), while
//! `false` and `None` leave the attribute out entirely. Everything else is
//! converted with `Display`.

use std::borrow::Cow;
use std::fmt;

/// A single attribute value before it is applied to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// A literal string value.
	Text(String),
	/// A boolean attribute.
	Flag(bool),
	/// No value; the attribute is omitted.
	Absent,
}

impl AttrValue {
	/// Converts any displayable value into a text value.
	pub fn display(value: impl fmt::Display) -> Self {
		AttrValue::Text(value.to_string())
	}

	/// Resolves the value for an attribute named `name`.
	///
	/// Returns `None` when the attribute should be omitted.
	pub fn resolve(self, name: &str) -> Option<String> {
		match self {
			AttrValue::Text(value) => Some(value),
			AttrValue::Flag(true) => Some(name.to_string()),
			AttrValue::Flag(false) | AttrValue::Absent => None,
		}
	}
}

/// Conversion into an [`AttrValue`].
pub trait IntoAttrValue {
	/// Converts self into an attribute value.
	fn into_attr_value(self) -> AttrValue;
}

impl IntoAttrValue for AttrValue {
	fn into_attr_value(self) -> AttrValue {
		self
	}
}

impl IntoAttrValue for &str {
	fn into_attr_value(self) -> AttrValue {
		AttrValue::Text(self.to_string())
	}
}

impl IntoAttrValue for String {
	fn into_attr_value(self) -> AttrValue {
		AttrValue::Text(self)
	}
}

impl IntoAttrValue for &String {
	fn into_attr_value(self) -> AttrValue {
		AttrValue::Text(self.clone())
	}
}

impl IntoAttrValue for Cow<'_, str> {
	fn into_attr_value(self) -> AttrValue {
		AttrValue::Text(self.into_owned())
	}
}

impl IntoAttrValue for bool {
	fn into_attr_value(self) -> AttrValue {
		AttrValue::Flag(self)
	}
}

impl<T: IntoAttrValue> IntoAttrValue for Option<T> {
	fn into_attr_value(self) -> AttrValue {
		match self {
			Some(value) => value.into_attr_value(),
			None => AttrValue::Absent,
		}
	}
}

macro_rules! display_attr_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoAttrValue for $ty {
				fn into_attr_value(self) -> AttrValue {
					AttrValue::display(self)
				}
			}
		)*
	};
}

display_attr_value!(
	char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(feature = "chrono")]
display_attr_value!(
	chrono::NaiveDate,
	chrono::NaiveTime,
	chrono::NaiveDateTime,
	chrono::DateTime<chrono::Utc>,
	chrono::DateTime<chrono::FixedOffset>,
);

/// An ordered set of raw attribute names and their values.
///
/// Names are stored as written; cleaning and namespace qualification happen
/// when the attributes are applied to an element.
///
/// # Example
///
/// ```
/// use etree_factory_builder::{Attrs, attrs};
///
/// let a = Attrs::new().with("class_", "menuitem").with("checked", true);
/// let b = attrs! { class_ = "menuitem", checked = true };
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: Vec<(String, AttrValue)>,
}

impl Attrs {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute, returning the updated set.
	pub fn with(mut self, name: impl Into<String>, value: impl IntoAttrValue) -> Self {
		self.insert(name, value);
		self
	}

	/// Adds an attribute.
	pub fn insert(&mut self, name: impl Into<String>, value: impl IntoAttrValue) {
		self.entries.push((name.into(), value.into_attr_value()));
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over raw names and values in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}
}

impl IntoIterator for Attrs {
	type Item = (String, AttrValue);
	type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl From<()> for Attrs {
	fn from(_: ()) -> Self {
		Self::new()
	}
}

impl<K: Into<String>, V: IntoAttrValue, const N: usize> From<[(K, V); N]> for Attrs {
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K: Into<String>, V: IntoAttrValue> From<Vec<(K, V)>> for Attrs {
	fn from(pairs: Vec<(K, V)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K: Into<String>, V: IntoAttrValue> FromIterator<(K, V)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.insert(name, value);
		}
		attrs
	}
}

/// Builds an [`Attrs`] from `name = value` pairs.
///
/// Names may be identifiers (with a trailing `_` or `r#` prefix for keywords)
/// or string literals for names that are not valid identifiers.
///
/// ```
/// use etree_factory_builder::attrs;
///
/// let attrs = attrs! { r#type = "checkbox", checked = true, "data-id" = 7 };
/// assert_eq!(attrs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attrs::new()
	};
	($($key:tt = $value:expr),+ $(,)?) => {
		$crate::Attrs::new()$(.with($crate::__markup_name!($key), $value))+
	};
}

/// Turns an identifier or string literal into a name string.
#[doc(hidden)]
#[macro_export]
macro_rules! __markup_name {
	($name:ident) => {
		stringify!($name)
	};
	($name:literal) => {
		$name
	};
}
