//! Element content and its normalization into the text/tail model.
//!
//! ## Overview
//!
//! [`Content`] is the closed set of things a constructor accepts
//! positionally: text, elements, nested sequences of either, and scalars
//! converted through `Display`. [`IntoContent`] lets ordinary Rust values
//! (string slices, numbers, vectors, tuples, options) be passed directly.
//!
//! [`append_content`] flattens one value into a parent element. Text runs
//! always land in the parent's `text` (before the first child) or in the last
//! child's `tail`, and consecutive runs are concatenated, so flattening never
//! introduces structure of its own.

use std::borrow::Cow;
use std::fmt;

use etree_factory_tree::Element;

/// Content passed to an element constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// Text appended verbatim.
	Text(String),
	/// A child element.
	Node(Element),
	/// A sequence of content values, flattened in order.
	Sequence(Vec<Content>),
	/// The display form of a non-string value.
	Scalar(String),
}

impl Content {
	/// Creates text content.
	pub fn text(text: impl Into<String>) -> Self {
		Content::Text(text.into())
	}

	/// Creates scalar content from any displayable value.
	///
	/// # Example
	///
	/// ```
	/// use etree_factory_builder::{Content, ElementFactory};
	/// use std::net::Ipv4Addr;
	///
	/// let tag = ElementFactory::new();
	/// let el = tag.tag("code").with_content(Content::display(Ipv4Addr::LOCALHOST));
	/// assert_eq!(el.text(), Some("127.0.0.1"));
	/// ```
	pub fn display(value: impl fmt::Display) -> Self {
		Content::Scalar(value.to_string())
	}

	/// Creates a sequence from any iterable of content values.
	pub fn sequence<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: IntoContent,
	{
		Content::Sequence(items.into_iter().map(IntoContent::into_content).collect())
	}

	/// Creates content that appends nothing.
	pub fn empty() -> Self {
		Content::Sequence(Vec::new())
	}
}

/// Appends one content value to `parent`, recursing into sequences.
///
/// - Text and scalars: empty runs are ignored; otherwise the run is appended
///   to the last child's tail, or to the parent's text if it has no children.
/// - Elements: the element's tail is cleared and it becomes the last child.
/// - Sequences: each item is appended in order.
pub fn append_content(parent: &mut Element, content: Content) {
	match content {
		Content::Text(run) | Content::Scalar(run) => append_text(parent, &run),
		Content::Node(mut child) => {
			child.set_tail(None);
			parent.append(child);
		}
		Content::Sequence(items) => {
			for item in items {
				append_content(parent, item);
			}
		}
	}
}

fn append_text(parent: &mut Element, run: &str) {
	if run.is_empty() {
		return;
	}
	match parent.last_child_mut() {
		Some(last) => last.push_tail(run),
		None => parent.push_text(run),
	}
}

/// Conversion into [`Content`].
///
/// This is the primary abstraction for constructor arguments. Implementing it
/// lets any type appear positionally in a constructor call.
pub trait IntoContent {
	/// Converts self into content.
	fn into_content(self) -> Content;
}

impl IntoContent for Content {
	fn into_content(self) -> Content {
		self
	}
}

impl IntoContent for &str {
	fn into_content(self) -> Content {
		Content::Text(self.to_string())
	}
}

impl IntoContent for String {
	fn into_content(self) -> Content {
		Content::Text(self)
	}
}

impl IntoContent for &String {
	fn into_content(self) -> Content {
		Content::Text(self.clone())
	}
}

impl IntoContent for Cow<'_, str> {
	fn into_content(self) -> Content {
		Content::Text(self.into_owned())
	}
}

impl IntoContent for Element {
	fn into_content(self) -> Content {
		Content::Node(self)
	}
}

impl IntoContent for &Element {
	fn into_content(self) -> Content {
		Content::Node(self.clone())
	}
}

impl<T: IntoContent> IntoContent for Vec<T> {
	fn into_content(self) -> Content {
		Content::sequence(self)
	}
}

impl<T: IntoContent, const N: usize> IntoContent for [T; N] {
	fn into_content(self) -> Content {
		Content::sequence(self)
	}
}

impl<T: IntoContent + Clone> IntoContent for &[T] {
	fn into_content(self) -> Content {
		Content::sequence(self.iter().cloned())
	}
}

impl<T: IntoContent> IntoContent for Option<T> {
	fn into_content(self) -> Content {
		match self {
			Some(value) => value.into_content(),
			None => Content::empty(),
		}
	}
}

impl IntoContent for () {
	fn into_content(self) -> Content {
		Content::empty()
	}
}

macro_rules! tuple_content {
	($($name:ident),+) => {
		impl<$($name: IntoContent),+> IntoContent for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_content(self) -> Content {
				let ($($name,)+) = self;
				Content::Sequence(vec![$($name.into_content()),+])
			}
		}
	};
}

tuple_content!(A);
tuple_content!(A, B);
tuple_content!(A, B, C);
tuple_content!(A, B, C, D);
tuple_content!(A, B, C, D, E);
tuple_content!(A, B, C, D, E, F);

macro_rules! scalar_content {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoContent for $ty {
				fn into_content(self) -> Content {
					Content::display(self)
				}
			}
		)*
	};
}

scalar_content!(
	bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(feature = "chrono")]
scalar_content!(
	chrono::NaiveDate,
	chrono::NaiveTime,
	chrono::NaiveDateTime,
	chrono::DateTime<chrono::Utc>,
	chrono::DateTime<chrono::FixedOffset>,
);
