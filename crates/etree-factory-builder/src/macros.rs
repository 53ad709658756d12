//! Call-syntax sugar for factories.

/// Builds an element with a factory using call-like syntax.
///
/// Content values come first, separated by commas. Attributes follow a `;`
/// as `name = value` pairs. The tag name may be an identifier (with a trailing
/// `_` or `r#` prefix for keywords) or a string literal.
///
/// ```
/// use etree_factory_builder::{ElementFactory, tag};
///
/// let t = ElementFactory::new();
/// let p = tag!(t, p("A ", tag!(t, a("link"; class_ = "menuitem")), "."));
/// assert_eq!(p.to_xml_string(), r#"<p>A <a class="menuitem">link</a>.</p>"#);
///
/// let input = tag!(t, input(; r#type = "checkbox", checked = true));
/// assert_eq!(input.to_xml_string(), r#"<input type="checkbox" checked="checked" />"#);
/// ```
#[macro_export]
macro_rules! tag {
	($factory:expr, $name:tt ( $($content:expr),* $(,)? $(; $($key:tt = $value:expr),* $(,)?)? )) => {
		$factory.element(
			$crate::__markup_name!($name),
			$crate::Content::Sequence(::std::vec![$($crate::IntoContent::into_content($content)),*]),
			$crate::attrs!($($($key = $value),*)?),
		)
	};
}

#[cfg(test)]
mod tests {
	use crate::{ElementFactory, tag};
	use etree_factory_tree::QName;
	use rstest::rstest;

	#[rstest]
	fn test_tag_macro_with_no_arguments() {
		let t = ElementFactory::new();
		let br = tag!(t, br());
		assert_eq!(br.tag(), &QName::local("br"));
		assert!(br.text().is_none());
		assert!(br.attrs().is_empty());
	}

	#[rstest]
	fn test_tag_macro_content_and_attrs() {
		// Arrange
		let t = ElementFactory::new();

		// Act
		let el = tag!(t, a("A ", "link"; href = "/", class_ = "menuitem",));

		// Assert
		assert_eq!(el.text(), Some("A link"));
		assert_eq!(el.get("href"), Some("/"));
		assert_eq!(el.get("class"), Some("menuitem"));
	}

	#[rstest]
	fn test_tag_macro_keyword_and_literal_names() {
		let t = ElementFactory::new();
		assert_eq!(tag!(t, del_("x")).tag().local_name(), "del");
		assert_eq!(tag!(t, r#loop("x")).tag().local_name(), "loop");
		assert_eq!(tag!(t, "my-widget"("x")).tag().local_name(), "my-widget");
	}

	#[rstest]
	fn test_tag_macro_uses_factory_namespace() {
		let t = ElementFactory::with_namespace("urn:x");
		let el = tag!(t, item("1"; id = "one"));
		assert_eq!(el.tag(), &QName::qualified("urn:x", "item"));
		assert_eq!(el.get(QName::qualified("urn:x", "id")), Some("one"));
	}

	#[rstest]
	fn test_tag_macro_with_default_factory() {
		let el = tag!(crate::default_factory(), em("x"));
		assert_eq!(el.to_xml_string(), "<em>x</em>");
	}
}
