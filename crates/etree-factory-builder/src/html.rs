//! HTML dialect
//!
//! [`HtmlFactory`] has one method per common HTML tag, so calls read like the
//! markup they produce. Tags outside this vocabulary stay reachable through
//! [`HtmlFactory::tag`] and [`HtmlFactory::element`].
//!
//! ## Example
//!
//! ```
//! use etree_factory_builder::{HtmlFactory, attrs};
//!
//! let html = HtmlFactory::new();
//! let nav = html.ul(
//!     [
//!         html.li(html.a("Home", attrs! { href = "/" }), ()),
//!         html.li(html.a("About", attrs! { href = "/about" }), ()),
//!     ],
//!     attrs! { class_ = "menu" },
//! );
//! assert_eq!(
//!     nav.to_xml_string(),
//!     r#"<ul class="menu"><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul>"#
//! );
//! ```

use etree_factory_tree::Element;

use crate::attrs::Attrs;
use crate::content::IntoContent;
use crate::factory::{ElementFactory, TagConstructor};

/// Namespace URI of XHTML.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Element factory with typed HTML tag methods.
#[derive(Debug, Default)]
pub struct HtmlFactory {
	factory: ElementFactory,
}

impl HtmlFactory {
	/// Creates an HTML factory producing unqualified names.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an HTML factory qualifying names with the XHTML namespace.
	pub fn xhtml() -> Self {
		Self::from_factory(ElementFactory::with_namespace(XHTML_NAMESPACE))
	}

	/// Wraps an existing factory.
	pub fn from_factory(factory: ElementFactory) -> Self {
		Self { factory }
	}

	/// Returns the underlying factory.
	pub fn factory(&self) -> &ElementFactory {
		&self.factory
	}

	/// Returns the constructor for any tag name.
	pub fn tag(&self, name: &str) -> TagConstructor {
		self.factory.tag(name)
	}

	/// Builds an element for any tag name.
	pub fn element(
		&self,
		name: &str,
		content: impl IntoContent,
		attrs: impl Into<Attrs>,
	) -> Element {
		self.factory.element(name, content, attrs)
	}
}

/// Macro for defining HTML tag methods
macro_rules! define_tags {
	($($(#[$meta:meta])* $name:ident, $tag:literal;)+) => {
		impl HtmlFactory {
			$(
				$(#[$meta])*
				pub fn $name(&self, content: impl IntoContent, attrs: impl Into<Attrs>) -> Element {
					self.factory.element($tag, content, attrs)
				}
			)+
		}
	};
}

define_tags! {
	/// Builds an `<html>` element
	html, "html";
	/// Builds a `<head>` element
	head, "head";
	/// Builds a `<title>` element
	title, "title";
	/// Builds a `<meta>` element
	meta, "meta";
	/// Builds a `<link>` element
	link, "link";
	/// Builds a `<body>` element
	body, "body";
	/// Builds a `<div>` element
	div, "div";
	/// Builds a `<span>` element
	span, "span";
	/// Builds a `<p>` element (paragraph)
	p, "p";
	/// Builds an `<a>` element (hyperlink)
	a, "a";
	/// Builds an `<em>` element
	em, "em";
	/// Builds a `<strong>` element
	strong, "strong";
	/// Builds a `<code>` element
	code, "code";
	/// Builds a `<pre>` element
	pre, "pre";
	/// Builds a `<br>` element
	br, "br";
	/// Builds an `<img>` element
	img, "img";
	/// Builds an `<h1>` element
	h1, "h1";
	/// Builds an `<h2>` element
	h2, "h2";
	/// Builds an `<h3>` element
	h3, "h3";
	/// Builds a `<ul>` element (unordered list)
	ul, "ul";
	/// Builds an `<ol>` element (ordered list)
	ol, "ol";
	/// Builds an `<li>` element (list item)
	li, "li";
	/// Builds a `<table>` element
	table, "table";
	/// Builds a `<thead>` element
	thead, "thead";
	/// Builds a `<tbody>` element
	tbody, "tbody";
	/// Builds a `<tr>` element (table row)
	tr, "tr";
	/// Builds a `<th>` element (header cell)
	th, "th";
	/// Builds a `<td>` element (data cell)
	td, "td";
	/// Builds a `<form>` element
	form, "form";
	/// Builds a `<label>` element
	label, "label";
	/// Builds an `<input>` element
	input, "input";
	/// Builds a `<button>` element
	button, "button";
	/// Builds a `<select>` element
	select, "select";
	/// Builds an `<option>` element
	option, "option";
	/// Builds a `<textarea>` element
	textarea, "textarea";
	/// Builds a `<nav>` element
	nav, "nav";
	/// Builds a `<section>` element
	section, "section";
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attrs;
	use etree_factory_tree::QName;
	use rstest::rstest;

	#[rstest]
	fn test_typed_methods_build_named_elements() {
		let html = HtmlFactory::new();
		assert_eq!(html.div((), ()).tag(), &QName::local("div"));
		assert_eq!(html.td("x", ()).text(), Some("x"));
	}

	#[rstest]
	fn test_form_controls() {
		// Arrange
		let html = HtmlFactory::new();

		// Act
		let form = html.form(
			(
				html.label("Remember", attrs! { for_ = "remember" }),
				html.input((), attrs! { r#type = "checkbox", id = "remember", checked = true, disabled = false }),
			),
			attrs! { method = "post" },
		);

		// Assert
		assert_eq!(
			form.to_xml_string(),
			r#"<form method="post"><label for="remember">Remember</label><input type="checkbox" id="remember" checked="checked" /></form>"#
		);
	}

	#[rstest]
	fn test_xhtml_qualifies_names() {
		let html = HtmlFactory::xhtml();
		let p = html.p("x", attrs! { class_ = "c" });
		assert_eq!(p.tag(), &QName::qualified(XHTML_NAMESPACE, "p"));
		assert_eq!(p.get(QName::qualified(XHTML_NAMESPACE, "class")), Some("c"));
	}

	#[rstest]
	fn test_non_vocabulary_tags_go_through_factory() {
		let html = HtmlFactory::new();
		let el = html.element("details", html.tag("summary").with_content("More"), ());
		assert_eq!(el.to_xml_string(), "<details><summary>More</summary></details>");
		assert_eq!(html.factory().cached_tags(), 2);
	}
}
