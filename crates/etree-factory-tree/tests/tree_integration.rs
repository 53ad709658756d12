//! Element tree integration tests
//!
//! Builds small documents by hand and checks navigation, lookup, and
//! serialization working together.

use etree_factory_tree::{Element, FindError, QName, SerializeOptions, find_unique, serialize};
use insta::assert_snapshot;
use rstest::{fixture, rstest};

fn cell(text: &str) -> Element {
	let mut td = Element::new("td");
	td.push_text(text);
	td
}

#[fixture]
fn table() -> Element {
	let mut table = Element::new("table");
	table.set("id", "prices");
	for (id, name, price) in [("r1", "Tea", "2"), ("r2", "Coffee", "3")] {
		let mut row = Element::new("tr");
		row.set("id", id);
		row.append(cell(name));
		row.append(cell(price));
		table.append(row);
	}
	table
}

#[rstest]
fn test_table_serializes(table: Element) {
	assert_snapshot!(
		table.to_xml_string(),
		@r#"<table id="prices"><tr id="r1"><td>Tea</td><td>2</td></tr><tr id="r2"><td>Coffee</td><td>3</td></tr></table>"#
	);
}

#[rstest]
fn test_lookup_then_edit_then_serialize(mut table: Element) {
	// Arrange
	let row = find_unique(&table, &QName::local("tr"), Some("r2")).unwrap();
	assert_eq!(row.len(), 2);

	// Act
	let row = etree_factory_tree::find_unique_mut(
		&mut table,
		&QName::local("tr"),
		&QName::local("id"),
		Some("r2"),
	)
	.unwrap();
	row.append(cell("new"));

	// Assert
	let html = table.to_xml_string();
	assert!(html.contains(r#"<tr id="r2"><td>Coffee</td><td>3</td><td>new</td></tr>"#));
}

#[rstest]
fn test_lookup_failures_surface_to_caller(table: Element) {
	let missing = find_unique(&table, &QName::local("th"), None);
	assert!(matches!(missing, Err(FindError::NotFound { .. })));

	let missing_id = find_unique(&table, &QName::local("tr"), Some("r9"));
	assert!(matches!(missing_id, Err(FindError::NotFound { id: Some(_), .. })));
}

#[rstest]
fn test_long_form_empty_elements(table: Element) {
	let mut empty_row = Element::new("tr");
	empty_row.push_text("");
	let mut table = table;
	table.append(empty_row);

	let options = SerializeOptions {
		short_empty_elements: false,
	};
	assert!(serialize::to_string(&table, &options).ends_with("<tr></tr></table>"));
}

#[rstest]
fn test_iteration_visits_every_cell(table: Element) {
	let texts: Vec<_> = table
		.findall(&QName::local("td"))
		.filter_map(Element::text)
		.collect();
	assert_eq!(texts, ["Tea", "2", "Coffee", "3"]);
}
