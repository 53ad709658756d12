//! Factory configuration.
//!
//! A [`FactoryConfig`] describes one dialect: the namespace every produced name
//! is qualified with, and the marker stripped from the end of names. Missing
//! fields fall back to their defaults, so an empty JSON object is a valid
//! configuration.
//!
//! ```
//! use etree_factory_builder::FactoryConfig;
//!
//! let config = FactoryConfig::from_json_str(r#"{"namespace": "urn:example"}"#).unwrap();
//! assert_eq!(config.namespace.as_deref(), Some("urn:example"));
//! assert_eq!(config.name_marker, '_');
//! ```

use serde::{Deserialize, Serialize};

use crate::names::DEFAULT_NAME_MARKER;

/// Errors raised while loading a configuration
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid factory configuration: {0}")]
	Json(#[from] serde_json::Error),
}

/// Configuration for an [`ElementFactory`](crate::ElementFactory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
	/// Namespace URI applied to every element and attribute name.
	pub namespace: Option<String>,
	/// Character stripped from the end of tag and attribute names.
	pub name_marker: char,
}

impl Default for FactoryConfig {
	fn default() -> Self {
		Self {
			namespace: None,
			name_marker: DEFAULT_NAME_MARKER,
		}
	}
}

impl FactoryConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the namespace URI.
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// Sets the reserved-word marker.
	pub fn with_name_marker(mut self, marker: char) -> Self {
		self.name_marker = marker;
		self
	}

	/// Loads a configuration from JSON.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		tracing::debug!(
			namespace = ?config.namespace,
			name_marker = %config.name_marker,
			"loaded factory configuration"
		);
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config() {
		let config = FactoryConfig::default();
		assert_eq!(config.namespace, None);
		assert_eq!(config.name_marker, '_');
	}

	#[rstest]
	fn test_builder_methods() {
		let config = FactoryConfig::new()
			.with_namespace("urn:x")
			.with_name_marker('$');
		assert_eq!(config.namespace.as_deref(), Some("urn:x"));
		assert_eq!(config.name_marker, '$');
	}

	#[rstest]
	#[case("{}", None, '_')]
	#[case(r#"{"namespace": null}"#, None, '_')]
	#[case(r#"{"name_marker": "$"}"#, None, '$')]
	#[case(r#"{"namespace": "urn:a", "name_marker": "_"}"#, Some("urn:a"), '_')]
	fn test_from_json_str(
		#[case] json: &str,
		#[case] namespace: Option<&str>,
		#[case] marker: char,
	) {
		let config = FactoryConfig::from_json_str(json).unwrap();
		assert_eq!(config.namespace.as_deref(), namespace);
		assert_eq!(config.name_marker, marker);
	}

	#[rstest]
	#[case("not json")]
	#[case(r#"{"name_marker": "too long"}"#)]
	fn test_from_json_str_rejects_invalid(#[case] json: &str) {
		let err = FactoryConfig::from_json_str(json).unwrap_err();
		assert!(err.to_string().starts_with("Invalid factory configuration"));
	}

	#[rstest]
	fn test_config_roundtrip_through_json() {
		let config = FactoryConfig::new().with_namespace("urn:x");
		let json = serde_json::to_string(&config).unwrap();
		assert_eq!(FactoryConfig::from_json_str(&json).unwrap(), config);
	}
}
