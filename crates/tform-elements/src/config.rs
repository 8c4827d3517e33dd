//! Element registration settings.
//!
//! ```
//! use tform_elements::ElementsConfig;
//!
//! let config = ElementsConfig::from_json(r#"{ "input_tag": "acme-input" }"#).unwrap();
//! assert_eq!(config.form_tag, "t-form");
//! assert_eq!(config.input_tag, "acme-input");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ElementError, Result};

/// Default tag of the form element
pub const DEFAULT_FORM_TAG: &str = "t-form";

/// Default tag of the input element
pub const DEFAULT_INPUT_TAG: &str = "t-input";

// Hyphenated names HTML reserves for SVG and MathML.
const RESERVED_NAMES: &[&str] = &[
	"annotation-xml",
	"color-profile",
	"font-face",
	"font-face-src",
	"font-face-uri",
	"font-face-format",
	"font-face-name",
	"missing-glyph",
];

/// Tag names under which the two elements are registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementsConfig {
	/// Tag of the wrapping form element
	pub form_tag: String,
	/// Tag of the input element (also the tag the form element embeds)
	pub input_tag: String,
}

impl Default for ElementsConfig {
	fn default() -> Self {
		Self {
			form_tag: DEFAULT_FORM_TAG.to_string(),
			input_tag: DEFAULT_INPUT_TAG.to_string(),
		}
	}
}

impl ElementsConfig {
	/// Parses a config from JSON. Missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Sets the form element tag
	pub fn with_form_tag(mut self, tag: impl Into<String>) -> Self {
		self.form_tag = tag.into();
		self
	}

	/// Sets the input element tag
	pub fn with_input_tag(mut self, tag: impl Into<String>) -> Self {
		self.input_tag = tag.into();
		self
	}

	/// Checks both tags against the custom element naming rules.
	pub fn validate(&self) -> Result<()> {
		validate_tag_name(&self.form_tag)?;
		validate_tag_name(&self.input_tag)?;
		if self.form_tag == self.input_tag {
			return Err(ElementError::DuplicateTag(self.form_tag.clone()));
		}
		Ok(())
	}
}

/// Validates a tag against the rules `customElements.define` enforces.
pub fn validate_tag_name(tag: &str) -> Result<()> {
	let invalid = |reason| {
		Err(ElementError::InvalidTagName {
			tag: tag.to_string(),
			reason,
		})
	};

	match tag.chars().next() {
		Some(c) if c.is_ascii_lowercase() => {}
		_ => return invalid("must start with a lowercase ASCII letter"),
	}
	if !tag.contains('-') {
		return invalid("must contain a hyphen");
	}
	if tag.chars().any(|c| c.is_ascii_uppercase()) {
		return invalid("must not contain uppercase ASCII letters");
	}
	let allowed = |c: char| {
		c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_') || !c.is_ascii()
	};
	if !tag.chars().all(allowed) {
		return invalid("contains a character not allowed in custom element names");
	}
	if RESERVED_NAMES.contains(&tag) {
		return invalid("is a reserved name");
	}
	Ok(())
}
