//! Error types for element registration and form-value plumbing

use thiserror::Error;

/// Error type for element operations
#[derive(Debug, Error)]
pub enum ElementError {
	/// Tag name is not a valid custom element name
	#[error("Invalid custom element name {tag:?}: {reason}")]
	InvalidTagName {
		/// The rejected tag
		tag: String,
		/// Which naming rule it breaks
		reason: &'static str,
	},

	/// The form and input elements were configured with the same tag
	#[error("Tag {0:?} is configured for both elements")]
	DuplicateTag(String),

	/// Configuration could not be parsed
	#[error("Invalid element configuration: {0}")]
	Config(#[from] serde_json::Error),

	/// The host rejected a form value
	#[error("Failed to set form value: {0}")]
	FormValue(String),

	/// A DOM operation failed
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

/// Result type for element operations
pub type Result<T> = std::result::Result<T, ElementError>;
