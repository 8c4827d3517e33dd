//! `t-form`: wraps one embedded `t-input` and projects its light DOM children.

use std::borrow::Cow;

use crate::attributes::{assign, string_from_attribute};
use crate::component::FormAssociated;
use crate::config::{DEFAULT_FORM_TAG, DEFAULT_INPUT_TAG, ElementsConfig};
use crate::event::{EventType, Handler, InputEvent};
use crate::guard::DynTarget;
use crate::internals::{FormInternals, commit_form_value};
use crate::view::{ElementView, IntoView, View};

/// Form-associated wrapper around an embedded input element.
///
/// Always carries a string value (empty by default) and registers it on the
/// first render even when nothing was typed yet.
pub struct FormElement {
	tag: Cow<'static, str>,
	input_tag: Cow<'static, str>,
	name: Option<String>,
	value: String,
	form: Option<String>,
	internals: Box<dyn FormInternals>,
}

impl FormElement {
	/// Observed attributes.
	pub const OBSERVED_ATTRIBUTES: &'static [&'static str] = &["name", "value", "form"];

	/// Creates an element owning `internals`, under the default tags.
	pub fn new(internals: impl FormInternals + 'static) -> Self {
		Self {
			tag: Cow::Borrowed(DEFAULT_FORM_TAG),
			input_tag: Cow::Borrowed(DEFAULT_INPUT_TAG),
			name: Some(String::new()),
			value: String::new(),
			form: None,
			internals: Box::new(internals),
		}
	}

	/// Uses the tags from `config` for this element and its embedded input.
	pub fn with_config(mut self, config: &ElementsConfig) -> Self {
		self.tag = Cow::Owned(config.form_tag.clone());
		self.input_tag = Cow::Owned(config.input_tag.clone());
		self
	}

	/// Submission name, passed down to the embedded input. `None` once the
	/// attribute was removed.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Current value
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Id of the form this element is associated with
	pub fn form(&self) -> Option<&str> {
		self.form.as_deref()
	}

	/// Tag of the embedded input element
	pub fn input_tag(&self) -> &str {
		&self.input_tag
	}

	/// Sets the submission name
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = Some(name.into());
	}

	/// Sets the value without touching the form value
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	/// Sets or clears the form association id
	pub fn set_form(&mut self, form: Option<String>) {
		self.form = form;
	}

	/// `input` handler for events bubbling out of the embedded input.
	pub fn update_value(&mut self, event: &InputEvent<'_>) -> bool {
		let Some(value) = event.target_value() else {
			debug_log!("<{}> ignored input event without a value", self.tag);
			return false;
		};
		commit_form_value(self.internals.as_ref(), &self.tag, &value);
		self.value = value;
		true
	}
}

impl FormAssociated for FormElement {
	fn component_name() -> &'static str {
		"FormElement"
	}

	fn observed_attributes() -> &'static [&'static str] {
		Self::OBSERVED_ATTRIBUTES
	}

	fn tag_name(&self) -> &str {
		&self.tag
	}

	fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
		match name {
			"name" => assign(&mut self.name, string_from_attribute(value)),
			"value" => assign(&mut self.value, value.unwrap_or_default().to_string()),
			"form" => assign(&mut self.form, string_from_attribute(value)),
			_ => false,
		}
	}

	fn reflected_attributes(&self) -> Vec<(&'static str, Option<String>)> {
		vec![("name", self.name.clone())]
	}

	fn render(&self) -> View {
		View::fragment([
			ElementView::new(self.input_tag.clone())
				.attr("name", self.name.clone().unwrap_or_default())
				.on(EventType::Input, Handler::UpdateValue)
				.into_view(),
			View::slot().into_view(),
		])
	}

	fn first_updated(&mut self) {
		commit_form_value(self.internals.as_ref(), &self.tag, &self.value);
	}

	fn handle_event(&mut self, handler: Handler, event: &InputEvent<'_>) -> bool {
		match handler {
			Handler::UpdateValue => self.update_value(event),
		}
	}
}

impl DynTarget for FormElement {
	fn has_property(&self, name: &str) -> bool {
		Self::OBSERVED_ATTRIBUTES.contains(&name)
	}

	fn property_string(&self, name: &str) -> Option<String> {
		match name {
			"name" => Some(self.name.clone().unwrap_or_default()),
			"value" => Some(self.value.clone()),
			"form" => Some(self.form.clone().unwrap_or_default()),
			_ => None,
		}
	}
}

impl std::fmt::Debug for FormElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormElement")
			.field("tag", &self.tag)
			.field("input_tag", &self.input_tag)
			.field("name", &self.name)
			.field("value", &self.value)
			.field("form", &self.form)
			.finish_non_exhaustive()
	}
}
