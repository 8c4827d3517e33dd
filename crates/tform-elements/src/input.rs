//! `t-input`: a single text input that submits with its owning form.

use std::borrow::Cow;

use crate::attributes::{assign, bool_from_attribute, bool_to_attribute, string_from_attribute};
use crate::component::FormAssociated;
use crate::config::DEFAULT_INPUT_TAG;
use crate::event::{EventType, Handler, InputEvent};
use crate::guard::DynTarget;
use crate::internals::{FormInternals, commit_form_value};
use crate::view::{ElementView, IntoView, View};

/// Form-associated element rendering one native `<input>`.
///
/// Its `value` may be legitimately absent, so the first render only
/// registers a form value when one was preset and non-empty.
pub struct InputElement {
	tag: Cow<'static, str>,
	name: Option<String>,
	value: Option<String>,
	required: bool,
	form: Option<String>,
	internals: Box<dyn FormInternals>,
}

impl InputElement {
	/// Observed attributes, in the order they are rendered.
	pub const OBSERVED_ATTRIBUTES: &'static [&'static str] = &["name", "value", "required", "form"];

	/// Creates an element owning `internals`, under the default `t-input` tag.
	pub fn new(internals: impl FormInternals + 'static) -> Self {
		Self {
			tag: Cow::Borrowed(DEFAULT_INPUT_TAG),
			name: Some(String::new()),
			value: None,
			required: true,
			form: None,
			internals: Box::new(internals),
		}
	}

	/// Renders this instance under `tag` instead of `t-input`.
	pub fn with_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Submission name, `None` once the attribute was removed
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Current value, `None` until set or typed
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Whether the rendered control is marked required
	pub fn required(&self) -> bool {
		self.required
	}

	/// Id of the form this element is associated with
	pub fn form(&self) -> Option<&str> {
		self.form.as_deref()
	}

	/// Sets the submission name
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = Some(name.into());
	}

	/// Sets or clears the value without touching the form value
	pub fn set_value(&mut self, value: Option<String>) {
		self.value = value;
	}

	/// Sets the required flag
	pub fn set_required(&mut self, required: bool) {
		self.required = required;
	}

	/// Sets or clears the form association id
	pub fn set_form(&mut self, form: Option<String>) {
		self.form = form;
	}

	/// `input` handler: mirrors the target's value into this element and its
	/// form value. Targets without a `value` are ignored.
	pub fn update_value(&mut self, event: &InputEvent<'_>) -> bool {
		let Some(value) = event.target_value() else {
			debug_log!("<{}> ignored input event without a value", self.tag);
			return false;
		};
		commit_form_value(self.internals.as_ref(), &self.tag, &value);
		self.value = Some(value);
		true
	}
}

impl FormAssociated for InputElement {
	fn component_name() -> &'static str {
		"InputElement"
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
			"value" => assign(&mut self.value, string_from_attribute(value)),
			"required" => assign(&mut self.required, bool_from_attribute(value)),
			"form" => assign(&mut self.form, string_from_attribute(value)),
			_ => false,
		}
	}

	fn reflected_attributes(&self) -> Vec<(&'static str, Option<String>)> {
		vec![
			("form", self.form.clone()),
			("required", bool_to_attribute(self.required)),
		]
	}

	fn render(&self) -> View {
		ElementView::new("input")
			.attr_if_defined("name", self.name.clone())
			.attr_if_defined("form", self.form.clone())
			.attr("required", self.required.to_string())
			.attr_if_defined("value", self.value.clone())
			.on(EventType::Input, Handler::UpdateValue)
			.into_view()
	}

	fn first_updated(&mut self) {
		if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
			commit_form_value(self.internals.as_ref(), &self.tag, value);
		}
	}

	fn handle_event(&mut self, handler: Handler, event: &InputEvent<'_>) -> bool {
		match handler {
			Handler::UpdateValue => self.update_value(event),
		}
	}
}

impl DynTarget for InputElement {
	fn has_property(&self, name: &str) -> bool {
		Self::OBSERVED_ATTRIBUTES.contains(&name)
	}

	fn property_string(&self, name: &str) -> Option<String> {
		match name {
			"name" => Some(self.name.clone().unwrap_or_default()),
			"value" => Some(self.value.clone().unwrap_or_default()),
			"required" => Some(self.required.to_string()),
			"form" => Some(self.form.clone().unwrap_or_default()),
			_ => None,
		}
	}
}

impl std::fmt::Debug for InputElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InputElement")
			.field("tag", &self.tag)
			.field("name", &self.name)
			.field("value", &self.value)
			.field("required", &self.required)
			.field("form", &self.form)
			.finish_non_exhaustive()
	}
}
