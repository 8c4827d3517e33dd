//! Capability check for loosely typed event targets.
//!
//! An event's target is not guaranteed to be a control with a `value`. The
//! handlers ask [`has_property`] before reading it, and silently ignore the
//! event when the check fails.

use serde_json::Value;

/// Name of the property every handler reads from its event target.
pub const VALUE_PROPERTY: &str = "value";

/// A dynamically shaped object that may or may not carry a given property.
pub trait DynTarget {
	/// Returns `true` if this target is a non-null object.
	fn is_object(&self) -> bool {
		true
	}

	/// Returns `true` if the target carries a property called `name`.
	fn has_property(&self, name: &str) -> bool;

	/// Reads property `name` as text, `None` when the property is absent.
	fn property_string(&self, name: &str) -> Option<String>;
}

/// Returns `true` iff `value` is present, is an object, and carries `prop`.
///
/// Never panics and never fails; `None` stands for a `null` target.
pub fn has_property<T: DynTarget + ?Sized>(value: Option<&T>, prop: &str) -> bool {
	value.is_some_and(|target| target.is_object() && target.has_property(prop))
}

/// Reads the `value` of an event target, or `None` if the guard rejects it.
pub fn target_value<T: DynTarget + ?Sized>(target: Option<&T>) -> Option<String> {
	let target = target?;
	if !has_property(Some(target), VALUE_PROPERTY) {
		return None;
	}
	target.property_string(VALUE_PROPERTY)
}

impl DynTarget for Value {
	fn is_object(&self) -> bool {
		matches!(self, Value::Object(_) | Value::Array(_))
	}

	fn has_property(&self, name: &str) -> bool {
		self.as_object().is_some_and(|map| map.contains_key(name))
	}

	fn property_string(&self, name: &str) -> Option<String> {
		self.as_object()?.get(name).map(json_to_text)
	}
}

fn json_to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		other => other.to_string(),
	}
}
