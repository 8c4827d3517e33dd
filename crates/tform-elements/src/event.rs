//! Events delivered to the elements and the handlers they are routed to.

use crate::guard::{DynTarget, target_value};

/// DOM events the elements listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// `input`: the control's value changed
	Input,
}

impl EventType {
	/// DOM event name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Input => "input",
		}
	}
}

/// Component methods a rendered listener can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
	/// Read the target's value into the element and its form value
	UpdateValue,
}

/// An `input`-class event whose target may expose a `value`.
#[derive(Clone, Copy)]
pub struct InputEvent<'a> {
	target: Option<&'a dyn DynTarget>,
}

impl<'a> InputEvent<'a> {
	/// Event fired by `target`
	pub fn new(target: &'a dyn DynTarget) -> Self {
		Self {
			target: Some(target),
		}
	}

	/// Event with a `null` target
	pub fn without_target() -> Self {
		Self { target: None }
	}

	/// Wraps an optional target as delivered by the platform
	pub fn from_target(target: Option<&'a dyn DynTarget>) -> Self {
		Self { target }
	}

	/// The event target, if any
	pub fn target(&self) -> Option<&'a dyn DynTarget> {
		self.target
	}

	/// The target's `value`, if the target passes the capability check
	pub fn target_value(&self) -> Option<String> {
		target_value(self.target)
	}
}

impl std::fmt::Debug for InputEvent<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InputEvent")
			.field("has_target", &self.target.is_some())
			.finish()
	}
}
