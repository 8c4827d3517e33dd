//! The contract every form-associated element implements.

use crate::event::{Handler, InputEvent};
use crate::guard::DynTarget;
use crate::view::View;

/// A custom element that participates in native form submission.
///
/// Implementors are plain state structs. [`ElementHost`](crate::ElementHost)
/// (or the browser binding) owns the update cycle: it feeds attribute changes
/// and events in, calls [`render`](Self::render) after every mutation, and
/// calls [`first_updated`](Self::first_updated) exactly once.
///
/// Elements are also event targets themselves, so that an enclosing element
/// can read their `value` when their events bubble out.
pub trait FormAssociated: DynTarget + 'static {
	/// Registered with `static formAssociated` on the element class.
	const FORM_ASSOCIATED: bool = true;

	/// Component name for logs.
	fn component_name() -> &'static str;

	/// Attributes whose changes are routed to [`attribute_changed`](Self::attribute_changed).
	fn observed_attributes() -> &'static [&'static str];

	/// The tag this instance is rendered under.
	fn tag_name(&self) -> &str;

	/// Converts an observed attribute into its property.
	///
	/// `value` is `None` when the attribute was removed. Returns whether the
	/// property changed.
	fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool;

	/// Properties reflected onto the host element after each update.
	///
	/// `None` means the attribute is removed from the host.
	fn reflected_attributes(&self) -> Vec<(&'static str, Option<String>)>;

	/// Renders the element's shadow content.
	fn render(&self) -> View;

	/// Runs once, after the first render.
	fn first_updated(&mut self);

	/// Routes an event from a rendered listener. Returns whether state changed.
	fn handle_event(&mut self, handler: Handler, event: &InputEvent<'_>) -> bool;
}
