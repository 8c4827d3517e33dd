//! Synchronous update cycle for a form-associated element.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──connect()──► Attached ──disconnect()──► Detached
//!                                 ▲                           │
//!                                 └────────connect()──────────┘
//! ```
//!
//! While attached every mutation is followed by an update before the call
//! returns. Mutations made before the first `connect()` are held until then,
//! so a value preset by an embedding parent is visible to `first_updated`.

use std::collections::BTreeMap;

use crate::component::FormAssociated;
use crate::event::{Handler, InputEvent};
use crate::view::View;

/// Lifecycle phase of a hosted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// Constructed, never connected
	Uninitialized,
	/// Connected to a document
	Attached,
	/// Removed from the document
	Detached,
}

/// A reflected host attribute that changed during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
	/// Attribute name
	pub name: &'static str,
	/// New text, `None` when the attribute was removed
	pub value: Option<String>,
}

/// What an update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
	/// Whether `first_updated` ran
	pub first_update: bool,
	/// Reflected attributes that changed on the host
	pub reflected: Vec<AttributeChange>,
}

/// Owns a component and drives its render / reflect / first-update cycle.
#[derive(Debug)]
pub struct ElementHost<C> {
	component: C,
	phase: Phase,
	has_updated: bool,
	update_pending: bool,
	attributes: BTreeMap<String, String>,
	rendered: Option<View>,
	update_count: usize,
}

impl<C: FormAssociated> ElementHost<C> {
	/// Wraps a freshly constructed component.
	pub fn new(component: C) -> Self {
		Self {
			component,
			phase: Phase::Uninitialized,
			has_updated: false,
			update_pending: true,
			attributes: BTreeMap::new(),
			rendered: None,
			update_count: 0,
		}
	}

	/// The hosted component
	pub fn component(&self) -> &C {
		&self.component
	}

	/// Current lifecycle phase
	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Whether the first update has run
	pub fn has_updated(&self) -> bool {
		self.has_updated
	}

	/// Number of updates performed so far
	pub fn update_count(&self) -> usize {
		self.update_count
	}

	/// The most recent render, `None` before the first update
	pub fn rendered(&self) -> Option<&View> {
		self.rendered.as_ref()
	}

	/// Host element attributes, including reflected ones
	pub fn attributes(&self) -> &BTreeMap<String, String> {
		&self.attributes
	}

	/// Reads one host attribute
	pub fn get_attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Connects the element and performs any pending update.
	pub fn connect(&mut self) -> Option<UpdateReport> {
		self.phase = Phase::Attached;
		debug_log!("<{}> connected", self.component.tag_name());
		self.perform_update()
	}

	/// Disconnects the element. The last render is kept.
	pub fn disconnect(&mut self) {
		self.phase = Phase::Detached;
		debug_log!("<{}> disconnected", self.component.tag_name());
	}

	/// Mutates the component through its setters and requests an update.
	pub fn update(&mut self, f: impl FnOnce(&mut C)) -> Option<UpdateReport> {
		f(&mut self.component);
		self.request_update()
	}

	/// Sets a host attribute, converting observed ones into properties.
	pub fn set_attribute(&mut self, name: &str, value: &str) -> Option<UpdateReport> {
		self.attributes.insert(name.to_string(), value.to_string());
		self.attribute_changed(name, Some(value))
	}

	/// Removes a host attribute, converting observed ones into properties.
	pub fn remove_attribute(&mut self, name: &str) -> Option<UpdateReport> {
		self.attributes.remove(name);
		self.attribute_changed(name, None)
	}

	/// Converts an attribute change the hosting environment already applied.
	pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Option<UpdateReport> {
		if !C::observed_attributes().contains(&name) {
			return None;
		}
		if !self.component.attribute_changed(name, value) {
			return None;
		}
		self.request_update()
	}

	/// Routes an event from a rendered listener to the component.
	pub fn dispatch(&mut self, handler: Handler, event: &InputEvent<'_>) -> Option<UpdateReport> {
		if !self.component.handle_event(handler, event) {
			return None;
		}
		self.request_update()
	}

	fn request_update(&mut self) -> Option<UpdateReport> {
		self.update_pending = true;
		if self.phase == Phase::Attached {
			self.perform_update()
		} else {
			None
		}
	}

	/// Runs a pending update: render, reflect, and on the first update only,
	/// `first_updated`.
	pub fn perform_update(&mut self) -> Option<UpdateReport> {
		if !self.update_pending || self.phase == Phase::Uninitialized {
			return None;
		}
		self.update_pending = false;

		let reflected = self.reflect();
		self.rendered = Some(self.component.render());
		self.update_count += 1;

		let first_update = !self.has_updated;
		if first_update {
			self.has_updated = true;
			self.component.first_updated();
		}
		debug_log!(
			"<{}> {} update #{}",
			self.component.tag_name(),
			C::component_name(),
			self.update_count
		);

		Some(UpdateReport {
			first_update,
			reflected,
		})
	}

	fn reflect(&mut self) -> Vec<AttributeChange> {
		let mut changes = Vec::new();
		for (name, value) in self.component.reflected_attributes() {
			let current = self.attributes.get(name).cloned();
			if current == value {
				continue;
			}
			match &value {
				Some(text) => {
					self.attributes.insert(name.to_string(), text.clone());
				}
				None => {
					self.attributes.remove(name);
				}
			}
			changes.push(AttributeChange { name, value });
		}
		changes
	}

	/// Host attributes as they would be after the next update.
	pub fn ssr_attributes(&self) -> BTreeMap<String, String> {
		let mut attributes = self.attributes.clone();
		for (name, value) in self.component.reflected_attributes() {
			match value {
				Some(text) => {
					attributes.insert(name.to_string(), text);
				}
				None => {
					attributes.remove(name);
				}
			}
		}
		attributes
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::FormElement;
	use crate::input::InputElement;
	use crate::internals::MemoryInternals;
	use rstest::rstest;
	use serde_json::json;

	fn input_host() -> (ElementHost<InputElement>, MemoryInternals) {
		let internals = MemoryInternals::new();
		(ElementHost::new(InputElement::new(internals.clone())), internals)
	}

	#[rstest]
	fn test_no_update_before_connect() {
		let (mut host, internals) = input_host();
		assert_eq!(host.update(|c| c.set_name("n")), None);
		assert_eq!(host.phase(), Phase::Uninitialized);
		assert!(host.rendered().is_none());
		assert_eq!(internals.call_count(), 0);
	}

	#[rstest]
	fn test_connect_performs_first_update() {
		let (mut host, internals) = input_host();
		host.update(|c| c.set_value(Some("preset".to_string())));

		let report = host.connect().unwrap();

		assert!(report.first_update);
		assert!(host.has_updated());
		assert_eq!(internals.calls(), vec!["preset".to_string()]);
		let rendered = host.rendered().unwrap().render_to_string();
		assert!(rendered.contains("value=\"preset\""));
	}

	#[rstest]
	fn test_first_update_runs_once_across_reconnect() {
		let (mut host, _) = input_host();
		let form_internals = MemoryInternals::new();
		let mut form = ElementHost::new(FormElement::new(form_internals.clone()));

		host.connect();
		host.disconnect();
		assert_eq!(host.phase(), Phase::Detached);
		host.update(|c| c.set_name("again"));
		let report = host.connect().unwrap();
		assert!(!report.first_update);

		form.connect();
		form.disconnect();
		form.connect();
		assert_eq!(form_internals.calls(), vec![String::new()]);
	}

	#[rstest]
	fn test_update_while_detached_deferred_until_reconnect() {
		let (mut host, _) = input_host();
		host.connect();
		host.disconnect();

		assert_eq!(host.update(|c| c.set_name("later")), None);
		assert_eq!(host.update_count(), 1);

		host.connect();
		assert_eq!(host.update_count(), 2);
		let html = host.rendered().unwrap().render_to_string();
		assert!(html.contains("name=\"later\""));
	}

	#[rstest]
	fn test_dispatch_updates_value_and_rerenders() {
		let (mut host, internals) = input_host();
		host.connect();
		let target = json!({ "value": "hello" });

		let report = host.dispatch(Handler::UpdateValue, &InputEvent::new(&target));

		assert!(report.is_some());
		assert_eq!(host.component().value(), Some("hello"));
		assert_eq!(internals.form_value().as_deref(), Some("hello"));
		let control = host.rendered().unwrap().find_element("input").unwrap().clone();
		assert_eq!(control.attribute("value"), Some("hello"));
	}

	#[rstest]
	fn test_dispatch_rejected_event_skips_update() {
		let (mut host, internals) = input_host();
		host.connect();
		let count = host.update_count();

		assert_eq!(host.dispatch(Handler::UpdateValue, &InputEvent::without_target()), None);

		assert_eq!(host.update_count(), count);
		assert_eq!(internals.call_count(), 0);
	}

	#[rstest]
	fn test_reflection_of_required_and_form() {
		let (mut host, _) = input_host();
		let report = host.connect().unwrap();
		assert_eq!(
			report.reflected,
			vec![AttributeChange {
				name: "required",
				value: Some(String::new())
			}]
		);
		assert_eq!(host.get_attribute("required"), Some(""));
		assert_eq!(host.get_attribute("form"), None);

		let report = host
			.update(|c| {
				c.set_required(false);
				c.set_form(Some("f1".to_string()));
			})
			.unwrap();
		assert_eq!(report.reflected.len(), 2);
		assert_eq!(host.get_attribute("required"), None);
		assert_eq!(host.get_attribute("form"), Some("f1"));
	}

	#[rstest]
	fn test_attribute_changes_drive_properties() {
		let (mut host, _) = input_host();
		host.connect();

		host.set_attribute("name", "email");
		host.remove_attribute("required");
		let html = host.rendered().unwrap().render_to_string();
		assert_eq!(html, "<input name=\"email\" required=\"false\" />");
	}

	#[rstest]
	fn test_unobserved_attribute_does_not_update() {
		let (mut host, _) = input_host();
		host.connect();
		let count = host.update_count();

		assert_eq!(host.set_attribute("class", "wide"), None);
		assert_eq!(host.get_attribute("class"), Some("wide"));
		assert_eq!(host.update_count(), count);
	}

	#[rstest]
	fn test_unchanged_attribute_does_not_update() {
		let (mut host, _) = input_host();
		host.connect();
		host.set_attribute("name", "same");
		let count = host.update_count();

		assert_eq!(host.set_attribute("name", "same"), None);
		assert_eq!(host.update_count(), count);
	}

	#[rstest]
	fn test_form_reflects_name() {
		let mut host = ElementHost::new(FormElement::new(MemoryInternals::new()));
		host.connect();
		assert_eq!(host.get_attribute("name"), Some(""));

		host.update(|c| c.set_name("query"));
		assert_eq!(host.get_attribute("name"), Some("query"));

		host.remove_attribute("name");
		assert_eq!(host.component().name(), None);
		assert_eq!(host.get_attribute("name"), None);
	}

	#[rstest]
	fn test_removed_name_dropped_from_input_control() {
		let (mut host, _) = input_host();
		host.set_attribute("name", "x");
		host.connect();

		host.remove_attribute("name");

		let html = host.rendered().unwrap().render_to_string();
		assert_eq!(html, "<input required=\"true\" />");
	}

	#[rstest]
	fn test_ssr_attributes_include_pending_reflection() {
		let (mut host, _) = input_host();
		host.set_attribute("id", "email");
		let attrs = host.ssr_attributes();
		assert_eq!(attrs.get("id").map(String::as_str), Some("email"));
		assert_eq!(attrs.get("required").map(String::as_str), Some(""));
	}
}
