//! The single write channel from an element to its owning form.
//!
//! Every element obtains one [`FormInternals`] at construction and owns it for
//! its whole life. In the browser that is `ElementInternals`
//! (`browser::BrowserInternals`); elsewhere [`MemoryInternals`] records the
//! values so they can be inspected.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

/// Host-provided handle that sets an element's form submission value.
pub trait FormInternals {
	/// Registers `value` as the element's current form value.
	fn set_form_value(&self, value: &str) -> Result<()>;
}

/// In-memory internals that record every form value they receive.
///
/// Clones share the same record, so a test can keep one clone while the
/// element owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryInternals {
	calls: Rc<RefCell<Vec<String>>>,
}

impl MemoryInternals {
	/// Creates internals with no recorded values
	pub fn new() -> Self {
		Self::default()
	}

	/// The most recently registered form value, `None` if never set
	pub fn form_value(&self) -> Option<String> {
		self.calls.borrow().last().cloned()
	}

	/// All registered form values, oldest first
	pub fn calls(&self) -> Vec<String> {
		self.calls.borrow().clone()
	}

	/// Number of `set_form_value` calls
	pub fn call_count(&self) -> usize {
		self.calls.borrow().len()
	}
}

impl FormInternals for MemoryInternals {
	fn set_form_value(&self, value: &str) -> Result<()> {
		self.calls.borrow_mut().push(value.to_string());
		Ok(())
	}
}

/// Pushes `value` to `internals`; a rejected value is logged, never surfaced.
pub(crate) fn commit_form_value(internals: &dyn FormInternals, tag: &str, value: &str) {
	match internals.set_form_value(value) {
		Ok(()) => debug_log!("<{}> form value set ({} bytes)", tag, value.len()),
		Err(err) => error_log!("<{}> {}", tag, err),
	}
}
