//! `ElementInternals` as the elements' [`FormInternals`].

use wasm_bindgen::prelude::*;

use crate::error::{ElementError, Result};
use crate::internals::FormInternals;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_name = ElementInternals)]
	type RawInternals;

	#[wasm_bindgen(method, catch, js_name = setFormValue)]
	fn set_form_value(this: &RawInternals, value: &str) -> std::result::Result<(), JsValue>;
}

/// The internals object an element obtained from `attachInternals()`.
pub struct BrowserInternals {
	raw: RawInternals,
}

impl BrowserInternals {
	/// Wraps the value returned by `HTMLElement.attachInternals()`.
	pub fn from_js(internals: JsValue) -> Self {
		Self {
			raw: internals.unchecked_into(),
		}
	}
}

impl FormInternals for BrowserInternals {
	fn set_form_value(&self, value: &str) -> Result<()> {
		self.raw
			.set_form_value(value)
			.map_err(|err| ElementError::FormValue(format!("{err:?}")))
	}
}
