//! Event targets delivered by the browser.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::guard::DynTarget;

impl DynTarget for JsValue {
	fn is_object(&self) -> bool {
		JsValue::is_object(self)
	}

	// Not an own-property check: native controls and the element classes
	// expose `value` as a prototype accessor, so the lookup follows the chain.
	fn has_property(&self, name: &str) -> bool {
		Reflect::has(self, &JsValue::from_str(name)).unwrap_or(false)
	}

	fn property_string(&self, name: &str) -> Option<String> {
		let value = Reflect::get(self, &JsValue::from_str(name)).ok()?;
		Some(js_to_text(&value))
	}
}

fn js_to_text(value: &JsValue) -> String {
	if let Some(text) = value.as_string() {
		return text;
	}
	if value.is_null() || value.is_undefined() {
		return String::new();
	}
	if let Some(number) = value.as_f64() {
		return number.to_string();
	}
	if let Some(flag) = value.as_bool() {
		return flag.to_string();
	}
	js_sys::JSON::stringify(value)
		.map(String::from)
		.unwrap_or_default()
}
