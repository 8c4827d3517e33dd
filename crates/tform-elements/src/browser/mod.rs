//! Registers the elements with the browser's `customElements` registry.
//!
//! A small JavaScript class per tag forwards the lifecycle callbacks and the
//! `value` property to an [`ElementHandle`]:
//!
//! ```text
//! constructor()               ─► factory(this, attachInternals(), shadowRoot)
//! connectedCallback()         ─► handle.connected()
//! disconnectedCallback()      ─► handle.disconnected()
//! attributeChangedCallback()  ─► handle.attribute_changed(name, value)
//! get value / set value       ─► handle.value() / handle.set_value(v)
//! ```

mod element;
mod internals;
mod mount;
mod target;

pub use element::ElementHandle;
pub use internals::BrowserInternals;

use wasm_bindgen::prelude::*;

use crate::component::FormAssociated;
use crate::config::ElementsConfig;
use crate::error::Result;
use crate::form::FormElement;
use crate::input::InputElement;
use element::{BrowserElement, ValueProperty};
use mount::dom_error;

#[wasm_bindgen(inline_js = r#"
export function defineFormAssociated(tag, formAssociated, observed, factory) {
	if (customElements.get(tag)) {
		return false;
	}
	class FormAssociatedElement extends HTMLElement {
		static get formAssociated() {
			return formAssociated;
		}
		static get observedAttributes() {
			return observed;
		}
		constructor() {
			super();
			const internals = this.attachInternals();
			const root = this.shadowRoot ?? this.attachShadow({ mode: 'open' });
			this.__tform = factory(this, internals, root);
			// A `value` assigned before the upgrade shadows the accessor below.
			if (Object.prototype.hasOwnProperty.call(this, 'value')) {
				const preset = this.value;
				delete this.value;
				this.value = preset;
			}
		}
		get value() {
			return this.__tform.value();
		}
		set value(next) {
			this.__tform.set_value(next == null ? undefined : String(next));
		}
		connectedCallback() {
			this.__tform.connected();
		}
		disconnectedCallback() {
			this.__tform.disconnected();
		}
		attributeChangedCallback(name, _previous, next) {
			this.__tform.attribute_changed(name, next);
		}
	}
	customElements.define(tag, FormAssociatedElement);
	return true;
}
"#)]
extern "C" {
	#[wasm_bindgen(catch, js_name = defineFormAssociated)]
	fn define_form_associated(
		tag: &str,
		form_associated: bool,
		observed: &js_sys::Array,
		factory: &js_sys::Function,
	) -> std::result::Result<bool, JsValue>;
}

type Factory = Closure<dyn FnMut(web_sys::HtmlElement, JsValue, web_sys::ShadowRoot) -> JsValue>;

/// Defines `tag` backed by components built with `make`. Returns `false`
/// when the tag was already defined.
fn define<C, F>(tag: &str, make: F) -> Result<bool>
where
	C: FormAssociated + ValueProperty,
	F: Fn(BrowserInternals) -> C + 'static,
{
	let factory = Factory::new(move |element, internals, root| {
		let component = make(BrowserInternals::from_js(internals));
		let inner = BrowserElement::new_shared(component, element, root);
		JsValue::from(ElementHandle::new(inner))
	});
	let observed: js_sys::Array = C::observed_attributes()
		.iter()
		.map(|name| JsValue::from_str(name))
		.collect();

	let defined = define_form_associated(
		tag,
		C::FORM_ASSOCIATED,
		&observed,
		factory.as_ref().unchecked_ref(),
	)
	.map_err(dom_error)?;

	if defined {
		// The registry keeps calling the factory for the page's lifetime.
		factory.forget();
		debug_log!("defined <{}> as {}", tag, C::component_name());
	} else {
		warn_log!("<{}> is already defined, skipping", tag);
	}
	Ok(defined)
}

/// Defines both elements under the tags named in `config`.
///
/// The input element is defined first so a form element rendered right away
/// finds its inner control upgraded.
pub fn define_elements(config: &ElementsConfig) -> Result<()> {
	config.validate()?;

	let input_tag = config.input_tag.clone();
	define(&config.input_tag, move |internals| {
		InputElement::new(internals).with_tag(input_tag.clone())
	})?;

	let form_config = config.clone();
	define(&config.form_tag, move |internals| {
		FormElement::new(internals).with_config(&form_config)
	})?;
	Ok(())
}

/// JavaScript entry point. `config` is optional JSON such as
/// `{"form_tag": "my-form", "input_tag": "my-input"}`.
#[wasm_bindgen(js_name = defineElements)]
pub fn define_elements_js(config: Option<String>) -> std::result::Result<(), JsValue> {
	let config = match config {
		Some(json) => ElementsConfig::from_json(&json),
		None => Ok(ElementsConfig::default()),
	}
	.map_err(|err| JsValue::from_str(&err.to_string()))?;

	define_elements(&config).map_err(|err| {
		error_log!("defineElements failed: {}", err);
		JsValue::from_str(&err.to_string())
	})
}
