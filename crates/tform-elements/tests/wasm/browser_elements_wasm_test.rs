//! Browser tests for the registered custom elements
//!
//! Run with `wasm-pack test --headless --chrome crates/tform-elements`.

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use tform_elements::browser::define_elements;
use tform_elements::{ElementsConfig, target_value};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn mounted(tag: &str) -> web_sys::Element {
	define_elements(&ElementsConfig::default()).unwrap();
	let element = document().create_element(tag).unwrap();
	document().body().unwrap().append_child(&element).unwrap();
	element
}

fn shadow_child(host: &web_sys::Element, selector: &str) -> web_sys::Element {
	host.shadow_root()
		.unwrap()
		.query_selector(selector)
		.unwrap()
		.unwrap()
}

fn property(target: &JsValue, name: &str) -> Option<String> {
	Reflect::get(target, &JsValue::from_str(name)).unwrap().as_string()
}

fn input_event() -> web_sys::Event {
	web_sys::Event::new("input").unwrap()
}

fn bubbling_input_event() -> web_sys::Event {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	web_sys::Event::new_with_event_init_dict("input", &init).unwrap()
}

fn set_property(target: &JsValue, name: &str, value: &str) {
	Reflect::set(target, &JsValue::from_str(name), &JsValue::from_str(value)).unwrap();
}

/// Wraps `children` in a `<form>` attached to the document.
fn form_around(children: &[&web_sys::Element]) -> web_sys::HtmlFormElement {
	let form: web_sys::HtmlFormElement = document()
		.create_element("form")
		.unwrap()
		.dyn_into()
		.unwrap();
	for child in children {
		form.append_child(child).unwrap();
	}
	document().body().unwrap().append_child(&form).unwrap();
	form
}

fn submitted(form: &web_sys::HtmlFormElement, name: &str) -> Option<String> {
	web_sys::FormData::new_with_form(form).unwrap().get(name).as_string()
}

#[wasm_bindgen_test]
fn test_define_twice_is_skipped() {
	define_elements(&ElementsConfig::default()).unwrap();
	let host = mounted("t-input");
	assert!(host.shadow_root().is_some());
	host.remove();
}

#[wasm_bindgen_test]
fn test_invalid_config_rejected() {
	assert!(define_elements(&ElementsConfig::default().with_form_tag("form")).is_err());
}

#[wasm_bindgen_test]
fn test_input_renders_and_reflects() {
	let host = mounted("t-input");
	host.set_attribute("name", "email").unwrap();

	let control = shadow_child(&host, "input");
	assert_eq!(control.get_attribute("name").as_deref(), Some("email"));
	assert_eq!(control.get_attribute("required").as_deref(), Some("true"));
	assert_eq!(host.get_attribute("required").as_deref(), Some(""));

	host.remove_attribute("required").unwrap();
	let control = shadow_child(&host, "input");
	assert_eq!(control.get_attribute("required").as_deref(), Some("false"));
	host.remove();
}

#[wasm_bindgen_test]
fn test_input_event_updates_value() {
	let host = mounted("t-input");
	let control = shadow_child(&host, "input");

	Reflect::set(&control, &JsValue::from_str("value"), &JsValue::from_str("hello")).unwrap();
	control.dispatch_event(&input_event()).unwrap();

	assert_eq!(property(&host, "value").as_deref(), Some("hello"));
	let control = shadow_child(&host, "input");
	assert_eq!(control.get_attribute("value").as_deref(), Some("hello"));
	host.remove();
}

#[wasm_bindgen_test]
fn test_form_tracks_embedded_input() {
	let host = mounted("t-form");
	host.set_attribute("name", "q").unwrap();

	let inner = shadow_child(&host, "t-input");
	assert_eq!(inner.get_attribute("name").as_deref(), Some("q"));

	Reflect::set(&inner, &JsValue::from_str("value"), &JsValue::from_str("nested")).unwrap();
	inner.dispatch_event(&input_event()).unwrap();

	assert_eq!(property(&host, "value").as_deref(), Some("nested"));
	host.remove();
}

#[wasm_bindgen_test]
fn test_removed_name_dropped_from_control() {
	let host = mounted("t-input");
	host.set_attribute("name", "email").unwrap();
	host.remove_attribute("name").unwrap();

	let control = shadow_child(&host, "input");
	assert_eq!(control.get_attribute("name"), None);
	host.remove();
}

#[wasm_bindgen_test]
fn test_form_first_render_submits_empty_value() {
	define_elements(&ElementsConfig::default()).unwrap();
	let host = document().create_element("t-form").unwrap();
	host.set_attribute("name", "query").unwrap();

	let form = form_around(&[&host]);

	assert_eq!(submitted(&form, "query").as_deref(), Some(""));
	form.remove();
}

#[wasm_bindgen_test]
fn test_input_preset_value_submitted() {
	define_elements(&ElementsConfig::default()).unwrap();
	let preset = document().create_element("t-input").unwrap();
	preset.set_attribute("name", "email").unwrap();
	preset.set_attribute("value", "a@b.c").unwrap();
	let blank = document().create_element("t-input").unwrap();
	blank.set_attribute("name", "blank").unwrap();

	let form = form_around(&[&preset, &blank]);

	assert_eq!(submitted(&form, "email").as_deref(), Some("a@b.c"));
	assert_eq!(submitted(&form, "blank"), None);
	form.remove();
}

#[wasm_bindgen_test]
fn test_value_assigned_before_definition_kept() {
	let config = ElementsConfig::default()
		.with_form_tag("early-form")
		.with_input_tag("early-input");
	let input = document().create_element("early-input").unwrap();
	input.set_attribute("name", "a").unwrap();
	set_property(&input, "value", "typed");
	let wrapper = document().create_element("early-form").unwrap();
	wrapper.set_attribute("name", "b").unwrap();
	set_property(&wrapper, "value", "wrapped");
	let form = form_around(&[&input, &wrapper]);

	define_elements(&config).unwrap();

	assert_eq!(property(&input, "value").as_deref(), Some("typed"));
	assert_eq!(submitted(&form, "a").as_deref(), Some("typed"));
	assert_eq!(property(&wrapper, "value").as_deref(), Some("wrapped"));
	assert_eq!(submitted(&form, "b").as_deref(), Some("wrapped"));
	form.remove();
}

#[wasm_bindgen_test]
fn test_event_target_without_value_ignored() {
	define_elements(&ElementsConfig::default()).unwrap();
	let host = document().create_element("t-form").unwrap();
	host.set_attribute("name", "q").unwrap();
	set_property(&host, "value", "kept");
	let form = form_around(&[&host]);

	let inner = shadow_child(&host, "t-input");
	let stray = document().create_element("span").unwrap();
	inner.append_child(&stray).unwrap();
	stray.dispatch_event(&bubbling_input_event()).unwrap();

	assert_eq!(property(&host, "value").as_deref(), Some("kept"));
	assert_eq!(submitted(&form, "q").as_deref(), Some("kept"));
	form.remove();
}

#[wasm_bindgen_test]
fn test_guard_on_browser_values() {
	assert_eq!(target_value(Some(&JsValue::NULL)), None);
	assert_eq!(target_value(Some(&JsValue::from_str("value"))), None);
	assert_eq!(target_value(Some(&JsValue::from(js_sys::Object::new()))), None);

	let own = JsValue::from(js_sys::Object::new());
	set_property(&own, "value", "own");
	assert_eq!(target_value(Some(&own)).as_deref(), Some("own"));

	// `value` lives on HTMLInputElement.prototype, not on the instance.
	let native = JsValue::from(document().create_element("input").unwrap());
	set_property(&native, "value", "typed");
	assert_eq!(target_value(Some(&native)).as_deref(), Some("typed"));
}
