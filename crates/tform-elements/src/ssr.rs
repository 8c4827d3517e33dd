//! Server-side rendering with declarative shadow DOM.
//!
//! The shadow content goes into `<template shadowrootmode="open">`, so the
//! browser attaches it before any script runs; light DOM children follow the
//! template and are projected through the element's `<slot>`.
//!
//! ```
//! use tform_elements::{ElementHost, FormElement, MemoryInternals, ssr};
//!
//! let mut host = ElementHost::new(FormElement::new(MemoryInternals::new()));
//! host.update(|form| form.set_name("q"));
//!
//! let html = ssr::render_element(&host, "Search");
//! assert_eq!(
//!     html,
//!     "<t-form name=\"q\"><template shadowrootmode=\"open\">\
//!      <t-input name=\"q\"></t-input><slot></slot></template>Search</t-form>"
//! );
//! ```

use crate::component::FormAssociated;
use crate::host::ElementHost;
use crate::view::{IntoView, push_attributes};

/// Renders `host` and its light DOM `children` to an HTML string.
///
/// Uses the current component state even when the host has not updated yet;
/// the host itself is left untouched.
pub fn render_element<C: FormAssociated>(host: &ElementHost<C>, children: impl IntoView) -> String {
	let component = host.component();
	let tag = component.tag_name();
	let attributes = host.ssr_attributes();

	let mut output = String::new();
	output.push('<');
	output.push_str(tag);
	push_attributes(
		&mut output,
		attributes.iter().map(|(name, value)| (name.as_str(), value.as_str())),
	);
	output.push('>');
	output.push_str("<template shadowrootmode=\"open\">");
	output.push_str(&component.render().render_to_string());
	output.push_str("</template>");
	output.push_str(&children.into_view().render_to_string());
	output.push_str("</");
	output.push_str(tag);
	output.push('>');
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::input::InputElement;
	use crate::internals::MemoryInternals;
	use crate::view::{ElementView, View};
	use rstest::rstest;

	#[rstest]
	fn test_render_input_element() {
		let mut host = ElementHost::new(InputElement::new(MemoryInternals::new()));
		host.update(|input| {
			input.set_name("email");
			input.set_value(Some("a@b.c".to_string()));
		});

		assert_eq!(
			render_element(&host, ()),
			"<t-input required=\"\"><template shadowrootmode=\"open\">\
			 <input name=\"email\" required=\"true\" value=\"a@b.c\" /></template></t-input>"
		);
	}

	#[rstest]
	fn test_render_keeps_host_attributes_sorted() {
		let mut host = ElementHost::new(InputElement::new(MemoryInternals::new()));
		host.set_attribute("id", "x");
		host.set_attribute("form", "signup");

		let html = render_element(&host, ());
		assert!(html.starts_with("<t-input form=\"signup\" id=\"x\" required=\"\">"));
	}

	#[rstest]
	fn test_render_light_children_after_template() {
		let host = ElementHost::new(crate::form::FormElement::new(MemoryInternals::new()));
		let children = View::fragment([
			ElementView::new("button").attr("type", "submit").child("Go"),
		]);

		let html = render_element(&host, children);
		assert!(html.ends_with("</template><button type=\"submit\">Go</button></t-form>"));
	}

	#[rstest]
	fn test_render_does_not_trigger_first_update() {
		let internals = MemoryInternals::new();
		let host = ElementHost::new(crate::form::FormElement::new(internals.clone()));
		render_element(&host, ());
		assert!(!host.has_updated());
		assert_eq!(internals.call_count(), 0);
	}
}
