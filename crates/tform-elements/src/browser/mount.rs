//! Mounting a [`View`] into a shadow root and patching it in place.
//!
//! The element templates never change structure between renders, so an
//! update only touches attributes. A render with a different shape (tags,
//! text or listeners) is remounted from scratch.

use std::borrow::Cow;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::{ElementError, Result};
use crate::event::{EventType, Handler};
use crate::view::{ElementView, View};

/// DOM listener kept alive for as long as its element is mounted.
pub(crate) type Listener = Closure<dyn FnMut(web_sys::Event)>;

pub(crate) fn dom_error(err: wasm_bindgen::JsValue) -> ElementError {
	ElementError::Dom(format!("{err:?}"))
}

struct MountedElement {
	element: web_sys::Element,
	attrs: Vec<(String, String)>,
	handlers: Vec<(EventType, Handler)>,
	_listeners: Vec<Listener>,
}

impl MountedElement {
	fn patch_attributes(&mut self, view: &ElementView) -> Result<()> {
		let next: Vec<(String, String)> = view
			.attrs()
			.iter()
			.map(|(name, value)| (name.to_string(), value.to_string()))
			.collect();

		for (name, _) in &self.attrs {
			if !next.iter().any(|(n, _)| n == name) {
				self.element.remove_attribute(name).map_err(dom_error)?;
			}
		}
		for (name, value) in &next {
			if !self.attrs.iter().any(|(n, v)| n == name && v == value) {
				self.element.set_attribute(name, value).map_err(dom_error)?;
			}
		}
		self.attrs = next;
		Ok(())
	}
}

/// DOM nodes created for one render, in document order.
pub(crate) struct MountedView {
	shape: Vec<Cow<'static, str>>,
	roots: Vec<web_sys::Node>,
	elements: Vec<MountedElement>,
}

impl MountedView {
	/// Builds `view` under `parent`, asking `listen` for one closure per
	/// rendered listener.
	pub(crate) fn mount(
		view: &View,
		parent: &web_sys::Node,
		listen: &mut dyn FnMut(Handler) -> Listener,
	) -> Result<Self> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| ElementError::Dom("document not available".to_string()))?;

		let mut elements = Vec::new();
		let roots = build(view, &document, listen, &mut elements)?;
		for node in &roots {
			parent.append_child(node).map_err(dom_error)?;
		}

		Ok(Self {
			shape: view.shape(),
			roots,
			elements,
		})
	}

	/// Applies `view` in place. Returns `false` when its shape differs and the
	/// caller has to remount.
	pub(crate) fn patch(&mut self, view: &View) -> Result<bool> {
		if view.shape() != self.shape {
			return Ok(false);
		}
		let next = view.elements();
		if next.len() != self.elements.len()
			|| next
				.iter()
				.zip(&self.elements)
				.any(|(el, mounted)| el.listeners() != mounted.handlers.as_slice())
		{
			return Ok(false);
		}

		for (el, mounted) in next.into_iter().zip(self.elements.iter_mut()) {
			mounted.patch_attributes(el)?;
		}
		Ok(true)
	}

	/// Removes the mounted nodes from `parent`.
	pub(crate) fn unmount(self, parent: &web_sys::Node) -> Result<()> {
		for node in &self.roots {
			parent.remove_child(node).map_err(dom_error)?;
		}
		Ok(())
	}
}

fn build(
	view: &View,
	document: &web_sys::Document,
	listen: &mut dyn FnMut(Handler) -> Listener,
	elements: &mut Vec<MountedElement>,
) -> Result<Vec<web_sys::Node>> {
	match view {
		View::Element(el) => {
			let element = document
				.create_element(el.tag_name())
				.map_err(dom_error)?;
			for (name, value) in el.attrs() {
				element.set_attribute(name, value).map_err(dom_error)?;
			}

			let mut listeners = Vec::with_capacity(el.listeners().len());
			for (event_type, handler) in el.listeners() {
				let listener = listen(*handler);
				element
					.add_event_listener_with_callback(
						event_type.as_str(),
						listener.as_ref().unchecked_ref(),
					)
					.map_err(dom_error)?;
				listeners.push(listener);
			}

			elements.push(MountedElement {
				element: element.clone(),
				attrs: el
					.attrs()
					.iter()
					.map(|(name, value)| (name.to_string(), value.to_string()))
					.collect(),
				handlers: el.listeners().to_vec(),
				_listeners: listeners,
			});

			for child in el.child_views() {
				for node in build(child, document, listen, elements)? {
					element.append_child(&node).map_err(dom_error)?;
				}
			}

			let node: web_sys::Node = element.into();
			Ok(vec![node])
		}
		View::Text(text) => {
			let node: web_sys::Node = document.create_text_node(text).into();
			Ok(vec![node])
		}
		View::Fragment(children) => {
			let mut nodes = Vec::new();
			for child in children {
				nodes.extend(build(child, document, listen, elements)?);
			}
			Ok(nodes)
		}
		View::Empty => Ok(Vec::new()),
	}
}
