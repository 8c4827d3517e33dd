//! Browser side of one custom element instance.
//!
//! Every callback borrows the element's state, runs the host, then releases
//! the borrow before writing reflected attributes back to the DOM. Those
//! writes re-enter through `attributeChangedCallback` and find the property
//! already up to date.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

use super::mount::{Listener, MountedView, dom_error};
use crate::component::FormAssociated;
use crate::error::Result;
use crate::event::{Handler, InputEvent};
use crate::form::FormElement;
use crate::guard::DynTarget;
use crate::host::{AttributeChange, ElementHost, UpdateReport};
use crate::input::InputElement;

/// Access to the `value` property the custom element exposes to scripts.
pub(crate) trait ValueProperty {
	fn value_property(&self) -> Option<String>;
	fn set_value_property(&mut self, value: Option<String>);
}

impl ValueProperty for InputElement {
	fn value_property(&self) -> Option<String> {
		self.value().map(str::to_string)
	}

	fn set_value_property(&mut self, value: Option<String>) {
		self.set_value(value);
	}
}

impl ValueProperty for FormElement {
	fn value_property(&self) -> Option<String> {
		Some(self.value().to_string())
	}

	fn set_value_property(&mut self, value: Option<String>) {
		self.set_value(value.unwrap_or_default());
	}
}

pub(crate) struct BrowserElement<C> {
	host: ElementHost<C>,
	element: web_sys::HtmlElement,
	root: web_sys::ShadowRoot,
	mounted: Option<MountedView>,
	self_ref: Weak<RefCell<BrowserElement<C>>>,
}

impl<C> BrowserElement<C>
where
	C: FormAssociated + ValueProperty,
{
	pub(crate) fn new_shared(
		component: C,
		element: web_sys::HtmlElement,
		root: web_sys::ShadowRoot,
	) -> Rc<RefCell<Self>> {
		Rc::new_cyclic(|weak| {
			RefCell::new(Self {
				host: ElementHost::new(component),
				element,
				root,
				mounted: None,
				self_ref: weak.clone(),
			})
		})
	}

	fn sync_dom(&mut self) -> Result<()> {
		let Some(view) = self.host.rendered().cloned() else {
			return Ok(());
		};

		if let Some(mounted) = self.mounted.as_mut() {
			if mounted.patch(&view)? {
				return Ok(());
			}
		}
		match self.mounted.take() {
			Some(old) => old.unmount(&self.root)?,
			// Drops content a declarative shadow root brought along.
			None => self.root.set_text_content(None),
		}

		let weak = self.self_ref.clone();
		let mut listen = move |handler: Handler| listener(weak.clone(), handler);
		self.mounted = Some(MountedView::mount(&view, &self.root, &mut listen)?);
		Ok(())
	}
}

fn listener<C>(weak: Weak<RefCell<BrowserElement<C>>>, handler: Handler) -> Listener
where
	C: FormAssociated + ValueProperty,
{
	Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
		if let Some(cell) = weak.upgrade() {
			cell.handle_event(handler, &event);
		}
	})
}

fn with_host<C, R>(
	cell: &RefCell<BrowserElement<C>>,
	f: impl FnOnce(&mut ElementHost<C>) -> Option<R>,
) -> Option<R>
where
	C: FormAssociated,
{
	match cell.try_borrow_mut() {
		Ok(mut this) => f(&mut this.host),
		Err(_) => {
			warn_log!("<{}> re-entrant callback ignored", C::component_name());
			None
		}
	}
}

fn reflect(element: &web_sys::HtmlElement, change: &AttributeChange) {
	let result = match &change.value {
		Some(value) => element.set_attribute(change.name, value),
		None => element.remove_attribute(change.name),
	};
	if let Err(err) = result.map_err(dom_error) {
		error_log!("failed to reflect `{}`: {}", change.name, err);
	}
}

fn after_update<C>(cell: &RefCell<BrowserElement<C>>, report: Option<UpdateReport>)
where
	C: FormAssociated + ValueProperty,
{
	let Some(report) = report else {
		return;
	};
	let element = match cell.try_borrow_mut() {
		Ok(mut this) => {
			if let Err(err) = this.sync_dom() {
				error_log!("<{}> render failed: {}", this.host.component().tag_name(), err);
			}
			this.element.clone()
		}
		Err(_) => return,
	};
	for change in &report.reflected {
		reflect(&element, change);
	}
}

/// Callbacks the JavaScript element class forwards to Rust.
pub(crate) trait HostedElement {
	fn connected(&self);
	fn disconnected(&self);
	fn attribute_changed(&self, name: &str, value: Option<&str>);
	fn value(&self) -> Option<String>;
	fn set_value(&self, value: Option<String>);
	fn handle_event(&self, handler: Handler, event: &web_sys::Event);
}

impl<C> HostedElement for RefCell<BrowserElement<C>>
where
	C: FormAssociated + ValueProperty,
{
	fn connected(&self) {
		let report = with_host(self, |host| host.connect());
		after_update(self, report);
	}

	fn disconnected(&self) {
		with_host(self, |host| {
			host.disconnect();
			None::<()>
		});
	}

	fn attribute_changed(&self, name: &str, value: Option<&str>) {
		let report = with_host(self, |host| host.attribute_changed(name, value));
		after_update(self, report);
	}

	fn value(&self) -> Option<String> {
		self.try_borrow()
			.ok()
			.and_then(|this| this.host.component().value_property())
	}

	fn set_value(&self, value: Option<String>) {
		let report = with_host(self, |host| host.update(|c| c.set_value_property(value)));
		after_update(self, report);
	}

	fn handle_event(&self, handler: Handler, event: &web_sys::Event) {
		let target: Option<JsValue> = event.target().map(JsValue::from);
		let target = target.as_ref().map(|t| t as &dyn DynTarget);
		let report = with_host(self, |host| host.dispatch(handler, &InputEvent::from_target(target)));
		after_update(self, report);
	}
}

/// Rust state attached to a defined element, stored on the JavaScript
/// instance.
#[wasm_bindgen]
pub struct ElementHandle {
	inner: Rc<dyn HostedElement>,
}

impl ElementHandle {
	pub(crate) fn new(inner: Rc<dyn HostedElement>) -> Self {
		Self { inner }
	}
}

#[wasm_bindgen]
impl ElementHandle {
	/// `connectedCallback`
	pub fn connected(&self) {
		self.inner.connected();
	}

	/// `disconnectedCallback`
	pub fn disconnected(&self) {
		self.inner.disconnected();
	}

	/// `attributeChangedCallback`, `value` is `null` on removal.
	pub fn attribute_changed(&self, name: String, value: Option<String>) {
		self.inner.attribute_changed(&name, value.as_deref());
	}

	/// Getter behind the element's `value` property.
	pub fn value(&self) -> Option<String> {
		self.inner.value()
	}

	/// Setter behind the element's `value` property.
	pub fn set_value(&self, value: Option<String>) {
		self.inner.set_value(value);
	}
}
