//! Render output of the elements.
//!
//! A component's `render` returns a [`View`]; the host either serializes it
//! ([`View::render_to_string`]) or mounts and patches it into a shadow root.

use std::borrow::Cow;

use crate::event::{EventType, Handler};

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Multiple views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// A DOM element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	is_void: bool,
	listeners: Vec<(EventType, Handler)>,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			listeners: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds an attribute only when `value` is defined.
	///
	/// `None` omits the attribute entirely instead of rendering it as text.
	pub fn attr_if_defined<V>(self, name: impl Into<Cow<'static, str>>, value: Option<V>) -> Self
	where
		V: Into<Cow<'static, str>>,
	{
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Routes `event_type` on this element to `handler`.
	pub fn on(mut self, event_type: EventType, handler: Handler) -> Self {
		self.listeners.push((event_type, handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in render order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Looks up an attribute value by name.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(attr, _)| attr == name)
			.map(|(_, value)| &**value)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the listeners attached to this element.
	pub fn listeners(&self) -> &[(EventType, Handler)] {
		&self.listeners
	}
}

impl View {
	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// A `<slot>` where the consumer's light DOM children are projected.
	pub fn slot() -> ElementView {
		ElementView::new("slot")
	}

	/// All element views in document order.
	pub fn elements(&self) -> Vec<&ElementView> {
		let mut out = Vec::new();
		self.collect_elements(&mut out);
		out
	}

	fn collect_elements<'a>(&'a self, out: &mut Vec<&'a ElementView>) {
		match self {
			View::Element(el) => {
				out.push(el);
				for child in &el.children {
					child.collect_elements(out);
				}
			}
			View::Fragment(children) => {
				for child in children {
					child.collect_elements(out);
				}
			}
			View::Text(_) | View::Empty => {}
		}
	}

	/// The first element with the given tag, in document order.
	pub fn find_element(&self, tag: &str) -> Option<&ElementView> {
		self.elements().into_iter().find(|el| el.tag_name() == tag)
	}

	/// Tags and text nodes in document order.
	///
	/// Two views with the same shape differ only in attributes.
	pub fn shape(&self) -> Vec<Cow<'static, str>> {
		let mut out = Vec::new();
		self.collect_shape(&mut out);
		out
	}

	fn collect_shape(&self, out: &mut Vec<Cow<'static, str>>) {
		match self {
			View::Element(el) => {
				out.push(el.tag.clone());
				for child in &el.children {
					child.collect_shape(out);
				}
				out.push(Cow::Borrowed("/"));
			}
			View::Text(text) => out.push(Cow::Owned(format!("#{text}"))),
			View::Fragment(children) => {
				for child in children {
					child.collect_shape(out);
				}
			}
			View::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				push_attributes(output, el.attrs().iter().map(|(n, v)| (&**n, &**v)));

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape::encode_text(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

pub(crate) fn push_attributes<'a>(
	output: &mut String,
	attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
	for (name, value) in attrs {
		output.push(' ');
		output.push_str(name);
		output.push_str("=\"");
		output.push_str(&html_escape::encode_double_quoted_attribute(value));
		output.push('"');
	}
}

/// Types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}
