//! tform-elements - form-associated custom elements
//!
//! Two custom elements that take part in native `<form>` submission the same
//! way a native `<input>` does, through the browser's `ElementInternals`:
//!
//! - [`InputElement`] (`t-input`): renders a single `<input>` and mirrors its
//!   value into the element's form value.
//! - [`FormElement`] (`t-form`): embeds one `t-input`, re-exposes its `name`
//!   and `value`, and projects arbitrary light DOM children through a `<slot>`.
//!
//! ## Architecture
//!
//! ```text
//! keystroke ──► <input> "input" event ──► update_value(event)
//!                                            │  has_property(target, "value")?
//!                                            ▼
//!                              self.value = v; internals.set_form_value(v)
//!                                            │
//!                                            ▼
//!                               ElementHost re-renders + reflects
//! ```
//!
//! The components themselves are plain state structs with a `render` function
//! ([`FormAssociated`]). [`ElementHost`] drives their update cycle, [`ssr`]
//! renders them to HTML, and on `wasm32` the `browser` module registers them
//! with `customElements`.
//!
//! ## Example
//!
//! ```
//! use tform_elements::{ElementHost, InputElement, InputEvent, MemoryInternals};
//! use serde_json::json;
//!
//! let internals = MemoryInternals::new();
//! let mut host = ElementHost::new(InputElement::new(internals.clone()));
//! host.connect();
//!
//! let target = json!({ "value": "hello" });
//! host.dispatch(tform_elements::Handler::UpdateValue, &InputEvent::new(&target));
//!
//! assert_eq!(host.component().value(), Some("hello"));
//! assert_eq!(internals.form_value().as_deref(), Some("hello"));
//! ```

#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod guard;
pub mod host;
pub mod input;
pub mod internals;
pub mod ssr;
pub mod view;

mod attributes;
mod component;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use component::FormAssociated;
pub use config::ElementsConfig;
pub use error::{ElementError, Result};
pub use event::{EventType, Handler, InputEvent};
pub use form::FormElement;
pub use guard::{DynTarget, has_property, target_value};
pub use host::{AttributeChange, ElementHost, Phase, UpdateReport};
pub use input::InputElement;
pub use internals::{FormInternals, MemoryInternals};
pub use view::{ElementView, IntoView, View};
