//! Logging macros shared by the elements.
//!
//! | Macro | WASM | Native |
//! |-------|------|--------|
//! | `debug_log!` | `console.debug` (debug builds + `debug-hooks`) | `tracing::debug!` |
//! | `warn_log!` | `console.warn` (debug builds) | `tracing::warn!` |
//! | `error_log!` | `console.error` (debug builds) | `tracing::error!` |
//!
//! Messages are prefixed with `[tform]` on the console; on native targets the
//! prefix is the `tform_elements` tracing target.

#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!("[tform] {}", format!($($arg)*)).into());
	}};
}

#[cfg(all(target_arch = "wasm32", not(all(debug_assertions, feature = "debug-hooks"))))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		::tracing::debug!(target: "tform_elements", $($arg)*);
	}};
}

#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!("[tform] {}", format!($($arg)*)).into());
	}};
}

#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		::tracing::warn!(target: "tform_elements", $($arg)*);
	}};
}

#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!("[tform] {}", format!($($arg)*)).into());
	}};
}

#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		::tracing::error!(target: "tform_elements", $($arg)*);
	}};
}
