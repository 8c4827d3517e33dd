//! Attribute ↔ property conversion for the observed attributes.

/// Text of a string attribute; `None` once the attribute is removed.
pub(crate) fn string_from_attribute(value: Option<&str>) -> Option<String> {
	value.map(str::to_string)
}

/// A boolean attribute is `true` whenever it is present, whatever its text.
pub(crate) fn bool_from_attribute(value: Option<&str>) -> bool {
	value.is_some()
}

/// Reflected form of a boolean property: present and empty iff `true`.
pub(crate) fn bool_to_attribute(value: bool) -> Option<String> {
	value.then(String::new)
}

/// Stores `new` into `slot`, returning whether the value changed.
pub(crate) fn assign<T: PartialEq>(slot: &mut T, new: T) -> bool {
	if *slot == new {
		return false;
	}
	*slot = new;
	true
}
