//! Host form field the widget publishes its value into.

/// Form field holding the submitted rating as text.
///
/// The widget reads it once when attaching, to pick up a pre-existing value,
/// and writes the one-decimal value after every change.
#[cfg_attr(test, mockall::automock)]
pub trait FormField {
    /// Returns the field's current text.
    fn read(&self) -> String;

    /// Replaces the field's text.
    fn write(&mut self, value: &str);
}

/// In-memory form field, standing in for a hidden form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenField {
    name: String,
    value: String,
}

impl HiddenField {
    /// Creates a field named `name` pre-populated with `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the field name used when the form is submitted.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FormField for HiddenField {
    fn read(&self) -> String {
        self.value.clone()
    }

    fn write(&mut self, value: &str) {
        value.clone_into(&mut self.value);
    }
}
