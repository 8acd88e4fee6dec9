// File: src/form.rs
// Purpose: In-memory form model consumed by validation and serialization

/// A single named form field with its current value
///
/// The `placeholder` mirrors the hint text a host UI displays inside an
/// unfilled input. A value equal to it is treated as if the field were empty.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, unique within its form
    pub name: String,
    /// Current value
    pub value: String,
    /// Hint text shown while the field is unfilled, if any
    pub placeholder: Option<String>,
}

impl Field {
    /// Create a field with a value and no placeholder
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            placeholder: None,
        }
    }

    /// Set the placeholder hint text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Check whether the value is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check whether the value equals the placeholder hint
    ///
    /// A field showing its untouched hint text carries no user input even
    /// though its value is non-empty.
    pub fn matches_placeholder(&self) -> bool {
        self.placeholder.as_deref() == Some(self.value.as_str())
    }
}

/// A named form: an ordered list of fields
///
/// Field order is preserved and drives both request-body serialization and
/// the order presenters report errors in. The form name namespaces generated
/// error-label ids.
#[derive(Debug, Clone, Default)]
pub struct Form {
    /// Form name, used to namespace error-label ids
    pub name: String,
    fields: Vec<Field>,
}

impl Form {
    /// Create an empty form
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (builder style)
    pub fn with_field(mut self, field: Field) -> Self {
        self.push(field);
        self
    }

    /// Append a field
    ///
    /// A field with a duplicate name replaces the existing one in place.
    pub fn push(&mut self, field: Field) {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == field.name) {
            *existing = field;
        } else {
            self.fields.push(field);
        }
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a mutable field by name
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Get a field's current value
    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Set a field's value; unknown names are ignored
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
        }
    }

    /// Iterate fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
