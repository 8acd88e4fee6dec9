// File: src/request.rs
// Purpose: Form serialization into a percent-encoded request body

use crate::form::Form;

/// Serialize a form into a `key=value&key=value` request body
///
/// Both names and values are percent-encoded; pairs appear in field order.
/// Independent of validation: every field is included, valid or not.
pub fn request_body(form: &Form) -> String {
    form.fields()
        .map(|field| {
            format!(
                "{}={}",
                urlencoding::encode(&field.name),
                urlencoding::encode(&field.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
