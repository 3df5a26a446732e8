use domain_types::errors;
use error_stack::Report;

pub fn missing_field_err(
    message: &'static str,
) -> Box<dyn Fn() -> Report<errors::ConnectorError> + 'static> {
    Box::new(move || {
        errors::ConnectorError::MissingRequiredField {
            field_name: message,
        }
        .into()
    })
}

/// Returns the value when it carries something other than whitespace.
pub fn non_blank(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}
