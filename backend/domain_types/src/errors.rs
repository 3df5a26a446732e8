use crate::connector_flow::Operation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Field `{field_name}` is not accepted by the `{operation}` command")]
    UnexpectedField {
        field_name: &'static str,
        operation: Operation,
    },
    #[error("Failed to execute a processing step")]
    ProcessingStepFailed,
    #[error("Response line {line_number} has no `Key: Value` separator: {line:?}")]
    MalformedResponseLine { line_number: usize, line: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiClientError {
    #[error("Failed to construct API client")]
    ClientConstructionFailed,
    #[error("Failed to load or decode the client certificate")]
    CertificateDecodeFailed,
    #[error("URL encoding of request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to connector: {0}")]
    RequestNotSent(String),
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    #[error("Server responded with unexpected status code {status_code}")]
    UnexpectedServerResponse { status_code: u16 },
}
