use domain_types::errors::{ApiClientError, ConnectorError};

/// Allows [error_stack::Report] to change between error contexts
/// using the dependent [ErrorSwitch] trait to define relations & mappings between traits
pub trait ReportSwitchExt<T, U> {
    /// Switch to the intended report by calling switch
    /// requires error switch to be already implemented on the error type
    fn switch(self) -> Result<T, error_stack::Report<U>>;
}

impl<T, U, V> ReportSwitchExt<T, U> for Result<T, error_stack::Report<V>>
where
    V: ErrorSwitch<U> + error_stack::Context,
    U: error_stack::Context,
{
    #[track_caller]
    fn switch(self) -> Result<T, error_stack::Report<U>> {
        self.map_err(|report| {
            let context = report.current_context().switch();
            report.change_context(context)
        })
    }
}

/// Maps one error context onto the context it escalates into.
pub trait ErrorSwitch<T> {
    fn switch(&self) -> T;
}

/// Alternative to [ErrorSwitch], implemented on the target type.
pub trait ErrorSwitchFrom<T> {
    fn switch_from(error: &T) -> Self;
}

impl<T, S> ErrorSwitch<T> for S
where
    T: ErrorSwitchFrom<Self>,
{
    fn switch(&self) -> T {
        T::switch_from(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Failed to set up logging: {0}")]
    LoggerError(#[from] tracing_subscriber::util::TryInitError),
}

/// Outcome categories of one command line invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid client configuration")]
    Configuration,
    #[error("Gateway could not be reached")]
    Transport,
    #[error("Gateway request could not be built or its response could not be read")]
    Operation,
}

impl ClientError {
    /// Process exit code reported for this error.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Operation => 1,
            Self::Configuration => 2,
            Self::Transport => 3,
        }
    }
}

impl ErrorSwitchFrom<ConfigurationError> for ClientError {
    fn switch_from(_: &ConfigurationError) -> Self {
        Self::Configuration
    }
}

impl ErrorSwitchFrom<ApiClientError> for ClientError {
    fn switch_from(error: &ApiClientError) -> Self {
        match error {
            ApiClientError::ClientConstructionFailed
            | ApiClientError::CertificateDecodeFailed
            | ApiClientError::UrlEncodingFailed => Self::Configuration,
            _ => Self::Transport,
        }
    }
}

impl ErrorSwitchFrom<ConnectorError> for ClientError {
    fn switch_from(error: &ConnectorError) -> Self {
        match error {
            ConnectorError::ProcessingStepFailed => Self::Transport,
            _ => Self::Operation,
        }
    }
}
