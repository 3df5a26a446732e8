use std::sync::Arc;

use common_utils::CustomResult;
use domain_types::{connector_types::Payload, errors::ApiClientError};

/// The single network capability the adapter consumes.
///
/// An implementation posts `payload` form-encoded to the merchant handler over mutual
/// TLS and returns the raw response text. Non-2xx statuses and connection or TLS
/// failures are reported as [`ApiClientError`]. Implementations must be safe to share
/// between tasks.
#[async_trait::async_trait]
pub trait ConnectorTransport: Send + Sync {
    async fn send(&self, payload: Payload) -> CustomResult<String, ApiClientError>;
}

#[async_trait::async_trait]
impl<T> ConnectorTransport for Arc<T>
where
    T: ConnectorTransport + ?Sized,
{
    async fn send(&self, payload: Payload) -> CustomResult<String, ApiClientError> {
        (**self).send(payload).await
    }
}

#[async_trait::async_trait]
impl<T> ConnectorTransport for Box<T>
where
    T: ConnectorTransport + ?Sized,
{
    async fn send(&self, payload: Payload) -> CustomResult<String, ApiClientError> {
        (**self).send(payload).await
    }
}
