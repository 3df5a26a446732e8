use common_utils::CustomResult;
use domain_types::{
    connector_flow::OperationData, connector_types::Payload, errors::ConnectorError,
    router_response_types::GatewayResponse, types::DecodeMode,
};

pub trait ConnectorCommon {
    /// Name of the connector, used in logs.
    fn id(&self) -> &'static str;

    fn decode_mode(&self) -> DecodeMode {
        DecodeMode::Lenient
    }
}

/// Protocol half of one operation: how the request body is built and how the
/// response text is read. Neither step touches the network.
pub trait ConnectorIntegration<Req>: ConnectorCommon + Send + Sync
where
    Req: OperationData,
{
    fn get_request_body(&self, req: &Req) -> CustomResult<Payload, ConnectorError>;

    fn handle_response(&self, body: &str) -> CustomResult<GatewayResponse, ConnectorError>;
}
