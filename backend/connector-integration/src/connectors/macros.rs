/// Implements `ConnectorIntegration` for each listed request type by converting it
/// into the connector's request body and decoding responses with its parser.
macro_rules! impl_connector_integration {
    (
        connector: $connector:ty,
        request_body: $request_body:ident,
        response_parser: $parser:path,
        flows: [$($flow_request:ty),+ $(,)?]
    ) => {
        $(
            impl interfaces::connector_integration::ConnectorIntegration<$flow_request> for $connector {
                fn get_request_body(
                    &self,
                    req: &$flow_request,
                ) -> common_utils::CustomResult<
                    domain_types::connector_types::Payload,
                    domain_types::errors::ConnectorError,
                > {
                    $request_body::try_from(req).map($request_body::into_payload)
                }

                fn handle_response(
                    &self,
                    body: &str,
                ) -> common_utils::CustomResult<
                    domain_types::router_response_types::GatewayResponse,
                    domain_types::errors::ConnectorError,
                > {
                    $parser(body, interfaces::connector_integration::ConnectorCommon::decode_mode(self))
                }
            }
        )+
    };
}

pub(crate) use impl_connector_integration;
