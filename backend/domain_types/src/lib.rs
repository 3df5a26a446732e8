pub mod connector_flow;
pub mod connector_types;
pub mod errors;
pub mod router_request_types;
pub mod router_response_types;
pub mod types;
