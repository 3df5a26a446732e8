pub mod connector_integration;
pub mod connector_types;
