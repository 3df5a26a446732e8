pub mod constants;
pub mod transformers;


use domain_types::{
    router_request_types::{
        DmsTransactionData, RecurringPaymentDeletionData, RecurringPaymentExecutionData,
        RecurringPaymentRegistrationData, RefundData, ReversalData, StartCardSmsTransactionData,
        StartDmsAuthorizationData, StartSmsTransactionData, TransactionResultData,
    },
    types::DecodeMode,
};
use interfaces::connector_integration::ConnectorCommon;

use super::macros;
pub use transformers::{parse_response, PashaBankPayloadBuilder, PashaBankRequest};

/// Protocol layer of the PASHA Bank e-commerce merchant handler.
///
/// Holds no per-call state, one value can serve concurrent requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PashaBank {
    decode_mode: DecodeMode,
}

impl PashaBank {
    pub const fn new() -> Self {
        Self {
            decode_mode: DecodeMode::Lenient,
        }
    }

    pub const fn with_decode_mode(decode_mode: DecodeMode) -> Self {
        Self { decode_mode }
    }
}

impl ConnectorCommon for PashaBank {
    fn id(&self) -> &'static str {
        "pashabank"
    }

    fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }
}

macros::impl_connector_integration!(
    connector: PashaBank,
    request_body: PashaBankRequest,
    response_parser: parse_response,
    flows: [
        StartSmsTransactionData,
        StartCardSmsTransactionData,
        StartDmsAuthorizationData,
        DmsTransactionData,
        ReversalData,
        RefundData,
        RecurringPaymentRegistrationData,
        RecurringPaymentExecutionData,
        RecurringPaymentDeletionData,
        TransactionResultData,
    ]
);
