use common_utils::CustomResult;
use connector_integration::PashaBank;
use domain_types::{
    connector_flow::OperationData,
    errors::{ApiClientError, ConnectorError},
    router_request_types::{
        DmsTransactionData, RecurringPaymentDeletionData, RecurringPaymentExecutionData,
        RecurringPaymentRegistrationData, RefundData, ReversalData, StartCardSmsTransactionData,
        StartDmsAuthorizationData, StartSmsTransactionData, TransactionResultData,
    },
    router_response_types::GatewayResponse,
    types::GatewayConfig,
};
use external_services::{execute_connector_processing_step, HttpTransport};
use interfaces::{connector_integration::ConnectorIntegration, connector_types::ConnectorTransport};

use crate::logger::instrument;

/// One method per merchant handler operation.
///
/// Every call builds the payload, performs exactly one `send` on the transport and
/// decodes the response text. A payload that fails to build is never sent. The client
/// keeps no state between calls and can be shared between tasks.
#[derive(Clone, Debug)]
pub struct PaymentClient<T> {
    connector: PashaBank,
    transport: T,
}

impl PaymentClient<HttpTransport> {
    /// Client talking to the gateway described by `config` over mutual TLS.
    pub fn from_config(config: &GatewayConfig) -> CustomResult<Self, ApiClientError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_connector(
            PashaBank::with_decode_mode(config.response_mode),
            transport,
        ))
    }
}

impl<T> PaymentClient<T>
where
    T: ConnectorTransport,
{
    pub fn new(transport: T) -> Self {
        Self::with_connector(PashaBank::new(), transport)
    }

    pub fn with_connector(connector: PashaBank, transport: T) -> Self {
        Self {
            connector,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs any operation the connector supports.
    pub async fn execute<Req>(&self, req: &Req) -> CustomResult<GatewayResponse, ConnectorError>
    where
        PashaBank: ConnectorIntegration<Req>,
        Req: OperationData + Sync,
    {
        execute_connector_processing_step(&self.connector, &self.transport, req).await
    }

    #[instrument(skip_all)]
    pub async fn start_sms_transaction(
        &self,
        data: &StartSmsTransactionData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all)]
    pub async fn start_card_sms_transaction(
        &self,
        data: &StartCardSmsTransactionData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all)]
    pub async fn start_dms_authorization(
        &self,
        data: &StartDmsAuthorizationData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(trans_id = %data.trans_id))]
    pub async fn make_dms_transaction(
        &self,
        data: &DmsTransactionData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(trans_id = %data.trans_id))]
    pub async fn reverse(&self, data: &ReversalData) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(trans_id = %data.trans_id))]
    pub async fn refund(&self, data: &RefundData) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(biller_client_id = %data.biller_client_id))]
    pub async fn register_recurring_payment(
        &self,
        data: &RecurringPaymentRegistrationData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(biller_client_id = %data.biller_client_id))]
    pub async fn execute_recurring_payment(
        &self,
        data: &RecurringPaymentExecutionData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(biller_client_id = %data.biller_client_id))]
    pub async fn delete_recurring_payment(
        &self,
        data: &RecurringPaymentDeletionData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }

    #[instrument(skip_all, fields(trans_id = %data.trans_id))]
    pub async fn get_transaction_result(
        &self,
        data: &TransactionResultData,
    ) -> CustomResult<GatewayResponse, ConnectorError> {
        self.execute(data).await
    }
}
