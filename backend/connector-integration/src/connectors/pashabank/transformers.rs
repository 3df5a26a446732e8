use common_enums::Language;
use common_utils::{CustomResult, PeekInterface, Secret};
use domain_types::{
    connector_flow::Operation,
    connector_types::Payload,
    errors::ConnectorError,
    router_request_types::{
        DmsTransactionData, RecurringPaymentDeletionData, RecurringPaymentExecutionData,
        RecurringPaymentRegistrationData, RefundData, ReversalData, StartCardSmsTransactionData,
        StartDmsAuthorizationData, StartSmsTransactionData, TransactionResultData,
    },
    router_response_types::GatewayResponse,
    types::DecodeMode,
};
use error_stack::report;

use super::constants::{
    command_spec, fields::*, CommandCode, CommandSpec, RESPONSE_SEPARATOR, SENSITIVE_FIELDS,
};
use crate::utils;

/// Form payload of one merchant handler command.
#[derive(Debug)]
pub struct PashaBankRequest(Payload);

impl PashaBankRequest {
    pub fn into_payload(self) -> Payload {
        self.0
    }
}

/// Assembles a [`Payload`] and checks it against the command catalog.
///
/// Required values that are empty or blank fail with `MissingRequiredField`, optional
/// values are only sent when they are non-empty, and any field the command does not
/// list fails with `UnexpectedField`.
#[derive(Debug)]
pub struct PashaBankPayloadBuilder {
    spec: &'static CommandSpec,
    payload: Payload,
}

impl PashaBankPayloadBuilder {
    pub fn new(operation: Operation) -> Self {
        let spec = command_spec(operation);
        let mut payload = Payload::new();
        if let CommandCode::Fixed(code) = spec.command {
            payload.insert(COMMAND, code);
        }
        if let Some(msg_type) = spec.msg_type {
            payload.insert(MSG_TYPE, msg_type.as_str());
        }
        Self { spec, payload }
    }

    /// Sets the command code of operations whose code is picked by the merchant.
    pub fn command(mut self, code: &str) -> CustomResult<Self, ConnectorError> {
        if self.spec.command != CommandCode::CallerSupplied {
            return Err(report!(ConnectorError::UnexpectedField {
                field_name: COMMAND,
                operation: self.spec.operation,
            }));
        }
        let code = utils::non_blank(code).ok_or_else(utils::missing_field_err(COMMAND))?;
        self.payload.insert(COMMAND, code);
        Ok(self)
    }

    pub fn required(
        mut self,
        field: &'static str,
        value: &str,
    ) -> CustomResult<Self, ConnectorError> {
        self.ensure_accepted(field)?;
        let value = utils::non_blank(value).ok_or_else(utils::missing_field_err(field))?;
        self.insert(field, value);
        Ok(self)
    }

    pub fn optional(
        mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> CustomResult<Self, ConnectorError> {
        self.ensure_accepted(field)?;
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            self.insert(field, value);
        }
        Ok(self)
    }

    pub fn build(self) -> CustomResult<PashaBankRequest, ConnectorError> {
        if !self.payload.contains_key(COMMAND) {
            return Err(utils::missing_field_err(COMMAND)());
        }
        if let Some(missing) = self
            .spec
            .required_fields
            .iter()
            .copied()
            .find(|field| !self.payload.contains_key(field))
        {
            return Err(utils::missing_field_err(missing)());
        }
        Ok(PashaBankRequest(self.payload))
    }

    fn ensure_accepted(&self, field: &'static str) -> CustomResult<(), ConnectorError> {
        if self.spec.accepts(field) {
            Ok(())
        } else {
            Err(report!(ConnectorError::UnexpectedField {
                field_name: field,
                operation: self.spec.operation,
            }))
        }
    }

    fn insert(&mut self, field: &'static str, value: &str) {
        if SENSITIVE_FIELDS.contains(&field) {
            self.payload
                .insert_masked(field, Secret::new(value.to_owned()));
        } else {
            self.payload.insert(field, value);
        }
    }
}

fn language_code(language: Option<Language>) -> Option<&'static str> {
    language.map(Language::code)
}

impl TryFrom<&StartSmsTransactionData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &StartSmsTransactionData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::StartSmsTransaction)
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .required(TERMINAL_ID, &item.terminal_id)?
            .optional(DESCRIPTION, item.description.as_deref())?
            .optional(LANGUAGE, language_code(item.language))?
            .build()
    }
}

impl TryFrom<&StartCardSmsTransactionData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &StartCardSmsTransactionData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::StartCardSmsTransaction)
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .required(CARDNAME, item.cardname.peek())?
            .required(PAN, item.pan.peek())?
            .required(EXPIRY, item.expiry.peek())?
            .required(CVV2, item.cvv2.peek())?
            .optional(DESCRIPTION, item.description.as_deref())?
            .optional(LANGUAGE, language_code(item.language))?
            .build()
    }
}

impl TryFrom<&StartDmsAuthorizationData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &StartDmsAuthorizationData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::StartDmsAuthorization)
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .optional(DESCRIPTION, item.description.as_deref())?
            .optional(LANGUAGE, language_code(item.language))?
            .build()
    }
}

impl TryFrom<&DmsTransactionData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &DmsTransactionData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::DmsTransaction)
            .required(TRANS_ID, &item.trans_id)?
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .optional(DESCRIPTION, item.description.as_deref())?
            .optional(LANGUAGE, language_code(item.language))?
            .build()
    }
}

impl TryFrom<&ReversalData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &ReversalData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::Reversal)
            .required(TRANS_ID, &item.trans_id)?
            .optional(AMOUNT, item.amount.as_ref().map(|amount| amount.as_str()))?
            .optional(SUSPECTED_FRAUD, item.suspected_fraud.as_deref())?
            .build()
    }
}

impl TryFrom<&RefundData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &RefundData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::Refund)
            .required(TRANS_ID, &item.trans_id)?
            .optional(AMOUNT, item.amount.as_ref().map(|amount| amount.as_str()))?
            .build()
    }
}

impl TryFrom<&RecurringPaymentRegistrationData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &RecurringPaymentRegistrationData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::RecurringPaymentRegistration)
            .command(&item.command)?
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .required(BILLER_CLIENT_ID, &item.biller_client_id)?
            .required(PERSPAYEE_EXPIRY, &item.perspayee_expiry)?
            .required(PERSPAYEE_GEN, &item.perspayee_gen().to_string())?
            .required(PERSPAYEE_OVERWRITE, &item.perspayee_overwrite().to_string())?
            .optional(DESCRIPTION, item.description.as_deref())?
            .optional(LANGUAGE, language_code(item.language))?
            .build()
    }
}

impl TryFrom<&RecurringPaymentExecutionData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &RecurringPaymentExecutionData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::RecurringPaymentExecution)
            .required(AMOUNT, item.amount.as_str())?
            .required(CURRENCY, item.currency.iso_4217())?
            .required(CLIENT_IP_ADDR, &item.client_ip_addr.to_string())?
            .required(BILLER_CLIENT_ID, &item.biller_client_id)?
            .optional(DESCRIPTION, item.description.as_deref())?
            .build()
    }
}

impl TryFrom<&RecurringPaymentDeletionData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &RecurringPaymentDeletionData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::RecurringPaymentDeletion)
            .required(BILLER_CLIENT_ID, &item.biller_client_id)?
            .build()
    }
}

impl TryFrom<&TransactionResultData> for PashaBankRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &TransactionResultData) -> Result<Self, Self::Error> {
        PashaBankPayloadBuilder::new(Operation::TransactionResult)
            .required(TRANS_ID, &item.trans_id)?
            .build()
    }
}

/// Decodes the merchant handler's `Key: Value` per line response text.
///
/// The text is trimmed as a whole and every line is split at the first `": "`. Key and
/// value are trimmed and a repeated key keeps its last value. A line without the
/// separator is skipped in [`DecodeMode::Lenient`]; in [`DecodeMode::Strict`] a non
/// blank one fails with `MalformedResponseLine`.
pub fn parse_response(
    body: &str,
    mode: DecodeMode,
) -> CustomResult<GatewayResponse, ConnectorError> {
    let mut response = GatewayResponse::new();
    let mut skipped_lines = 0_usize;

    for (index, line) in body.trim().lines().enumerate() {
        match line.split_once(RESPONSE_SEPARATOR) {
            Some((key, value)) => {
                response.insert(key.trim().to_owned(), value.trim().to_owned());
            }
            None if mode == DecodeMode::Strict && !line.trim().is_empty() => {
                return Err(report!(ConnectorError::MalformedResponseLine {
                    line_number: index + 1,
                    line: line.to_owned(),
                }));
            }
            None => skipped_lines += 1,
        }
    }

    if skipped_lines > 0 {
        tracing::debug!(
            skipped_lines,
            "skipped response lines without a key/value separator"
        );
    }

    Ok(response)
}
