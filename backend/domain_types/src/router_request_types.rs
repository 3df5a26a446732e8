//! Typed arguments of every merchant handler operation.

use std::net::IpAddr;

use common_enums::{Currency, Language};
use common_utils::{pii::CardNumber, Secret, StringMinorUnit};

use crate::connector_flow::{Operation, OperationData};

pub const DEFAULT_PERSPAYEE_GEN: u8 = 1;
pub const DEFAULT_PERSPAYEE_OVERWRITE: u8 = 0;

/// Starts a single message transaction, card data is collected by the gateway.
#[derive(Debug, Clone)]
pub struct StartSmsTransactionData {
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    /// Terminal identifier issued by the bank.
    pub terminal_id: String,
    pub description: Option<String>,
    pub language: Option<Language>,
}

/// Starts a single message transaction with card data supplied by the merchant.
#[derive(Debug, Clone)]
pub struct StartCardSmsTransactionData {
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    pub cardname: Secret<String>,
    pub pan: CardNumber,
    /// Card expiry as sent to the gateway, e.g. `1225`.
    pub expiry: Secret<String>,
    pub cvv2: Secret<String>,
    pub description: Option<String>,
    pub language: Option<Language>,
}

#[derive(Debug, Clone)]
pub struct StartDmsAuthorizationData {
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    pub description: Option<String>,
    pub language: Option<Language>,
}

/// Captures a previously authorized dual message transaction.
#[derive(Debug, Clone)]
pub struct DmsTransactionData {
    pub trans_id: String,
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    pub description: Option<String>,
    pub language: Option<Language>,
}

#[derive(Debug, Clone)]
pub struct ReversalData {
    pub trans_id: String,
    /// Partial reversal amount, the whole transaction is reversed when absent.
    pub amount: Option<StringMinorUnit>,
    pub suspected_fraud: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RefundData {
    pub trans_id: String,
    pub amount: Option<StringMinorUnit>,
}

#[derive(Debug, Clone)]
pub struct RecurringPaymentRegistrationData {
    /// Registration command code, chosen by the merchant per gateway agreement.
    pub command: String,
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    pub biller_client_id: String,
    pub perspayee_expiry: String,
    pub perspayee_gen: Option<u8>,
    pub perspayee_overwrite: Option<u8>,
    pub description: Option<String>,
    pub language: Option<Language>,
}

impl RecurringPaymentRegistrationData {
    pub fn perspayee_gen(&self) -> u8 {
        self.perspayee_gen.unwrap_or(DEFAULT_PERSPAYEE_GEN)
    }

    pub fn perspayee_overwrite(&self) -> u8 {
        self.perspayee_overwrite
            .unwrap_or(DEFAULT_PERSPAYEE_OVERWRITE)
    }
}

#[derive(Debug, Clone)]
pub struct RecurringPaymentExecutionData {
    pub biller_client_id: String,
    pub amount: StringMinorUnit,
    pub currency: Currency,
    pub client_ip_addr: IpAddr,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecurringPaymentDeletionData {
    pub biller_client_id: String,
}

#[derive(Debug, Clone)]
pub struct TransactionResultData {
    pub trans_id: String,
}

macro_rules! impl_operation_data {
    ($($data:ty => $operation:ident),+ $(,)?) => {
        $(
            impl OperationData for $data {
                const OPERATION: Operation = Operation::$operation;
            }
        )+
    };
}

impl_operation_data!(
    StartSmsTransactionData => StartSmsTransaction,
    StartCardSmsTransactionData => StartCardSmsTransaction,
    StartDmsAuthorizationData => StartDmsAuthorization,
    DmsTransactionData => DmsTransaction,
    ReversalData => Reversal,
    RefundData => Refund,
    RecurringPaymentRegistrationData => RecurringPaymentRegistration,
    RecurringPaymentExecutionData => RecurringPaymentExecution,
    RecurringPaymentDeletionData => RecurringPaymentDeletion,
    TransactionResultData => TransactionResult,
);
