/// Every operation the merchant handler understands.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    StartSmsTransaction,
    StartCardSmsTransaction,
    StartDmsAuthorization,
    DmsTransaction,
    Reversal,
    Refund,
    RecurringPaymentRegistration,
    RecurringPaymentExecution,
    RecurringPaymentDeletion,
    TransactionResult,
}

/// Ties a typed request to the operation it is sent as.
pub trait OperationData {
    const OPERATION: Operation;
}
