//! Command catalog of the PASHA Bank merchant handler.

use common_enums::MessageType;
use domain_types::connector_flow::Operation;

pub mod fields {
    pub const COMMAND: &str = "command";
    pub const MSG_TYPE: &str = "msg_type";
    pub const AMOUNT: &str = "amount";
    pub const CURRENCY: &str = "currency";
    pub const CLIENT_IP_ADDR: &str = "client_ip_addr";
    pub const TERMINAL_ID: &str = "terminal_id";
    pub const DESCRIPTION: &str = "description";
    pub const LANGUAGE: &str = "language";
    pub const CARDNAME: &str = "cardname";
    pub const PAN: &str = "pan";
    pub const EXPIRY: &str = "expiry";
    pub const CVV2: &str = "cvv2";
    pub const TRANS_ID: &str = "trans_id";
    pub const SUSPECTED_FRAUD: &str = "suspected_fraud";
    pub const BILLER_CLIENT_ID: &str = "biller_client_id";
    pub const PERSPAYEE_EXPIRY: &str = "perspayee_expiry";
    pub const PERSPAYEE_GEN: &str = "perspayee_gen";
    pub const PERSPAYEE_OVERWRITE: &str = "perspayee_overwrite";
}

use fields::*;

/// Card holder data, always masked in logs.
pub const SENSITIVE_FIELDS: &[&str] = &[CARDNAME, PAN, EXPIRY, CVV2];

/// Separator between key and value on every response line.
pub const RESPONSE_SEPARATOR: &str = ": ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandCode {
    Fixed(&'static str),
    /// The merchant picks the code when calling the operation.
    CallerSupplied,
}

/// Static description of one merchant handler command.
#[derive(Debug)]
pub struct CommandSpec {
    pub operation: Operation,
    pub command: CommandCode,
    pub msg_type: Option<MessageType>,
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
}

impl CommandSpec {
    pub fn accepts(&self, field: &str) -> bool {
        self.required_fields.contains(&field) || self.optional_fields.contains(&field)
    }
}

pub static START_SMS_TRANSACTION: CommandSpec = CommandSpec {
    operation: Operation::StartSmsTransaction,
    command: CommandCode::Fixed("v"),
    msg_type: Some(MessageType::Sms),
    required_fields: &[AMOUNT, CURRENCY, CLIENT_IP_ADDR, TERMINAL_ID],
    optional_fields: &[DESCRIPTION, LANGUAGE],
};

pub static START_CARD_SMS_TRANSACTION: CommandSpec = CommandSpec {
    operation: Operation::StartCardSmsTransaction,
    command: CommandCode::Fixed("i"),
    msg_type: Some(MessageType::Sms),
    required_fields: &[AMOUNT, CURRENCY, CLIENT_IP_ADDR, CARDNAME, PAN, EXPIRY, CVV2],
    optional_fields: &[DESCRIPTION, LANGUAGE],
};

pub static START_DMS_AUTHORIZATION: CommandSpec = CommandSpec {
    operation: Operation::StartDmsAuthorization,
    command: CommandCode::Fixed("a"),
    msg_type: Some(MessageType::Dms),
    required_fields: &[AMOUNT, CURRENCY, CLIENT_IP_ADDR],
    optional_fields: &[DESCRIPTION, LANGUAGE],
};

pub static DMS_TRANSACTION: CommandSpec = CommandSpec {
    operation: Operation::DmsTransaction,
    command: CommandCode::Fixed("t"),
    msg_type: Some(MessageType::Dms),
    required_fields: &[TRANS_ID, AMOUNT, CURRENCY, CLIENT_IP_ADDR],
    optional_fields: &[DESCRIPTION, LANGUAGE],
};

pub static REVERSAL: CommandSpec = CommandSpec {
    operation: Operation::Reversal,
    command: CommandCode::Fixed("r"),
    msg_type: None,
    required_fields: &[TRANS_ID],
    optional_fields: &[AMOUNT, SUSPECTED_FRAUD],
};

pub static REFUND: CommandSpec = CommandSpec {
    operation: Operation::Refund,
    command: CommandCode::Fixed("k"),
    msg_type: None,
    required_fields: &[TRANS_ID],
    optional_fields: &[AMOUNT],
};

pub static RECURRING_PAYMENT_REGISTRATION: CommandSpec = CommandSpec {
    operation: Operation::RecurringPaymentRegistration,
    command: CommandCode::CallerSupplied,
    msg_type: None,
    required_fields: &[
        AMOUNT,
        CURRENCY,
        CLIENT_IP_ADDR,
        BILLER_CLIENT_ID,
        PERSPAYEE_EXPIRY,
        PERSPAYEE_GEN,
        PERSPAYEE_OVERWRITE,
    ],
    optional_fields: &[DESCRIPTION, LANGUAGE],
};

pub static RECURRING_PAYMENT_EXECUTION: CommandSpec = CommandSpec {
    operation: Operation::RecurringPaymentExecution,
    command: CommandCode::Fixed("e"),
    msg_type: None,
    required_fields: &[AMOUNT, CURRENCY, CLIENT_IP_ADDR, BILLER_CLIENT_ID],
    optional_fields: &[DESCRIPTION],
};

pub static RECURRING_PAYMENT_DELETION: CommandSpec = CommandSpec {
    operation: Operation::RecurringPaymentDeletion,
    command: CommandCode::Fixed("x"),
    msg_type: None,
    required_fields: &[BILLER_CLIENT_ID],
    optional_fields: &[],
};

pub static TRANSACTION_RESULT: CommandSpec = CommandSpec {
    operation: Operation::TransactionResult,
    command: CommandCode::Fixed("c"),
    msg_type: None,
    required_fields: &[TRANS_ID],
    optional_fields: &[],
};

pub static COMMAND_CATALOG: [&CommandSpec; 10] = [
    &START_SMS_TRANSACTION,
    &START_CARD_SMS_TRANSACTION,
    &START_DMS_AUTHORIZATION,
    &DMS_TRANSACTION,
    &REVERSAL,
    &REFUND,
    &RECURRING_PAYMENT_REGISTRATION,
    &RECURRING_PAYMENT_EXECUTION,
    &RECURRING_PAYMENT_DELETION,
    &TRANSACTION_RESULT,
];

pub fn command_spec(operation: Operation) -> &'static CommandSpec {
    match operation {
        Operation::StartSmsTransaction => &START_SMS_TRANSACTION,
        Operation::StartCardSmsTransaction => &START_CARD_SMS_TRANSACTION,
        Operation::StartDmsAuthorization => &START_DMS_AUTHORIZATION,
        Operation::DmsTransaction => &DMS_TRANSACTION,
        Operation::Reversal => &REVERSAL,
        Operation::Refund => &REFUND,
        Operation::RecurringPaymentRegistration => &RECURRING_PAYMENT_REGISTRATION,
        Operation::RecurringPaymentExecution => &RECURRING_PAYMENT_EXECUTION,
        Operation::RecurringPaymentDeletion => &RECURRING_PAYMENT_DELETION,
        Operation::TransactionResult => &TRANSACTION_RESULT,
    }
}
