//! Command line surface of the client, one subcommand per merchant handler operation.

use std::{net::IpAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use common_enums::{Currency, Language};
use common_utils::{CustomResult, Secret, StringMinorUnit};
use domain_types::{
    errors::ConnectorError,
    router_request_types::{
        DmsTransactionData, RecurringPaymentDeletionData, RecurringPaymentExecutionData,
        RecurringPaymentRegistrationData, RefundData, ReversalData, StartCardSmsTransactionData,
        StartDmsAuthorizationData, StartSmsTransactionData, TransactionResultData,
    },
    router_response_types::GatewayResponse,
};
use interfaces::connector_types::ConnectorTransport;

use crate::client::PaymentClient;

#[derive(Parser, Debug)]
#[command(name = "ecomm-client")]
#[command(about = "Send commands to the PASHA Bank e-commerce merchant handler", long_about = None)]
pub struct Cli {
    /// Configuration file, `config/<RUN_ENV>.toml` when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an SMS transaction, card data is entered on the gateway page
    StartSms {
        #[command(flatten)]
        payment: PaymentArgs,
        #[arg(long)]
        terminal_id: String,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Start an SMS transaction with merchant supplied card data
    StartCardSms {
        #[command(flatten)]
        payment: PaymentArgs,
        #[command(flatten)]
        card: CardArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Authorize a DMS transaction
    StartDms {
        #[command(flatten)]
        payment: PaymentArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Capture an authorized DMS transaction
    CompleteDms {
        #[arg(long)]
        trans_id: String,
        #[command(flatten)]
        payment: PaymentArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    Reverse {
        #[arg(long)]
        trans_id: String,
        /// Partial amount, the full transaction is reversed when omitted
        #[arg(long, value_parser = parse_amount)]
        amount: Option<StringMinorUnit>,
        #[arg(long)]
        suspected_fraud: Option<String>,
    },
    Refund {
        #[arg(long)]
        trans_id: String,
        #[arg(long, value_parser = parse_amount)]
        amount: Option<StringMinorUnit>,
    },
    /// Register a recurring payment
    RegisterRecurring {
        /// Registration command code agreed with the bank
        #[arg(long)]
        command_code: String,
        #[command(flatten)]
        payment: PaymentArgs,
        #[arg(long)]
        biller_client_id: String,
        /// Expiry of the registration, MMYY
        #[arg(long)]
        perspayee_expiry: String,
        #[arg(long)]
        perspayee_gen: Option<u8>,
        #[arg(long)]
        perspayee_overwrite: Option<u8>,
        #[command(flatten)]
        display: DisplayArgs,
    },
    ExecuteRecurring {
        #[command(flatten)]
        payment: PaymentArgs,
        #[arg(long)]
        biller_client_id: String,
        #[arg(long)]
        description: Option<String>,
    },
    DeleteRecurring {
        #[arg(long)]
        biller_client_id: String,
    },
    /// Query the state of a transaction
    TransactionResult {
        #[arg(long)]
        trans_id: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PaymentArgs {
    /// Amount in minor units
    #[arg(long, value_parser = parse_amount)]
    pub amount: StringMinorUnit,
    #[arg(long, default_value_t = Currency::AZN)]
    pub currency: Currency,
    #[arg(long)]
    pub client_ip: IpAddr,
}

#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub language: Option<Language>,
}

#[derive(Args, Debug, Clone)]
pub struct CardArgs {
    #[arg(long)]
    pub cardname: String,
    #[arg(long)]
    pub pan: String,
    /// Card expiry, MMYY
    #[arg(long)]
    pub expiry: String,
    #[arg(long)]
    pub cvv2: String,
}

fn parse_amount(value: &str) -> Result<StringMinorUnit, String> {
    value.parse().map_err(|error| format!("{error}"))
}

impl Command {
    pub async fn execute<T>(
        self,
        client: &PaymentClient<T>,
    ) -> CustomResult<GatewayResponse, ConnectorError>
    where
        T: ConnectorTransport,
    {
        match self {
            Self::StartSms {
                payment,
                terminal_id,
                display,
            } => {
                client
                    .start_sms_transaction(&StartSmsTransactionData {
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        terminal_id,
                        description: display.description,
                        language: display.language,
                    })
                    .await
            }
            Self::StartCardSms {
                payment,
                card,
                display,
            } => {
                client
                    .start_card_sms_transaction(&StartCardSmsTransactionData {
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        cardname: Secret::new(card.cardname),
                        pan: Secret::new(card.pan),
                        expiry: Secret::new(card.expiry),
                        cvv2: Secret::new(card.cvv2),
                        description: display.description,
                        language: display.language,
                    })
                    .await
            }
            Self::StartDms { payment, display } => {
                client
                    .start_dms_authorization(&StartDmsAuthorizationData {
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        description: display.description,
                        language: display.language,
                    })
                    .await
            }
            Self::CompleteDms {
                trans_id,
                payment,
                display,
            } => {
                client
                    .make_dms_transaction(&DmsTransactionData {
                        trans_id,
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        description: display.description,
                        language: display.language,
                    })
                    .await
            }
            Self::Reverse {
                trans_id,
                amount,
                suspected_fraud,
            } => {
                client
                    .reverse(&ReversalData {
                        trans_id,
                        amount,
                        suspected_fraud,
                    })
                    .await
            }
            Self::Refund { trans_id, amount } => {
                client.refund(&RefundData { trans_id, amount }).await
            }
            Self::RegisterRecurring {
                command_code,
                payment,
                biller_client_id,
                perspayee_expiry,
                perspayee_gen,
                perspayee_overwrite,
                display,
            } => {
                client
                    .register_recurring_payment(&RecurringPaymentRegistrationData {
                        command: command_code,
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        biller_client_id,
                        perspayee_expiry,
                        perspayee_gen,
                        perspayee_overwrite,
                        description: display.description,
                        language: display.language,
                    })
                    .await
            }
            Self::ExecuteRecurring {
                payment,
                biller_client_id,
                description,
            } => {
                client
                    .execute_recurring_payment(&RecurringPaymentExecutionData {
                        biller_client_id,
                        amount: payment.amount,
                        currency: payment.currency,
                        client_ip_addr: payment.client_ip,
                        description,
                    })
                    .await
            }
            Self::DeleteRecurring { biller_client_id } => {
                client
                    .delete_recurring_payment(&RecurringPaymentDeletionData { biller_client_id })
                    .await
            }
            Self::TransactionResult { trans_id } => {
                client
                    .get_transaction_result(&TransactionResultData { trans_id })
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dms_capture() {
        let cli = Cli::try_parse_from([
            "ecomm-client",
            "complete-dms",
            "--trans-id",
            "abc=",
            "--amount",
            "1500",
            "--currency",
            "usd",
            "--client-ip",
            "10.0.0.1",
        ])
        .unwrap();
        let Command::CompleteDms {
            trans_id, payment, ..
        } = cli.command
        else {
            panic!("unexpected subcommand");
        };
        assert_eq!(trans_id, "abc=");
        assert_eq!(payment.amount.as_str(), "1500");
        assert_eq!(payment.currency, Currency::USD);
    }

    #[test]
    fn currency_defaults_to_manat() {
        let cli = Cli::try_parse_from([
            "ecomm-client",
            "--config",
            "gateway.toml",
            "start-dms",
            "--amount",
            "100",
            "--client-ip",
            "127.0.0.1",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("gateway.toml")));
        let Command::StartDms { payment, display } = cli.command else {
            panic!("unexpected subcommand");
        };
        assert_eq!(payment.currency, Currency::AZN);
        assert!(display.language.is_none());
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = Cli::try_parse_from([
            "ecomm-client",
            "refund",
            "--trans-id",
            "abc",
            "--amount",
            "12.50",
        ]);
        assert!(result.is_err());
    }
}
