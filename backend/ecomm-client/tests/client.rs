use std::{
    net::{IpAddr, Ipv4Addr},
    sync::{Arc, Mutex},
};

use common_enums::{Currency, Language};
use common_utils::{CustomResult, Secret, StringMinorUnit};
use connector_integration::PashaBank;
use domain_types::{
    connector_types::Payload,
    errors::{ApiClientError, ConnectorError},
    router_request_types::{
        DmsTransactionData, RecurringPaymentRegistrationData, StartCardSmsTransactionData,
        TransactionResultData,
    },
    types::DecodeMode,
};
use ecomm_client::PaymentClient;
use error_stack::report;
use interfaces::connector_types::ConnectorTransport;

/// Records every payload and answers with a canned reply.
struct MockTransport {
    reply: Result<String, ApiClientError>,
    sent: Mutex<Vec<Payload>>,
}

impl MockTransport {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: ApiClientError) -> Self {
        Self {
            reply: Err(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<Payload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ConnectorTransport for MockTransport {
    async fn send(&self, payload: Payload) -> CustomResult<String, ApiClientError> {
        self.sent.lock().unwrap().push(payload);
        self.reply.clone().map_err(|error| report!(error))
    }
}

fn client_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))
}

#[tokio::test]
async fn transaction_result_round_trip() {
    let client = PaymentClient::new(MockTransport::replying(
        "RESULT: OK\nRESULT_CODE: 000\n3DSECURE: AUTHENTICATED\nRRN: 123456789012",
    ));

    let response = client
        .get_transaction_result(&TransactionResultData {
            trans_id: "abc=".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.result(), Some("OK"));
    assert_eq!(response.result_code(), Some("000"));
    assert_eq!(response.get("RRN"), Some("123456789012"));

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].get("command"), Some("c"));
    assert_eq!(sent[0].get("trans_id"), Some("abc="));
    assert_eq!(sent[0].len(), 2);
}

#[tokio::test]
async fn construction_error_sends_nothing() {
    let client = PaymentClient::new(MockTransport::replying("RESULT: OK"));

    let error = client
        .make_dms_transaction(&DmsTransactionData {
            trans_id: String::new(),
            amount: StringMinorUnit::from("100"),
            currency: Currency::AZN,
            client_ip_addr: client_ip(),
            description: None,
            language: None,
        })
        .await
        .unwrap_err();

    assert_eq!(
        error.current_context(),
        &ConnectorError::MissingRequiredField {
            field_name: "trans_id"
        }
    );
    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn transport_errors_surface_with_their_cause() {
    let client = PaymentClient::new(MockTransport::failing(
        ApiClientError::UnexpectedServerResponse { status_code: 500 },
    ));

    let error = client
        .get_transaction_result(&TransactionResultData {
            trans_id: "abc=".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.current_context(), &ConnectorError::ProcessingStepFailed);
    assert_eq!(
        error.downcast_ref::<ApiClientError>(),
        Some(&ApiClientError::UnexpectedServerResponse { status_code: 500 })
    );
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn card_data_is_sent_but_masked() {
    let client = PaymentClient::new(MockTransport::replying("TRANSACTION_ID: xyz=\nRESULT: OK"));

    let response = client
        .start_card_sms_transaction(&StartCardSmsTransactionData {
            amount: StringMinorUnit::from("2500"),
            currency: Currency::EUR,
            client_ip_addr: client_ip(),
            cardname: Secret::new("Jane Roe".to_string()),
            pan: Secret::new("4111111111111111".to_string()),
            expiry: Secret::new("0128".to_string()),
            cvv2: Secret::new("321".to_string()),
            description: Some("order 42".to_string()),
            language: Some(Language::AZ),
        })
        .await
        .unwrap();
    assert_eq!(response.trans_id(), Some("xyz="));

    let sent = client.transport().sent();
    let payload = &sent[0];
    assert_eq!(payload.get("command"), Some("i"));
    assert_eq!(payload.get("msg_type"), Some("SMS"));
    assert_eq!(payload.get("currency"), Some("978"));
    assert_eq!(payload.get("language"), Some("AZ"));
    assert_eq!(payload.get("pan"), Some("4111111111111111"));
    assert!(payload.is_masked("pan"));
    assert!(!format!("{payload:?}").contains("4111111111111111"));
}

#[tokio::test]
async fn registration_defaults_reach_the_wire() {
    let client = PaymentClient::new(MockTransport::replying("RESULT: OK"));

    client
        .register_recurring_payment(&RecurringPaymentRegistrationData {
            command: "z".to_string(),
            amount: StringMinorUnit::from("100"),
            currency: Currency::AZN,
            client_ip_addr: client_ip(),
            biller_client_id: "biller123".to_string(),
            perspayee_expiry: "1226".to_string(),
            perspayee_gen: None,
            perspayee_overwrite: None,
            description: None,
            language: None,
        })
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(sent[0].get("perspayee_gen"), Some("1"));
    assert_eq!(sent[0].get("perspayee_overwrite"), Some("0"));
}

#[tokio::test]
async fn strict_client_rejects_malformed_lines() {
    let client = PaymentClient::with_connector(
        PashaBank::with_decode_mode(DecodeMode::Strict),
        MockTransport::replying("RESULT: OK\nwarning: \nerror"),
    );

    let error = client
        .get_transaction_result(&TransactionResultData {
            trans_id: "abc=".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        error.current_context(),
        &ConnectorError::MalformedResponseLine {
            line_number: 3,
            line: "error".to_string()
        }
    );
}

#[tokio::test]
async fn lenient_client_drops_malformed_lines() {
    let client = PaymentClient::new(MockTransport::replying("RESULT: OK\nerror"));

    let response = client
        .get_transaction_result(&TransactionResultData {
            trans_id: "abc=".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.len(), 1);
}

#[tokio::test]
async fn client_is_shared_between_tasks() {
    let client = Arc::new(PaymentClient::new(MockTransport::replying("RESULT: OK")));

    let tasks: Vec<_> = (0..8)
        .map(|index| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .get_transaction_result(&TransactionResultData {
                        trans_id: format!("trans-{index}"),
                    })
                    .await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap().result(), Some("OK"));
    }
    assert_eq!(client.transport().sent().len(), 8);
}
