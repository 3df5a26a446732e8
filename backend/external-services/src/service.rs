use std::{fs, path::Path, time::Duration};

use common_utils::{
    request::{Method, Request, RequestBuilder},
    CustomResult, ExposeInterface, PeekInterface,
};
use domain_types::{
    connector_flow::OperationData,
    connector_types::Payload,
    errors::{ApiClientError, ConnectorError},
    router_response_types::{GatewayResponse, Response},
    types::{CertificateConfig, GatewayConfig},
};
use error_stack::{report, ResultExt};
use interfaces::{connector_integration::ConnectorIntegration, connector_types::ConnectorTransport};
use reqwest::Client;
use tracing::field::Empty;

/// Runs one operation end to end: builds the payload, hands it to the transport and
/// decodes the answer.
///
/// Nothing is sent when the payload cannot be built. Transport failures surface as
/// [`ConnectorError::ProcessingStepFailed`] with the [`ApiClientError`] kept in the report.
#[tracing::instrument(
    name = "execute_connector_processing_step",
    skip_all,
    fields(
        connector = connector.id(),
        operation = Empty,
        request.body = Empty,
        response.result = Empty,
        response.fields = Empty,
        latency = Empty,
    )
)]
pub async fn execute_connector_processing_step<C, T, Req>(
    connector: &C,
    transport: &T,
    req: &Req,
) -> CustomResult<GatewayResponse, ConnectorError>
where
    C: ConnectorIntegration<Req>,
    T: ConnectorTransport + ?Sized,
    Req: OperationData + Sync,
{
    let span = tracing::Span::current();
    span.record("operation", tracing::field::display(Req::OPERATION));

    let payload = connector.get_request_body(req)?;
    span.record("request.body", tracing::field::debug(&payload));

    let start = tokio::time::Instant::now();
    let body = transport
        .send(payload)
        .await
        .inspect_err(|error| tracing::error!(?error, "gateway call failed"))
        .change_context(ConnectorError::ProcessingStepFailed)?;
    span.record("latency", start.elapsed().as_millis() as u64);

    let response = connector.handle_response(&body)?;
    span.record("response.fields", response.len());
    if let Some(result) = response.result() {
        span.record("response.result", result);
    }
    tracing::info!("Outgoing request completed");
    Ok(response)
}

/// Posts payloads to the merchant handler with a client certificate.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &GatewayConfig) -> CustomResult<Self, ApiClientError> {
        let client = create_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Uses a prebuilt client, the caller owns its TLS setup.
    pub fn with_client(client: Client, base_url: &str) -> CustomResult<Self, ApiClientError> {
        reqwest::Url::parse(base_url)
            .change_context(ApiClientError::UrlEncodingFailed)
            .attach_printable_lazy(|| format!("invalid gateway url: {base_url}"))?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl ConnectorTransport for HttpTransport {
    async fn send(&self, payload: Payload) -> CustomResult<String, ApiClientError> {
        tracing::debug!(request = ?payload, "request to gateway");
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(&self.base_url)
            .set_body(payload.into_request_content())
            .build();

        match call_connector_api(&self.client, request).await? {
            Ok(response) => {
                tracing::debug!(status_code = response.status_code, "response from gateway");
                decode_response_text(&response.response)
            }
            Err(response) => {
                let body = String::from_utf8_lossy(&response.response).into_owned();
                tracing::warn!(status_code = response.status_code, "gateway rejected the request");
                Err(report!(ApiClientError::UnexpectedServerResponse {
                    status_code: response.status_code,
                })
                .attach_printable(body))
            }
        }
    }
}

/// Sends `request` and splits the answer into success (`Ok`) and error (`Err`) statuses.
pub async fn call_connector_api(
    client: &Client,
    request: Request,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;

    let builder = match request.method {
        Method::Get => client.get(url),
        Method::Post => {
            let builder = client.post(url);
            match request.body {
                Some(content) => builder.body(
                    content
                        .get_inner_value()
                        .change_context(ApiClientError::UrlEncodingFailed)?
                        .expose(),
                ),
                None => builder,
            }
        }
    };
    let builder = request
        .headers
        .iter()
        .fold(builder, |builder, (name, value)| {
            builder.header(name.as_str(), value.peek().as_str())
        });

    let response = builder.send().await.map_err(|error| {
        let api_error = match error {
            error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
            error => ApiClientError::RequestNotSent(error.to_string()),
        };
        tracing::info!(error = %api_error, "unable to send request to gateway");
        report!(api_error)
    })?;

    handle_response(response).await
}

/// Builds the mutual TLS client described by `config`.
pub fn create_client(config: &GatewayConfig) -> CustomResult<Client, ApiClientError> {
    let mut client_builder = get_client_builder(config);

    client_builder = match &config.certificate {
        CertificateConfig::Pem {
            certificate_path,
            private_key_path,
        } => client_builder
            .use_rustls_tls()
            .identity(create_identity_from_certificate_and_key(
                certificate_path,
                private_key_path,
            )?),
        CertificateConfig::Pkcs12 {
            archive_path,
            passphrase,
        } => client_builder
            .use_native_tls()
            .identity(create_identity_from_pkcs12(archive_path, passphrase.peek())?),
    };

    if let Some(path) = &config.ca_certificate_path {
        client_builder = create_certificate(path)?
            .into_iter()
            .fold(client_builder, |client_builder, certificate| {
                client_builder.add_root_certificate(certificate)
            });
    }

    if config.accept_invalid_certs {
        tracing::warn!("gateway server certificate verification is disabled");
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    client_builder
        .build()
        .change_context(ApiClientError::ClientConstructionFailed)
        .inspect_err(|error| tracing::error!(?error, "failed to construct gateway client"))
}

fn get_client_builder(config: &GatewayConfig) -> reqwest::ClientBuilder {
    let mut client_builder = Client::builder().redirect(reqwest::redirect::Policy::none());
    if let Some(timeout) = config.request_timeout() {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout() {
        client_builder = client_builder.connect_timeout(timeout);
    }
    client_builder.pool_idle_timeout(Duration::from_secs(90))
}

fn read_certificate_file(path: &Path) -> CustomResult<Vec<u8>, ApiClientError> {
    fs::read(path)
        .change_context(ApiClientError::CertificateDecodeFailed)
        .attach_printable_lazy(|| format!("unable to read {}", path.display()))
}

pub fn create_identity_from_certificate_and_key(
    certificate_path: &Path,
    private_key_path: &Path,
) -> CustomResult<reqwest::Identity, ApiClientError> {
    let mut key_chain = read_certificate_file(private_key_path)?;
    key_chain.push(b'\n');
    key_chain.extend(read_certificate_file(certificate_path)?);
    reqwest::Identity::from_pem(&key_chain)
        .change_context(ApiClientError::CertificateDecodeFailed)
        .attach_printable_lazy(|| {
            format!(
                "invalid PEM identity: {} / {}",
                certificate_path.display(),
                private_key_path.display()
            )
        })
}

pub fn create_identity_from_pkcs12(
    archive_path: &Path,
    passphrase: &str,
) -> CustomResult<reqwest::Identity, ApiClientError> {
    let archive = read_certificate_file(archive_path)?;
    reqwest::Identity::from_pkcs12_der(&archive, passphrase)
        .change_context(ApiClientError::CertificateDecodeFailed)
        .attach_printable_lazy(|| format!("invalid PKCS#12 archive: {}", archive_path.display()))
}

pub fn create_certificate(path: &Path) -> CustomResult<Vec<reqwest::Certificate>, ApiClientError> {
    let bundle = read_certificate_file(path)?;
    reqwest::Certificate::from_pem_bundle(&bundle)
        .change_context(ApiClientError::CertificateDecodeFailed)
        .attach_printable_lazy(|| format!("invalid CA bundle: {}", path.display()))
}

async fn handle_response(
    resp: reqwest::Response,
) -> CustomResult<Result<Response, Response>, ApiClientError> {
    let status_code = resp.status().as_u16();
    let response = resp
        .bytes()
        .await
        .change_context(ApiClientError::ResponseDecodingFailed)?;
    let response = Response {
        response,
        status_code,
    };
    match status_code {
        200..=299 => Ok(Ok(response)),
        _ => Ok(Err(response)),
    }
}

/// Response text with any UTF-8 byte order mark removed.
fn decode_response_text(bytes: &bytes::Bytes) -> CustomResult<String, ApiClientError> {
    let text = std::str::from_utf8(bytes).change_context(ApiClientError::ResponseDecodingFailed)?;
    Ok(text.trim_start_matches('\u{FEFF}').to_owned())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain_types::types::DecodeMode;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn pem_config(certificate_path: &Path, private_key_path: &Path) -> GatewayConfig {
        GatewayConfig {
            base_url: "https://ecomm.pashabank.az:18443/ecomm2/MerchantHandler".to_string(),
            certificate: CertificateConfig::Pem {
                certificate_path: certificate_path.to_path_buf(),
                private_key_path: private_key_path.to_path_buf(),
            },
            ca_certificate_path: None,
            accept_invalid_certs: false,
            request_timeout_secs: Some(5),
            connect_timeout_secs: None,
            response_mode: DecodeMode::Lenient,
        }
    }

    /// Answers a single request with `status` and `body`, returning what was received.
    async fn one_shot_server(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/ecomm2/MerchantHandler", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buffer = [0_u8; 1024];
            loop {
                let read = socket.read(&mut buffer).await.unwrap();
                received.extend_from_slice(&buffer[..read]);
                if read == 0 || request_complete(&received) {
                    break;
                }
            }
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(received).unwrap()
        });
        (url, handle)
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    fn transaction_result_payload() -> Payload {
        let mut payload = Payload::new();
        payload.insert("command", "c");
        payload.insert("trans_id", "abc=");
        payload
    }

    #[test]
    fn missing_certificate_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = pem_config(&dir.path().join("cert.pem"), &dir.path().join("key.pem"));
        let error = create_client(&config).unwrap_err();
        assert_eq!(error.current_context(), &ApiClientError::CertificateDecodeFailed);
    }

    #[test]
    fn garbage_certificate_fails_to_decode() {
        let mut certificate = tempfile::NamedTempFile::new().unwrap();
        writeln!(certificate, "not a certificate").unwrap();
        let mut key = tempfile::NamedTempFile::new().unwrap();
        writeln!(key, "not a key").unwrap();

        let error = create_client(&pem_config(certificate.path(), key.path())).unwrap_err();
        assert_eq!(error.current_context(), &ApiClientError::CertificateDecodeFailed);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let error = HttpTransport::with_client(Client::new(), "not a url").unwrap_err();
        assert_eq!(error.current_context(), &ApiClientError::UrlEncodingFailed);
    }

    #[test]
    fn response_text_drops_byte_order_mark() {
        let bytes = bytes::Bytes::from_static("\u{FEFF}RESULT: OK".as_bytes());
        assert_eq!(decode_response_text(&bytes).unwrap(), "RESULT: OK");

        let invalid = bytes::Bytes::from_static(&[0xff, 0xfe, 0x00]);
        assert_eq!(
            decode_response_text(&invalid).unwrap_err().current_context(),
            &ApiClientError::ResponseDecodingFailed
        );
    }

    #[tokio::test]
    async fn posts_form_encoded_payload_and_returns_text() {
        let (url, server) = one_shot_server("200 OK", "RESULT: OK\nRESULT_CODE: 000").await;
        let transport = HttpTransport::with_client(Client::new(), &url).unwrap();

        let text = transport.send(transaction_result_payload()).await.unwrap();
        assert_eq!(text, "RESULT: OK\nRESULT_CODE: 000");

        let received = server.await.unwrap();
        assert!(received.starts_with("POST /ecomm2/MerchantHandler"));
        assert!(received
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(received.ends_with("command=c&trans_id=abc%3D"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (url, server) = one_shot_server("500 Internal Server Error", "error").await;
        let transport = HttpTransport::with_client(Client::new(), &url).unwrap();

        let error = transport.send(transaction_result_payload()).await.unwrap_err();
        assert_eq!(
            error.current_context(),
            &ApiClientError::UnexpectedServerResponse { status_code: 500 }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_gateway_is_not_sent() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpTransport::with_client(Client::new(), &url).unwrap();
        let error = transport.send(transaction_result_payload()).await.unwrap_err();
        assert!(matches!(
            error.current_context(),
            ApiClientError::RequestNotSent(_)
        ));
    }
}
