use std::{
    io::Write,
    sync::{Mutex, MutexGuard},
};

use common_utils::{consts::Env, PeekInterface};
use domain_types::types::{CertificateConfig, DecodeMode};
use ecomm_client::{configs::Config, logger::config::LogFormat};

// Tests in this file share the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_pkcs12_gateway_from_file() {
    let _env = lock_env();
    let file = write_config(
        r#"
[common]
environment = "sandbox"

[log.console]
level = "WARN"
log_format = "json"

[gateway]
base_url = "https://ecomm.pashabank.az:18443/ecomm2/MerchantHandler"
response_mode = "strict"

[gateway.certificate]
format = "pkcs12"
archive_path = "certs/merchant.p12"
passphrase = "secret"
"#,
    );

    let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();

    assert_eq!(config.common.environment, Env::Sandbox);
    assert_eq!(config.log.console.log_format, LogFormat::Json);
    assert!(config.log.console.enabled);
    assert_eq!(
        config.gateway.base_url,
        "https://ecomm.pashabank.az:18443/ecomm2/MerchantHandler"
    );
    assert_eq!(config.gateway.response_mode, DecodeMode::Strict);
    assert!(!config.gateway.accept_invalid_certs);
    match &config.gateway.certificate {
        CertificateConfig::Pkcs12 {
            archive_path,
            passphrase,
        } => {
            assert_eq!(archive_path.to_str(), Some("certs/merchant.p12"));
            assert_eq!(passphrase.peek(), "secret");
        }
        other => panic!("unexpected certificate config: {other:?}"),
    }
    assert!(!format!("{:?}", config.gateway).contains("secret"));
}

#[test]
fn environment_overrides_file_values() {
    let _env = lock_env();
    let file = write_config(
        r#"
[gateway]
base_url = "https://ecomm.pashabank.az:18443/ecomm2/MerchantHandler"
request_timeout_secs = 30

[gateway.certificate]
format = "pem"
certificate_path = "certs/merchant.crt"
private_key_path = "certs/merchant.key"
"#,
    );
    std::env::set_var("ECOMM__GATEWAY__REQUEST_TIMEOUT_SECS", "45");

    let config = Config::new_with_config_path(Some(file.path().to_path_buf()));
    std::env::remove_var("ECOMM__GATEWAY__REQUEST_TIMEOUT_SECS");
    let config = config.unwrap();

    assert_eq!(config.gateway.request_timeout_secs, Some(45));
    assert_eq!(config.gateway.response_mode, DecodeMode::Lenient);
    assert!(matches!(
        config.gateway.certificate,
        CertificateConfig::Pem { .. }
    ));
}

#[test]
fn numeric_passphrase_from_environment() {
    let _env = lock_env();
    let file = write_config(
        r#"
[gateway]
base_url = "https://ecomm.pashabank.az:18443/ecomm2/MerchantHandler"

[gateway.certificate]
format = "pkcs12"
archive_path = "certs/merchant.p12"
passphrase = ""
"#,
    );
    std::env::set_var("ECOMM__GATEWAY__CERTIFICATE__PASSPHRASE", "123456");

    let config = Config::new_with_config_path(Some(file.path().to_path_buf()));
    std::env::remove_var("ECOMM__GATEWAY__CERTIFICATE__PASSPHRASE");

    match config.unwrap().gateway.certificate {
        CertificateConfig::Pkcs12 { passphrase, .. } => assert_eq!(passphrase.peek(), "123456"),
        other => panic!("unexpected certificate config: {other:?}"),
    }
}

#[test]
fn missing_gateway_section_is_an_error() {
    let _env = lock_env();
    let file = write_config("[common]\nenvironment = \"development\"\n");
    assert!(Config::new_with_config_path(Some(file.path().to_path_buf())).is_err());
}
