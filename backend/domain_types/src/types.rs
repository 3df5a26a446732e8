use std::{path::PathBuf, time::Duration};

use common_utils::Secret;

/// How strictly response text is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DecodeMode {
    /// Lines without a `Key: Value` separator are skipped.
    #[default]
    Lenient,
    /// The first non blank line without a separator fails the decode.
    Strict,
}

/// Client certificate presented to the merchant handler.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum CertificateConfig {
    /// PEM certificate chain and an unencrypted PEM private key.
    Pem {
        certificate_path: PathBuf,
        private_key_path: PathBuf,
    },
    /// PKCS#12 archive protected by a passphrase.
    Pkcs12 {
        archive_path: PathBuf,
        #[serde(default, deserialize_with = "deserialize_passphrase")]
        passphrase: Secret<String>,
    },
}

// Environment overrides are type-parsed, so an all-digit passphrase arrives as a number.
fn deserialize_passphrase<'de, D>(deserializer: D) -> Result<Secret<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PassphraseVisitor;

    impl<'de> serde::de::Visitor<'de> for PassphraseVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or an integer passphrase")
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.to_owned())
        }

        fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value.to_string())
        }
    }

    deserializer
        .deserialize_any(PassphraseVisitor)
        .map(Secret::new)
}

/// Connection settings of the merchant handler endpoint.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
    pub certificate: CertificateConfig,
    /// Extra root certificate (PEM) trusted for the gateway's server certificate.
    #[serde(default)]
    pub ca_certificate_path: Option<PathBuf>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub response_mode: DecodeMode,
}

impl GatewayConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}
