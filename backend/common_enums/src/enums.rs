/// The three-letter ISO 4217 currency code accepted by the merchant gateway.
///
/// The symbolic name is used for configuration and display only. On the wire the
/// gateway expects the numeric code, see [`Currency::iso_4217`].
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    #[default]
    AZN,
    USD,
    EUR,
}

impl Currency {
    pub fn iso_4217(self) -> &'static str {
        match self {
            Self::AZN => "944",
            Self::USD => "840",
            Self::EUR => "978",
        }
    }
}

/// Language of the card holder facing pages rendered by the gateway.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Language {
    AZ,
    #[default]
    EN,
    RU,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::AZ => "AZ",
            Self::EN => "EN",
            Self::RU => "RU",
        }
    }
}

/// Transaction mode tag sent as `msg_type`.
///
/// - `Sms`: single message system, the authorization captures funds immediately.
/// - `Dms`: dual message system, authorization and capture are separate requests.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageType {
    Sms,
    Dms,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Dms => "DMS",
        }
    }
}
