use std::collections::{hash_map, HashMap};

/// Raw HTTP response handed back by the transport.
#[derive(Clone, Debug)]
pub struct Response {
    pub response: bytes::Bytes,
    pub status_code: u16,
}

/// Fields decoded from the gateway's `Key: Value` response text.
///
/// Keys are whatever the gateway returned. Nothing here judges whether the
/// transaction succeeded, the accessors only look values up.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct GatewayResponse {
    fields: HashMap<String, String>,
}

impl GatewayResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any earlier value of the same key.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.fields.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn result(&self) -> Option<&str> {
        self.get("RESULT")
    }

    pub fn result_code(&self) -> Option<&str> {
        self.get("RESULT_CODE")
    }

    pub fn trans_id(&self) -> Option<&str> {
        self.get("TRANSACTION_ID").or_else(|| self.get("TRANS_ID"))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.fields.iter()
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.fields
    }
}

impl From<HashMap<String, String>> for GatewayResponse {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, String)> for GatewayResponse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GatewayResponse {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
