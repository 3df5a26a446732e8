use std::{collections::BTreeMap, fmt};

use common_utils::{Maskable, PeekInterface, RequestContent, Secret};

/// Form fields of a single merchant handler request.
///
/// Built fresh for every call and consumed by the transport. Values of card holder
/// data are kept [`Maskable::Masked`] so the payload can be logged as is.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: BTreeMap<String, Maskable<String>>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(key.into(), Maskable::new_normal(value.into()));
    }

    pub fn insert_masked(&mut self, key: impl Into<String>, value: Secret<String>) {
        self.fields.insert(key.into(), Maskable::new_masked(value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|value| value.peek().as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_masked(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(Maskable::is_masked)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_request_content(self) -> RequestContent {
        RequestContent::FormUrlEncoded(self.fields.into_iter().collect())
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use common_utils::ExposeInterface;

    use super::*;

    #[test]
    fn masked_fields_never_print() {
        let mut payload = Payload::new();
        payload.insert("command", "i");
        payload.insert_masked("cvv2", Secret::new("987".to_string()));

        assert_eq!(payload.get("cvv2"), Some("987"));
        assert!(payload.is_masked("cvv2"));
        assert!(!payload.is_masked("command"));

        let printed = format!("{payload:?}");
        assert!(printed.contains("\"command\": \"i\""));
        assert!(!printed.contains("987"));
    }

    #[test]
    fn later_insert_replaces_value() {
        let mut payload = Payload::new();
        payload.insert("amount", "1");
        payload.insert("amount", "2");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("amount"), Some("2"));
    }

    #[test]
    fn request_content_carries_every_field() {
        let mut payload = Payload::new();
        payload.insert("command", "c");
        payload.insert("trans_id", "abc=");
        let body = payload.into_request_content().get_inner_value().unwrap();
        assert_eq!(body.expose(), "command=c&trans_id=abc%3D");
    }
}
