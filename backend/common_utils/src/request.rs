use crate::{
    consts,
    errors::{CustomResult, ParsingError},
    masking::{Maskable, PeekInterface, Secret},
};
use error_stack::ResultExt;

pub type Headers = Vec<(String, Maskable<String>)>;

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

pub enum RequestContent {
    FormUrlEncoded(Vec<(String, Maskable<String>)>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormUrlEncoded(fields) => f
                .debug_tuple("FormUrlEncodedRequestBody")
                .field(fields)
                .finish(),
        }
    }
}

impl RequestContent {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded(_) => consts::FORM_URL_ENCODED,
        }
    }

    /// Encodes the body as it goes on the wire, secrets included.
    pub fn get_inner_value(&self) -> CustomResult<Secret<String>, ParsingError> {
        match self {
            Self::FormUrlEncoded(fields) => {
                let pairs: Vec<(&str, &str)> = fields
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.peek().as_str()))
                    .collect();
                serde_urlencoded::to_string(pairs)
                    .map(Secret::new)
                    .change_context(ParsingError::FormEncodingFailure)
            }
        }
    }
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.push((header.into(), value.into()));
        self
    }

    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        let body = body.into();
        self.headers
            .push((http_content_type().into(), body.content_type().into()));
        self.body.replace(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn http_content_type() -> &'static str {
    "Content-Type"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_is_url_encoded_in_order() {
        let body = RequestContent::FormUrlEncoded(vec![
            ("command".to_string(), "v".into()),
            ("description".to_string(), "order #1 & co".into()),
            ("cvv2".to_string(), Maskable::new_masked(Secret::new("123".to_string()))),
        ]);
        let encoded = body.get_inner_value().unwrap();
        assert_eq!(
            encoded.peek(),
            "command=v&description=order+%231+%26+co&cvv2=123"
        );
        assert!(!format!("{body:?}").contains("123\""));
    }

    #[test]
    fn builder_sets_content_type_with_body() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://gateway.test/MerchantHandler")
            .set_body(RequestContent::FormUrlEncoded(vec![]))
            .build();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers[0].0, "Content-Type");
        assert_eq!(request.headers[0].1.peek(), consts::FORM_URL_ENCODED);
    }
}
