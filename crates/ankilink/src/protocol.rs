//! Wire envelope for the AnkiConnect protocol.

use serde::{Deserialize, Serialize};

/// The protocol version this client speaks.
pub(crate) const API_VERSION: u8 = 6;

/// A request body: action name, version, optional key, optional params.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a, T> {
    pub action: &'a str,
    pub version: u8,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<'a, T> Request<'a, T> {
    pub fn new(action: &'a str, params: T, api_key: Option<&'a str>) -> Self {
        Self {
            action,
            version: API_VERSION,
            api_key,
            params: Some(params),
        }
    }
}

impl<'a> Request<'a, ()> {
    pub fn without_params(action: &'a str, api_key: Option<&'a str>) -> Self {
        Self {
            action,
            version: API_VERSION,
            api_key,
            params: None,
        }
    }
}

/// A response body: exactly one of `result` and `error` is expected.
#[derive(Debug, Deserialize)]
pub(crate) struct Response<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}
