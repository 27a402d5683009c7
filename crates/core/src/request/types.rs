//! HTTP-shaped invocation events.
//!
//! These mirror the API-gateway proxy event and response: camelCase JSON, the
//! request body and response body both carried as serialized strings.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::serde::deserialize_present_map;

/// HTTP verbs the handlers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    /// Exact, case-sensitive match, as the gateway always sends upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unsupported method: {other}")),
        }
    }
}

/// Inbound invocation event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiRequest {
    /// Create a request with only the method set.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            ..Self::default()
        }
    }

    /// Mark path parameters as present, without any values.
    pub fn with_path_parameters(mut self) -> Self {
        self.path_parameters.get_or_insert_with(HashMap::new);
        self
    }

    /// Set the `id` path parameter.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert("id".to_string(), id.into());
        self
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the body from a JSON value.
    pub fn with_json_body(self, body: &Value) -> Self {
        self.with_body(body.to_string())
    }

    /// The parsed method, if it is one we know.
    pub fn method(&self) -> Option<HttpMethod> {
        self.http_method.parse().ok()
    }

    /// The `id` path parameter, if any.
    pub fn path_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get("id"))
            .map(String::as_str)
    }
}

/// Outbound invocation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    fn with_json(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: body.to_string(),
        }
    }

    /// 400 `{"msg": "Bad Request"}`.
    pub fn bad_request() -> Self {
        Self::with_json(400, json!({ "msg": "Bad Request" }))
    }

    /// 201 `{"Message": "Entity created"}`.
    pub fn created() -> Self {
        Self::with_json(201, json!({ "Message": "Entity created" }))
    }

    /// 200 `{"Message": "Entity deleted"}`.
    pub fn deleted() -> Self {
        Self::with_json(200, json!({ "Message": "Entity deleted" }))
    }

    /// 200 with a JSON array of projected payloads.
    pub fn payloads(payloads: Vec<Value>) -> Self {
        Self::with_json(200, Value::Array(payloads))
    }

    /// Parse the body back into JSON.
    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
