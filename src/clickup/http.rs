use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clickup::error::{ApiError, ApiResult};
use crate::config::Config;

/// HTTP client shared by every API category.
///
/// Paths are given relative to the base URL and include the API version
/// segment, e.g. `/v2/team` or `/v3/workspaces/123/docs`.
pub struct Http {
    base_url: String,
    token: String,
    client: Client,
}

impl Http {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            token: config.api_token.clone(),
            client: Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url).header("Authorization", &self.token)
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url).header("Authorization", &self.token)
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.put(&url).header("Authorization", &self.token)
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .delete(&url)
            .header("Authorization", &self.token)
    }

    /// Deserializes a success body, or surfaces the `err` field ClickUp
    /// puts in non-2xx responses.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("err").and_then(Value::as_str).map(String::from))
                .unwrap_or(body);
            Err(ApiError::Api { status, message })
        }
    }
}

/// Flattens a JSON object into query pairs the ClickUp API accepts.
///
/// Scalars become `key=value`, arrays become repeated `key[]=value`
/// pairs, and nulls are dropped.
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{key}[]");
                for item in items {
                    pairs.push((key.clone(), scalar_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
