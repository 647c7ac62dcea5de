//! Thin per-service HTTP client over `gloo-net`.
//!
//! Each [`ServiceClient`] is bound to one base URL and a fixed set of default
//! headers at construction time. Any non-2xx response or network failure
//! becomes a [`TransportError`]; there are no retries and no timeouts beyond
//! what the browser applies.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::error::TransportError;
use crate::config::{AppConfig, ServiceKind};

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceClient {
    service: ServiceKind,
    base_url: String,
    default_headers: Vec<(&'static str, &'static str)>,
}

impl ServiceClient {
    pub fn new(service: ServiceKind, base_url: impl Into<String>) -> Self {
        Self {
            service,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: vec![(CONTENT_TYPE, JSON)],
        }
    }

    pub fn from_config(config: &AppConfig, service: ServiceKind) -> Self {
        Self::new(service, config.microservices.get(service).base_url.clone())
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }

    /// Absolute URL for a path relative to the service root.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        let response = self
            .with_headers(Request::get(&self.url(path)), true)
            .send()
            .await
            .map_err(|e| self.network(e))?;
        self.decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send_json(path, body).await?;
        self.decode(response).await
    }

    /// POST whose response body is ignored.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), TransportError> {
        self.send_json(path, body).await.map(|_| ())
    }

    /// Multipart POST. The JSON content type is left out so the browser can
    /// set the multipart boundary itself.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, TransportError> {
        let request = self
            .with_headers(Request::post(&self.url(path)), false)
            .body(form)
            .map_err(|e| self.request_error(e))?;
        let response = request.send().await.map_err(|e| self.network(e))?;
        let response = self.check_status(response).await?;
        response.json::<T>().await.map_err(|e| self.decode_error(e))
    }

    pub async fn delete(&self, path: &str) -> Result<(), TransportError> {
        let response = self
            .with_headers(Request::delete(&self.url(path)), true)
            .send()
            .await
            .map_err(|e| self.network(e))?;
        self.check_status(response).await.map(|_| ())
    }

    async fn send_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, TransportError> {
        let request = self
            .with_headers(Request::post(&self.url(path)), true)
            .json(body)
            .map_err(|e| self.request_error(e))?;
        let response = request.send().await.map_err(|e| self.network(e))?;
        self.check_status(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, TransportError> {
        let response = self.check_status(response).await?;
        response.json::<T>().await.map_err(|e| self.decode_error(e))
    }

    async fn check_status(&self, response: Response) -> Result<Response, TransportError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status {
            service: self.service,
            status,
            message: error_message(&body, response.status_text()),
        })
    }

    fn with_headers(&self, mut builder: RequestBuilder, include_content_type: bool) -> RequestBuilder {
        for (name, value) in &self.default_headers {
            if !include_content_type && name.eq_ignore_ascii_case(CONTENT_TYPE) {
                continue;
            }
            builder = builder.header(name, value);
        }
        builder
    }

    fn network(&self, err: gloo_net::Error) -> TransportError {
        TransportError::Network {
            service: self.service,
            message: err.to_string(),
        }
    }

    fn request_error(&self, err: gloo_net::Error) -> TransportError {
        TransportError::Request {
            service: self.service,
            message: err.to_string(),
        }
    }

    fn decode_error(&self, err: gloo_net::Error) -> TransportError {
        TransportError::Decode {
            service: self.service,
            message: err.to_string(),
        }
    }
}

/// Picks the most useful text from an error response: the `message` field of
/// a JSON error body, then the raw body, then the status text.
fn error_message(body: &str, status_text: String) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status_text;
    }
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, Environment};

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ServiceClient::new(ServiceKind::Data, "http://localhost:9090/");
        assert_eq!(client.url("/data/cases"), "http://localhost:9090/data/cases");
        assert_eq!(client.url("data/cases/next-id"), "http://localhost:9090/data/cases/next-id");
    }

    #[test]
    fn clients_are_bound_to_their_own_service() {
        let config = resolve(Environment::Local);
        let search = ServiceClient::from_config(&config, ServiceKind::Search);
        let file = ServiceClient::from_config(&config, ServiceKind::File);

        assert_eq!(search.service(), ServiceKind::Search);
        assert_eq!(search.url("/search/cases"), "http://localhost:9093/search/cases");
        assert_eq!(file.url("/file/upload"), "http://localhost:9091/file/upload");
    }

    #[test]
    fn json_content_type_is_a_default_header() {
        let client = ServiceClient::new(ServiceKind::RefData, "http://x");
        assert_eq!(client.default_headers, vec![("Content-Type", "application/json")]);
    }

    #[test]
    fn error_message_prefers_json_message_field() {
        let body = r#"{"status":400,"message":"amount must be positive"}"#;
        assert_eq!(error_message(body, "Bad Request".into()), "amount must be positive");
    }

    #[test]
    fn error_message_falls_back_to_body_then_status_text() {
        assert_eq!(error_message("gateway down", "Bad Gateway".into()), "gateway down");
        assert_eq!(error_message(r#"{"error":"x"}"#, "Bad Request".into()), r#"{"error":"x"}"#);
        assert_eq!(error_message("  ", "Not Found".into()), "Not Found");
    }
}
