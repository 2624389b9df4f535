//! Bunny HTTP request methods

use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{ACCESS_KEY_HEADER, BunnyErrorResponse, BunnyProvider};

impl BunnyProvider {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request, mapping any non-2xx response to a `ProviderError`
    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        context: ErrorContext,
    ) -> Result<String> {
        let request = request.header(ACCESS_KEY_HEADER, &self.access_key);
        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), method, url).await?;

        if (200..300).contains(&status) {
            return Ok(body);
        }

        // 401 and similar responses may have no JSON body
        let parsed: BunnyErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed.message.unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                truncate_for_log(&body)
            }
        });

        let raw = RawApiError::new(message)
            .with_status(status)
            .with_code(parsed.error_key)
            .with_field(parsed.field);
        let err = self.map_error(raw, context);
        log::debug!("[bunny] {method} {url} failed: {err}");
        Err(err)
    }

    /// GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let body = self
            .send(self.client.get(&url), "GET", &url, context)
            .await?;
        HttpUtils::parse_json(&body, self)
    }

    /// PUT request (Bunny creates records with PUT)
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let body_json = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        log::debug!("Request Body: {}", truncate_for_log(&body_json));

        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);
        let response = self.send(request, "PUT", &url, context).await?;
        HttpUtils::parse_json(&response, self)
    }

    /// DELETE request; the body of a success is ignored
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = self.url(path);
        self.send(self.client.delete(&url), "DELETE", &url, context)
            .await
            .map(|_| ())
    }
}
