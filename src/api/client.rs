//! Blocking HTTP client for the logbook API.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::ApiError;

/// Credentialed JSON client over a configurable base URL.
///
/// The cookie store carries the API session across requests, the moral
/// equivalent of the browser's `withCredentials` fetches.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, action: &str) -> String {
        format!("{}{}", self.base_url, action.trim_start_matches('/'))
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        Err(status_error(status, resp))
    }

    /// GET returning the raw JSON value (callers normalize per endpoint).
    pub fn get_json(&self, action: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        debug!(action, "GET");
        let resp = self.send(self.http.get(self.url(action)).query(query))?;
        resp.json().map_err(ApiError::from)
    }

    /// GET decoding straight into `T` for endpoints with a fixed shape.
    pub fn get_typed<T: DeserializeOwned>(&self, action: &str) -> Result<T, ApiError> {
        debug!(action, "GET");
        let resp = self.send(self.http.get(self.url(action)))?;
        resp.json().map_err(ApiError::from)
    }

    pub fn post_json<B: Serialize>(&self, action: &str, body: &B) -> Result<Value, ApiError> {
        debug!(action, "POST");
        let resp = self.send(self.http.post(self.url(action)).json(body))?;
        json_or_null(resp)
    }

    pub fn delete(&self, action: &str) -> Result<Value, ApiError> {
        debug!(action, "DELETE");
        let resp = self.send(self.http.delete(self.url(action)))?;
        json_or_null(resp)
    }

    /// Multipart POST, the distinct path for file uploads.
    pub fn post_multipart(
        &self,
        action: &str,
        fields: &[(&str, String)],
        file_field: &str,
        file_path: &Path,
    ) -> Result<Value, ApiError> {
        debug!(action, file = %file_path.display(), "POST multipart");
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.clone());
        }
        form = form
            .file(file_field.to_string(), file_path)
            .map_err(|e| ApiError::Decode(format!("cannot read upload file: {e}")))?;
        let resp = self.send(self.http.post(self.url(action)).multipart(form))?;
        json_or_null(resp)
    }
}

/// Mutation endpoints sometimes answer with an empty body.
fn json_or_null(resp: Response) -> Result<Value, ApiError> {
    let text = resp.text()?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_error(status: StatusCode, resp: Response) -> ApiError {
    // Prefer the server's {message} body when present.
    let message = resp
        .text()
        .ok()
        .and_then(|t| {
            serde_json::from_str::<Value>(&t)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .or_else(|| if t.is_empty() { None } else { Some(t) })
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    ApiError::Status {
        code: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = ApiClient::new("http://yard.local/api").unwrap();
        assert_eq!(c.base_url(), "http://yard.local/api/");
        assert_eq!(c.url("Projects/GetProject"), "http://yard.local/api/Projects/GetProject");
        assert_eq!(c.url("/Auth/user"), "http://yard.local/api/Auth/user");
    }
}
