use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientConfig, Session};

use crate::error::{classify_status, ApiError, Call};

/// HTTP client bound to one backend and, optionally, one session token.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    /// Anonymous client for the configured backend.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(&config.api.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client carrying the token of `session`, if any.
    pub fn for_session(config: &ClientConfig, session: Option<&Session>) -> Self {
        let client = Self::new(config);
        match session {
            Some(session) => client.with_token(session.token.clone()),
            None => client,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Link to an attachment served by the backend.
    pub fn download_url(&self, file: &str) -> String {
        match reqwest::Url::parse(&self.base_url) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push("download").push(file);
                }
                url.to_string()
            }
            Err(_) => format!("{}/download/{}", self.base_url, file),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;
        tracing::debug!("{method} {path}");
        Ok(self.http.request(method, self.url(path)).bearer_auth(token))
    }

    /// Send the request and turn any non-2xx status into an [`ApiError`].
    async fn dispatch(&self, request: RequestBuilder, call: Call) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = classify_status(status.as_u16(), &body, call);
        tracing::warn!("HTTP {status}: {error}");
        Err(error)
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("Unexpected response body: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        call: Call,
    ) -> Result<T, ApiError> {
        let request = self.authorized(Method::GET, path)?.query(query);
        let response = self.dispatch(request, call).await?;
        Self::decode(response).await
    }

    /// POST whose reply body is optional: an empty or unreadable body gives
    /// `T::default()`.
    pub(crate) async fn post_or_default<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
        call: Call,
    ) -> Result<T, ApiError> {
        let request = self.authorized(Method::POST, path)?.json(body);
        let response = self.dispatch(request, call).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::debug!("Ignoring reply body of {path}: {e}");
            T::default()
        }))
    }

    /// POST whose reply body is ignored.
    pub(crate) async fn submit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        call: Call,
    ) -> Result<(), ApiError> {
        let request = self.authorized(Method::POST, path)?.json(body);
        self.dispatch(request, call).await?;
        Ok(())
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        query: &[(&str, String)],
        call: Call,
    ) -> Result<(), ApiError> {
        let request = self.authorized(Method::DELETE, path)?.query(query);
        self.dispatch(request, call).await?;
        Ok(())
    }

    /// POST without a token, for login and signup.
    pub(crate) async fn post_public<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        call: Call,
    ) -> Result<Response, ApiError> {
        tracing::debug!("POST {path}");
        let request = self.http.post(self.url(path)).json(body);
        self.dispatch(request, call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_encodes_file_name() {
        let client = ApiClient::with_base_url("http://localhost:8080/");
        assert_eq!(
            client.download_url("week 1.pdf"),
            "http://localhost:8080/download/week%201.pdf"
        );
    }

    #[test]
    fn test_download_url_keeps_prefix() {
        let client = ApiClient::with_base_url("https://example.org/api");
        assert_eq!(
            client.download_url("a.zip"),
            "https://example.org/api/download/a.zip"
        );
    }

    #[test]
    fn test_session_token_attached() {
        let config = ClientConfig::default();
        assert!(!ApiClient::for_session(&config, None).has_token());
        assert!(ApiClient::new(&config).with_token("t").has_token());
        assert!(!ApiClient::new(&config).with_token("").has_token());
    }
}
