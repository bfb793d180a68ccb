use super::{ApiClient, ApiError};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

/// Browser `fetch` transport.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        HttpClient
    }

    async fn read(response: Response) -> Result<Value, ApiError> {
        if !response.ok() {
            let body = response.json::<Value>().await.ok();
            return Err(ApiError::from_status(response.status(), body.as_ref()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read(response).await
    }

    async fn patch_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let response = Request::patch(url)
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read(response).await
    }
}
