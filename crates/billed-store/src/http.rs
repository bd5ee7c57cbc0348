use async_trait::async_trait;
use billed_core::bill::{Bill, CreateBill, RawBill};
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::{BillStore, StoreError};

/// HTTP client implementation of `BillStore`.
/// Connects to a running billing API.
pub struct HttpStore {
    base_url: String,
    client: Client,
    api_token: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
            api_token: None,
        }
    }

    pub fn with_token(base_url: &str, token: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
            api_token: Some(token),
        }
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let builder = self.client.get(format!("{}{path}", self.base_url));
        let resp = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        handle_response(resp).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let builder = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        handle_response(resp).await
    }

    async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let builder = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        handle_response(resp).await
    }
}

async fn handle_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, StoreError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Transport(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> StoreError {
    let body = resp.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(body);

    if status == StatusCode::NOT_FOUND {
        StoreError::NotFound(msg)
    } else if status == StatusCode::BAD_REQUEST {
        StoreError::InvalidInput(msg)
    } else if status.is_server_error() {
        StoreError::Server(msg)
    } else {
        StoreError::Transport(format!("unexpected status {status}: {msg}"))
    }
}

#[async_trait]
impl BillStore for HttpStore {
    async fn list(&self) -> Result<Vec<RawBill>, StoreError> {
        self.get_json("/bills").await
    }

    async fn create(&self, input: &CreateBill) -> Result<Bill, StoreError> {
        self.post_json("/bills", input).await
    }

    async fn update(&self, bill: &Bill) -> Result<Bill, StoreError> {
        let id = bill
            .id
            .as_deref()
            .ok_or_else(|| StoreError::InvalidInput("bill has no id".into()))?;
        self.put_json(&format!("/bills/{id}"), bill).await
    }
}
