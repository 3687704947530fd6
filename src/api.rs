//! HTTP client for the ledger backend.

use crate::config::{self, TOP_LIMIT};
use crate::model::{Category, FundBalances, Person, Summary, TopEntry, Txn, TxnPayload};
use crate::state::TxnFilter;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx; `body` is the server's text, usually a JSON `detail`.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Async fetch state for a single resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Remote<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Remote<T> {
    fn from(r: Result<T, ApiError>) -> Self {
        match r {
            Ok(v) => Remote::Ready(v),
            Err(e) => Remote::Failed(e),
        }
    }
}

pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        config::api_url(&config::api_base(), path)
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let url = Self::url(path);
        log::debug!("GET {url}");
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let url = Self::url(path);
        log::debug!("POST {url}");
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let url = Self::url(path);
        log::debug!("PUT {url}");
        let response = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn delete(path: &str) -> Result<(), ApiError> {
        let url = Self::url(path);
        log::debug!("DELETE {url}");
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let _ack: serde_json::Value = Self::read(response).await?;
        Ok(())
    }

    pub async fn funds() -> Result<FundBalances, ApiError> {
        Self::get("/funds").await
    }

    pub async fn summary(posting: bool) -> Result<Summary, ApiError> {
        Self::get(&format!("/reports/summary?posting={posting}")).await
    }

    pub async fn top_categories(posting: bool) -> Result<Vec<TopEntry>, ApiError> {
        Self::get(&format!("/reports/top-categories?limit={TOP_LIMIT}&posting={posting}")).await
    }

    pub async fn top_people(posting: bool) -> Result<Vec<TopEntry>, ApiError> {
        Self::get(&format!("/reports/top-people?limit={TOP_LIMIT}&posting={posting}")).await
    }

    pub async fn people() -> Result<Vec<Person>, ApiError> {
        Self::get("/people").await
    }

    pub async fn categories() -> Result<Vec<Category>, ApiError> {
        Self::get("/categories").await
    }

    pub async fn list_txns(filter: &TxnFilter) -> Result<Vec<Txn>, ApiError> {
        Self::get(&list_path(filter)).await
    }

    pub async fn get_txn(id: &str) -> Result<Txn, ApiError> {
        Self::get(&txn_path(id)).await
    }

    pub async fn create_txn(payload: &TxnPayload) -> Result<Txn, ApiError> {
        Self::post("/transactions", payload).await
    }

    pub async fn update_txn(id: &str, payload: &TxnPayload) -> Result<Txn, ApiError> {
        Self::put(&txn_path(id), payload).await
    }

    pub async fn delete_txn(id: &str) -> Result<(), ApiError> {
        Self::delete(&txn_path(id)).await
    }
}

fn list_path(filter: &TxnFilter) -> String {
    let query = filter.to_query();
    if query.is_empty() {
        "/transactions".to_string()
    } else {
        format!("/transactions?{query}")
    }
}

fn txn_path(id: &str) -> String {
    format!("/transactions/{}", urlencoding::encode(id))
}
