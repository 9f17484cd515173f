//! Client for the trading backend's HTTP API
//!
//! The backend owns all routing and pricing logic; this client only moves
//! requests and responses across the wire and classifies failures.

pub mod calldata;
pub mod info;
pub mod quotes;

use std::sync::Arc;

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::helpers::handle_http_response;

/// The client for the trading backend
#[derive(Clone)]
pub struct TradeClient {
    /// The base URL for the trading backend
    base_url: String,
    /// The underlying HTTP client
    http_client: Arc<Client>,
}

impl TradeClient {
    /// Create a new client
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, http_client: Arc::new(Client::new()) }
    }

    /// Get a full URL for a given endpoint
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        if params.is_empty() {
            return Url::parse(&url).map_err(|e| e.to_string());
        }

        Url::parse_with_params(&url, params).map_err(|e| e.to_string())
    }

    /// Send a get request to the trading backend
    async fn send_get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, String> {
        let url = self.build_url(endpoint, params)?;
        let response = self.http_client.get(url).send().await.map_err(|e| e.to_string())?;

        handle_http_response(response).await
    }

    /// Send a post request with a JSON body to the trading backend
    async fn send_post_request<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = self.build_url(endpoint, &[])?;
        let response =
            self.http_client.post(url).json(body).send().await.map_err(|e| e.to_string())?;

        handle_http_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that query parameters land on the built URL
    #[test]
    fn test_build_url_with_params() {
        let client = TradeClient::new("https://trade.example.org/bsc-mainnet/".to_string());
        let url = client
            .build_url("backend/api/v1/swap", &[("amountIn", "0.1"), ("assetIn", "USDT")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://trade.example.org/bsc-mainnet/backend/api/v1/swap?amountIn=0.1&assetIn=USDT"
        );
    }

    /// Test that an endpoint without parameters builds a bare URL
    #[test]
    fn test_build_url_without_params() {
        let client = TradeClient::new("https://trade.example.org".to_string());
        let url = client.build_url("api/info", &[]).unwrap();
        assert_eq!(url.as_str(), "https://trade.example.org/api/info");
    }
}
