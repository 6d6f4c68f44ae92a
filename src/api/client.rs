use std::time::Duration;

use reqwest::blocking::Client as ReqwestClient;
use reqwest::StatusCode;
use url::Url;

use crate::error::{OrderError, Result};
use crate::models::{OrderPayload, RawMenuItem};

/// Backend operations the order screen depends on.
pub trait OrderApi {
    /// Fetch one menu item by id.
    fn fetch_menu_item(&self, id: u64) -> Result<RawMenuItem>;

    /// Create an order. Any 2xx response counts as success.
    fn create_order(&self, payload: &OrderPayload) -> Result<()>;
}

/// HTTP client for the restaurant API.
pub struct HttpClient {
    client: ReqwestClient,
    base_url: Url,
}

impl HttpClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }
}

impl OrderApi for HttpClient {
    fn fetch_menu_item(&self, id: u64) -> Result<RawMenuItem> {
        let url = self.base_url.join(&format!("/foods/{}", id))?;
        let response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(OrderError::MenuItemNotFound(id)),
            status if !status.is_success() => Err(OrderError::UnexpectedStatus(status.as_u16())),
            _ => {
                let body = response.text()?;
                Ok(serde_json::from_str(&body)?)
            }
        }
    }

    fn create_order(&self, payload: &OrderPayload) -> Result<()> {
        let url = self.base_url.join("/orders")?;
        let response = self.client.post(url).json(payload).send()?;

        if !response.status().is_success() {
            return Err(OrderError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = HttpClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(OrderError::Url(_))));
    }

    #[test]
    fn test_new_accepts_host_without_path() {
        let client = HttpClient::new("http://localhost:3333", Duration::from_secs(5)).unwrap();
        let url = client.base_url.join("/foods/7").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/foods/7");
    }
}
