//! Payment gateway
//!
//! Checkout talks to the recording backend through [`PaymentGateway`] so
//! the cart logic can be tested against a mock. The HTTP implementation
//! posts to the server's payments endpoint and surfaces its `{"error"}`
//! body on refusal.

use async_trait::async_trait;
use serde::Deserialize;

use shared::models::{Payment, PaymentCreate};

use crate::error::{ClientError, ClientResult};

/// Abstraction over the payment recording backend
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Record one completed checkout; returns the stored payment
    async fn record_payment(&self, payment: PaymentCreate) -> ClientResult<Payment>;
}

/// HTTP gateway against the pos-server REST API
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn record_payment(&self, payment: PaymentCreate) -> ClientResult<Payment> {
        let url = format!("{}/api/payments", self.base_url);
        let response = self.client.post(&url).json(&payment).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("payment rejected with status {status}"),
            };
            tracing::warn!(%status, %message, "payment refused");
            return Err(ClientError::Gateway(message));
        }

        Ok(response.json::<Payment>().await?)
    }
}
