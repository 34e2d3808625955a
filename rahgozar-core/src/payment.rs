use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Flow label used in logs, e.g. `currency_purchase`.
    pub flow: String,
    pub amount_rial: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub amount_rial: i64,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment declined: {0}")]
    Declined(String),
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the user for a confirmed wizard.
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Stand-in gateway: waits for a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        tracing::info!(
            flow = %request.flow,
            amount_rial = request.amount_rial,
            latency_ms = self.latency.as_millis() as u64,
            "processing simulated payment"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(PaymentReceipt {
            reference: Uuid::new_v4(),
            amount_rial: request.amount_rial,
            status: PaymentStatus::Succeeded,
            paid_at: Utc::now(),
        })
    }
}
