use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fsa_shared::Masked;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub amount: f64,
    pub payment_method: String,
    pub details: String,
    pub status: PaymentStatus,
    pub processed_at: DateTime<Utc>,
}

impl PaymentReceipt {
    fn succeeded(strategy: &dyn PaymentStrategy, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            payment_method: strategy.payment_method().to_string(),
            details: strategy.payment_details(),
            status: PaymentStatus::Succeeded,
            processed_at: Utc::now(),
        }
    }
}

/// Simulated gateway round-trip per payment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLatency {
    pub apple_pay: Duration,
    pub credit_card: Duration,
    pub qr: Duration,
}

impl PaymentLatency {
    /// No artificial delay, used by tests and dry runs
    pub fn none() -> Self {
        Self {
            apple_pay: Duration::ZERO,
            credit_card: Duration::ZERO,
            qr: Duration::ZERO,
        }
    }
}

impl Default for PaymentLatency {
    fn default() -> Self {
        Self {
            apple_pay: Duration::from_millis(800),
            credit_card: Duration::from_millis(1000),
            qr: Duration::from_millis(1500),
        }
    }
}

/// Interchangeable payment algorithm selected at checkout
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Charge `amount` dollars
    async fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt>;

    /// Short method name shown to the customer
    fn payment_method(&self) -> &'static str;

    /// Method details with sensitive values truncated
    fn payment_details(&self) -> String;
}

pub struct ApplePayPayment {
    token: Masked<String>,
    device: String,
    latency: Duration,
}

impl ApplePayPayment {
    pub fn new(token: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            token: Masked::new(token.into()),
            device: device.into(),
            latency: PaymentLatency::default().apple_pay,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PaymentStrategy for ApplePayPayment {
    async fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        tracing::info!(
            "Processing Apple Pay payment of ${:.2} from {} (token {}...)",
            amount,
            self.device,
            self.token.prefix(8)
        );
        tokio::time::sleep(self.latency).await;
        Ok(PaymentReceipt::succeeded(self, amount))
    }

    fn payment_method(&self) -> &'static str {
        "Apple Pay"
    }

    fn payment_details(&self) -> String {
        format!("Apple Pay on {} (Token: {}...)", self.device, self.token.prefix(8))
    }
}

pub struct CreditCardPayment {
    card_number: Masked<String>,
    card_holder: String,
    expiry_date: String,
    cvv: Masked<String>,
    latency: Duration,
}

impl CreditCardPayment {
    pub fn new(
        card_number: impl Into<String>,
        card_holder: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: Masked::new(card_number.into()),
            card_holder: card_holder.into(),
            expiry_date: expiry_date.into(),
            cvv: Masked::new(cvv.into()),
            latency: PaymentLatency::default().credit_card,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PaymentStrategy for CreditCardPayment {
    async fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        tracing::info!(
            "Processing Credit Card payment of ${:.2} for {} (card ****{}, exp {})",
            amount,
            self.card_holder,
            self.card_number.suffix(4),
            self.expiry_date
        );
        if self.cvv.expose().trim().is_empty() {
            return Err(CoreError::PaymentFailed("card verification code missing".to_string()));
        }
        tokio::time::sleep(self.latency).await;
        Ok(PaymentReceipt::succeeded(self, amount))
    }

    fn payment_method(&self) -> &'static str {
        "Credit Card"
    }

    fn payment_details(&self) -> String {
        format!("Credit Card - {} (****{})", self.card_holder, self.card_number.suffix(4))
    }
}

pub struct QrPayment {
    qr_code: Masked<String>,
    payment_app: String,
    latency: Duration,
}

impl QrPayment {
    pub fn new(qr_code: impl Into<String>, payment_app: impl Into<String>) -> Self {
        Self {
            qr_code: Masked::new(qr_code.into()),
            payment_app: payment_app.into(),
            latency: PaymentLatency::default().qr,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PaymentStrategy for QrPayment {
    async fn process_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        tracing::info!(
            "Processing QR payment of ${:.2} via {}, waiting for confirmation",
            amount,
            self.payment_app
        );
        tokio::time::sleep(self.latency).await;
        Ok(PaymentReceipt::succeeded(self, amount))
    }

    fn payment_method(&self) -> &'static str {
        "QR Payment"
    }

    fn payment_details(&self) -> String {
        format!("QR Payment via {} (Code: {}...)", self.payment_app, self.qr_code.prefix(10))
    }
}

/// Select a strategy by name ("applepay", "creditcard", "qr") from positional details
pub fn strategy_from_details(
    kind: &str,
    details: &[&str],
    latency: &PaymentLatency,
) -> CoreResult<Arc<dyn PaymentStrategy>> {
    let require = |count: usize, what: &str| -> CoreResult<()> {
        if details.len() < count || details[..count].iter().any(|d| d.trim().is_empty()) {
            return Err(CoreError::ValidationError(format!("{} requires {}", kind, what)));
        }
        Ok(())
    };

    let strategy: Arc<dyn PaymentStrategy> = match kind.to_lowercase().as_str() {
        "applepay" => {
            require(2, "token and device")?;
            Arc::new(ApplePayPayment::new(details[0], details[1]).with_latency(latency.apple_pay))
        }
        "creditcard" => {
            require(4, "number, holder, expiry, and CVV")?;
            Arc::new(
                CreditCardPayment::new(details[0], details[1], details[2], details[3])
                    .with_latency(latency.credit_card),
            )
        }
        "qr" => {
            require(2, "code and app name")?;
            Arc::new(QrPayment::new(details[0], details[1]).with_latency(latency.qr))
        }
        other => {
            return Err(CoreError::ValidationError(format!(
                "Unknown payment type '{}'. Available: applepay, creditcard, qr",
                other
            )))
        }
    };

    Ok(strategy)
}

/// Holds the strategy chosen for the current checkout
#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<Arc<dyn PaymentStrategy>>,
}

impl PaymentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Arc<dyn PaymentStrategy>) {
        tracing::info!("Payment strategy set to: {}", strategy.payment_method());
        self.strategy = Some(strategy);
    }

    pub fn clear(&mut self) {
        self.strategy = None;
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn current_strategy_info(&self) -> String {
        match &self.strategy {
            Some(s) => format!("{} - {}", s.payment_method(), s.payment_details()),
            None => "No payment strategy selected".to_string(),
        }
    }

    pub async fn execute_payment(&self, amount: f64) -> CoreResult<PaymentReceipt> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or_else(|| CoreError::NotConfigured("payment strategy".to_string()))?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::PaymentFailed(format!("invalid amount: {}", amount)));
        }

        tracing::info!(
            "Executing payment: ${:.2} via {} ({})",
            amount,
            strategy.payment_method(),
            strategy.payment_details()
        );
        strategy.process_payment(amount).await
    }
}
