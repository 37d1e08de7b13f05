use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use fsa_core::payment::PaymentLatency;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub store: StoreConfig,
    pub payment: PaymentConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub name: String,
    pub motto: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaymentConfig {
    pub apple_pay_latency_ms: u64,
    pub credit_card_latency_ms: u64,
    pub qr_latency_ms: u64,
}

impl PaymentConfig {
    pub fn latency(&self) -> PaymentLatency {
        PaymentLatency {
            apple_pay: Duration::from_millis(self.apple_pay_latency_ms),
            credit_card: Duration::from_millis(self.credit_card_latency_ms),
            qr: Duration::from_millis(self.qr_latency_ms),
        }
    }
}

/// Preferences given to the seeded customers
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub email_by_default: bool,
    pub sms_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                name: "FSA_Beauty".to_string(),
                motto: "Beauty powered by Design Patterns!".to_string(),
            },
            payment: PaymentConfig {
                apple_pay_latency_ms: 800,
                credit_card_latency_ms: 1000,
                qr_latency_ms: 1500,
            },
            notifications: NotificationConfig {
                email_by_default: true,
                sms_by_default: false,
            },
        }
    }
}

impl Config {
    /// Built-in values every other source overrides
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let d = Config::default();
        config::Config::builder()
            .set_default("store.name", d.store.name)?
            .set_default("store.motto", d.store.motto)?
            .set_default("payment.apple_pay_latency_ms", d.payment.apple_pay_latency_ms)?
            .set_default("payment.credit_card_latency_ms", d.payment.credit_card_latency_ms)?
            .set_default("payment.qr_latency_ms", d.payment.qr_latency_ms)?
            .set_default("notifications.email_by_default", d.notifications.email_by_default)?
            .set_default("notifications.sms_by_default", d.notifications.sms_by_default)
    }

    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/test.toml with zero payment latency
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g. FSA__PAYMENT__QR_LATENCY_MS=0
            .add_source(Environment::with_prefix("FSA").separator("__").try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: Config = Config::defaults().unwrap().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config: Config = Config::defaults()
            .unwrap()
            .set_override("payment.qr_latency_ms", 0u64)
            .unwrap()
            .set_override("store.name", "FSA Outlet")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.store.name, "FSA Outlet");
        assert_eq!(config.payment.latency().qr, Duration::ZERO);
        assert_eq!(config.payment.latency().apple_pay, Duration::from_millis(800));
    }
}
