use serde::{Deserialize, Serialize};

/// Outbound delivery for customer alerts
pub trait NotificationChannel: Send + Sync {
    fn send_email(&self, recipient: &str, message: &str);
    fn send_sms(&self, recipient: &str, message: &str);
}

/// Default channel: records each send as a structured log line
#[derive(Debug, Default, Clone, Copy)]
pub struct LogChannel;

impl NotificationChannel for LogChannel {
    fn send_email(&self, recipient: &str, message: &str) {
        tracing::info!(channel = "email", recipient, "{}", message);
    }

    fn send_sms(&self, recipient: &str, message: &str) {
        tracing::info!(channel = "sms", recipient, "{}", message);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self { email: true, sms: false }
    }
}

/// A shopper who can watch products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferences: NotificationPreferences,
    notification_history: Vec<String>,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            preferences: NotificationPreferences::default(),
            notification_history: Vec::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Record the message, then fan out per preferences. SMS needs a phone number on file.
    pub fn update(&mut self, message: &str, channel: &dyn NotificationChannel) {
        self.notification_history.push(message.to_string());

        if self.preferences.email {
            channel.send_email(&self.email, message);
        }

        if self.preferences.sms {
            if let Some(phone) = &self.phone {
                channel.send_sms(phone, message);
            }
        }
    }

    pub fn set_notification_preferences(&mut self, email: bool, sms: bool) {
        self.preferences = NotificationPreferences { email, sms };
        tracing::info!("{} notification preferences updated: email={}, sms={}", self.name, email, sms);
    }

    pub fn notification_history(&self) -> &[String] {
        &self.notification_history
    }

    pub fn notification_count(&self) -> usize {
        self.notification_history.len()
    }

    pub fn clear_notification_history(&mut self) {
        self.notification_history.clear();
    }

    pub fn customer_info(&self) -> String {
        format!(
            "{} ({}) - {}",
            self.name,
            self.email,
            self.phone.as_deref().unwrap_or("Not provided")
        )
    }
}
