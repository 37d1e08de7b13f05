use fsa_catalog::customer::NotificationPreferences;
use fsa_catalog::{Customer, LogChannel, NotificationChannel, ObserverRegistry};

/// Registered shoppers plus the channel their alerts go out on.
///
/// Products refer to customers by id only; this directory resolves
/// those ids when a broadcast is delivered.
pub struct CustomerDirectory {
    customers: Vec<Customer>,
    channel: Box<dyn NotificationChannel>,
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::seeded(NotificationPreferences::default(), Box::new(LogChannel))
    }
}

impl CustomerDirectory {
    pub fn new(channel: Box<dyn NotificationChannel>) -> Self {
        Self {
            customers: Vec::new(),
            channel,
        }
    }

    /// Alice, Bob and Carol, each with the given preferences
    pub fn seeded(preferences: NotificationPreferences, channel: Box<dyn NotificationChannel>) -> Self {
        let mut directory = Self::new(channel);
        for (id, name, email) in [
            ("CUST001", "Alice", "alice@email.com"),
            ("CUST002", "Bob", "bob@email.com"),
            ("CUST003", "Carol", "carol@email.com"),
        ] {
            let mut customer = Customer::new(id, name, email);
            customer.preferences = preferences;
            directory.customers.push(customer);
        }
        directory
    }

    /// Adds or replaces the customer with the same id
    pub fn add(&mut self, customer: Customer) {
        match self.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer,
            None => self.customers.push(customer),
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl ObserverRegistry for CustomerDirectory {
    fn deliver(&mut self, observer_id: &str, message: &str) -> bool {
        let channel = self.channel.as_ref();
        match self.customers.iter_mut().find(|c| c.id == observer_id) {
            Some(customer) => {
                customer.update(message, channel);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedChannel(Arc<Mutex<Vec<String>>>);

    impl NotificationChannel for SharedChannel {
        fn send_email(&self, recipient: &str, _message: &str) {
            self.0.lock().unwrap().push(format!("email:{}", recipient));
        }

        fn send_sms(&self, recipient: &str, _message: &str) {
            self.0.lock().unwrap().push(format!("sms:{}", recipient));
        }
    }

    #[test]
    fn test_seeded_directory() {
        let directory = CustomerDirectory::default();

        assert_eq!(directory.len(), 3);
        assert_eq!(directory.find_by_name("Bob").unwrap().id, "CUST002");
        assert_eq!(directory.find_by_id("CUST003").unwrap().name, "Carol");
        assert!(directory.find_by_name("Dave").is_none());
    }

    #[test]
    fn test_deliver_uses_channel_and_history() {
        let channel = SharedChannel::default();
        let mut directory = CustomerDirectory::seeded(NotificationPreferences::default(), Box::new(channel.clone()));

        assert!(directory.deliver("CUST001", "back in stock"));
        assert!(!directory.deliver("CUST999", "nobody home"));

        assert_eq!(directory.find_by_id("CUST001").unwrap().notification_history(), &["back in stock".to_string()]);
        assert_eq!(*channel.0.lock().unwrap(), vec!["email:alice@email.com".to_string()]);
    }

    #[test]
    fn test_seeded_preferences_apply_to_everyone() {
        let prefs = NotificationPreferences { email: false, sms: true };
        let directory = CustomerDirectory::seeded(prefs, Box::new(LogChannel));

        assert!(directory.list().iter().all(|c| c.preferences == prefs));
    }

    #[test]
    fn test_add_replaces_same_id() {
        let mut directory = CustomerDirectory::new(Box::new(LogChannel));
        assert!(directory.is_empty());

        directory.add(Customer::new("CUST010", "Dana", "dana@email.com"));
        directory.add(Customer::new("CUST010", "Dana", "dana@new.com").with_phone("+1-555-0110"));

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find_by_id("CUST010").unwrap().email, "dana@new.com");
    }
}
