//! Dependency Inversion: high-level policy depends on an abstraction, and the
//! low-level details implement it.
//!
//! The second half is a small SMS application: `SmsNotifier` knows only the
//! `SmsSender` trait, while the Jio and Vodafone gateways are configured from
//! [`SmsGatewayConfig`](crate::config::SmsGatewayConfig).

use crate::config::{CatalogConfig, JioConfig, VodafoneConfig};
use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

// ============================================================================
// Example: Notifications over an abstract message service
// ============================================================================

pub trait MessageService {
    fn send_message(&self, message: &str) -> String;
}

pub struct EmailService;

impl MessageService for EmailService {
    fn send_message(&self, message: &str) -> String {
        format!("Sending email: {message}")
    }
}

pub struct SmsService;

impl MessageService for SmsService {
    fn send_message(&self, message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

/// High-level module. Receives its service instead of constructing one.
pub struct Notification<S> {
    service: S,
}

impl<S: MessageService> Notification<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn send(&self, message: &str) -> String {
        self.service.send_message(message)
    }
}

// ============================================================================
// Example: SMS gateways
// ============================================================================

pub trait SmsSender {
    fn provider(&self) -> &str;
    fn max_recipients(&self) -> usize;
    fn send_message(&self, recipient: &str, message: &str) -> Result<String>;
}

pub struct JioSmsGateway {
    config: JioConfig,
    connection: String,
}

impl JioSmsGateway {
    pub fn connect(config: JioConfig) -> Self {
        let connection = format!(
            "Connected to Jio gateway at {}:{}",
            config.hostname, config.port
        );
        tracing::debug!(retries = config.max_retry, "{connection}");
        Self { config, connection }
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }
}

impl SmsSender for JioSmsGateway {
    fn provider(&self) -> &str {
        "Jio"
    }

    fn max_recipients(&self) -> usize {
        self.config.max_recipients
    }

    fn send_message(&self, recipient: &str, message: &str) -> Result<String> {
        Ok(format!("Sending SMS to {recipient}: {message}"))
    }
}

pub struct VodafoneSmsGateway {
    config: VodafoneConfig,
    connection: String,
}

impl VodafoneSmsGateway {
    pub fn connect(config: VodafoneConfig) -> Self {
        let connection = format!(
            "Connected to Vodafone gateway at {}:{} as {}",
            config.hostname, config.port, config.username
        );
        tracing::debug!(auto_retry = config.auto_retry, "{connection}");
        Self { config, connection }
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }
}

impl SmsSender for VodafoneSmsGateway {
    fn provider(&self) -> &str {
        "Vodafone"
    }

    fn max_recipients(&self) -> usize {
        // Vodafone's API takes a recipient list with no documented cap.
        usize::MAX
    }

    fn send_message(&self, recipient: &str, message: &str) -> Result<String> {
        if self.config.license_key.is_empty() {
            return Err(PatternError::Config(
                "vodafone license key is missing".to_string(),
            ));
        }
        Ok(format!("Sending SMS to {recipient}: {message}"))
    }
}

/// High-level module of the SMS application.
pub struct SmsNotifier<'a> {
    sender: &'a dyn SmsSender,
}

impl<'a> SmsNotifier<'a> {
    pub fn new(sender: &'a dyn SmsSender) -> Self {
        Self { sender }
    }

    pub fn notify(&self, recipient: &str, message: &str) -> Result<String> {
        tracing::debug!(provider = self.sender.provider(), recipient, "sending sms");
        self.sender.send_message(recipient, message)
    }

    pub fn notify_many(&self, recipients: &[&str], message: &str) -> Result<Vec<String>> {
        if recipients.is_empty() {
            return Err(PatternError::NoRecipients);
        }
        let max = self.sender.max_recipients();
        if recipients.len() > max {
            return Err(PatternError::TooManyRecipients {
                count: recipients.len(),
                max,
            });
        }
        recipients
            .iter()
            .map(|recipient| self.notify(recipient, message))
            .collect()
    }
}

pub fn demo(config: &CatalogConfig) -> Transcript {
    let mut out = Transcript::new();

    out.push(Notification::new(EmailService).send("Hello, this is a notification!"));
    out.push(Notification::new(SmsService).send("Hello, this is an SMS notification!"));

    let jio = JioSmsGateway::connect(config.sms.jio.clone());
    let vodafone = VodafoneSmsGateway::connect(config.sms.vodafone.clone());
    out.push(jio.connection());
    out.push(vodafone.connection());

    let sends = [
        (&jio as &dyn SmsSender, "This is a test message via Jio."),
        (&vodafone as &dyn SmsSender, "This is a test message via Vodafone."),
    ];
    for (sender, message) in sends {
        match SmsNotifier::new(sender).notify("9898909999", message) {
            Ok(line) => out.push(line),
            Err(err) => out.push(format!("Error: {err}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSender {
        sent: RefCell<Vec<String>>,
        limit: usize,
    }

    impl SmsSender for RecordingSender {
        fn provider(&self) -> &str {
            "Mock"
        }

        fn max_recipients(&self) -> usize {
            self.limit
        }

        fn send_message(&self, recipient: &str, _message: &str) -> Result<String> {
            self.sent.borrow_mut().push(recipient.to_string());
            Ok(format!("mock -> {recipient}"))
        }
    }

    #[test]
    fn test_notification_uses_injected_service() {
        assert_eq!(
            Notification::new(EmailService).send("hi"),
            "Sending email: hi"
        );
        assert_eq!(Notification::new(SmsService).send("hi"), "Sending SMS: hi");
    }

    #[test]
    fn test_notifier_works_with_any_sender() {
        let mock = RecordingSender {
            sent: RefCell::new(vec![]),
            limit: 5,
        };
        let notifier = SmsNotifier::new(&mock);
        let lines = notifier.notify_many(&["1", "2"], "hello").unwrap();

        assert_eq!(lines, ["mock -> 1", "mock -> 2"]);
        assert_eq!(*mock.sent.borrow(), ["1", "2"]);
    }

    #[test]
    fn test_recipient_limits() {
        let mut config = JioConfig::default();
        config.max_recipients = 1;
        let jio = JioSmsGateway::connect(config);
        let notifier = SmsNotifier::new(&jio);

        assert!(matches!(
            notifier.notify_many(&[], "x"),
            Err(PatternError::NoRecipients)
        ));
        assert!(matches!(
            notifier.notify_many(&["1", "2"], "x"),
            Err(PatternError::TooManyRecipients { count: 2, max: 1 })
        ));
    }

    #[test]
    fn test_vodafone_requires_license() {
        let mut config = VodafoneConfig::default();
        config.license_key.clear();
        let vodafone = VodafoneSmsGateway::connect(config);
        assert!(vodafone.send_message("1", "x").is_err());
    }

    #[test]
    fn test_demo_output() {
        let out = demo(&CatalogConfig::default());
        assert_eq!(
            out.lines(),
            [
                "Sending email: Hello, this is a notification!",
                "Sending SMS: Hello, this is an SMS notification!",
                "Connected to Jio gateway at https://jio.com/sms-gateway:5000",
                "Connected to Vodafone gateway at sock://10.100.34.10:3010 as some-user",
                "Sending SMS to 9898909999: This is a test message via Jio.",
                "Sending SMS to 9898909999: This is a test message via Vodafone.",
            ]
        );
    }
}
