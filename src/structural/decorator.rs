// Decorator: extra behaviour (logging, persistence) wrapped around a
// notifier without touching it. Wrappers are generic, so nesting is
// resolved at compile time; `Box<dyn Notifier>` works too.

use crate::transcript::Transcript;

pub trait Notifier {
    fn send(&self, message: &str) -> Vec<String>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send(&self, message: &str) -> Vec<String> {
        (**self).send(message)
    }
}

pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Vec<String> {
        vec![format!("Sending Email: {message}")]
    }
}

pub struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) -> Vec<String> {
        vec![format!("Sending SMS: {message}")]
    }
}

pub struct PushNotifier;

impl Notifier for PushNotifier {
    fn send(&self, message: &str) -> Vec<String> {
        vec![format!("Sending Push Notification: {message}")]
    }
}

pub struct LoggingDecorator<N>(pub N);

impl<N: Notifier> Notifier for LoggingDecorator<N> {
    fn send(&self, message: &str) -> Vec<String> {
        let mut lines = vec![format!("Logging: {message}")];
        lines.extend(self.0.send(message));
        lines
    }
}

pub struct DatabaseDecorator<N>(pub N);

impl<N: Notifier> Notifier for DatabaseDecorator<N> {
    fn send(&self, message: &str) -> Vec<String> {
        let mut lines = vec![format!("Saving to database: {message}")];
        lines.extend(self.0.send(message));
        lines
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    out.extend(LoggingDecorator(EmailNotifier).send("Hello via Email!"));
    out.extend(DatabaseDecorator(LoggingDecorator(SmsNotifier)).send("Hello via SMS!"));
    out.extend(DatabaseDecorator(PushNotifier).send("Hello via Push Notification!"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_stacking() {
        let mut notifier: Box<dyn Notifier> = Box::new(EmailNotifier);
        notifier = Box::new(LoggingDecorator(notifier));
        notifier = Box::new(DatabaseDecorator(notifier));

        assert_eq!(
            notifier.send("hi"),
            ["Saving to database: hi", "Logging: hi", "Sending Email: hi"]
        );
    }

    #[test]
    fn test_undecorated_notifier() {
        assert_eq!(PushNotifier.send("x"), ["Sending Push Notification: x"]);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Logging: Hello via Email!",
                "Sending Email: Hello via Email!",
                "Saving to database: Hello via SMS!",
                "Logging: Hello via SMS!",
                "Sending SMS: Hello via SMS!",
                "Saving to database: Hello via Push Notification!",
                "Sending Push Notification: Hello via Push Notification!",
            ]
        );
    }
}
