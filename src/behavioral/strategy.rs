// Strategy: the payment context delegates to whichever payment method
// is plugged in, and the method can be swapped at runtime.

use crate::error::{PatternError, Result};
use crate::transcript::Transcript;

pub trait PaymentStrategy {
    fn pay(&self, amount: f64) -> String;
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount} using Credit Card")
    }
}

pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount} using PayPal")
    }
}

pub struct CryptoPayment;

impl PaymentStrategy for CryptoPayment {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount} using Cryptocurrency")
    }
}

#[derive(Default)]
pub struct PaymentContext {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn execute_payment(&self, amount: f64) -> Result<String> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::MissingStrategy)?;
        Ok(strategy.pay(amount))
    }
}

pub fn demo() -> Transcript {
    let mut context = PaymentContext::new();
    context.set_strategy(Box::new(CreditCardPayment));

    let mut out = Transcript::new();
    match context.execute_payment(100.0) {
        Ok(line) => out.push(line),
        Err(err) => out.push(format!("Error: {err}")),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_can_be_swapped() {
        let mut context = PaymentContext::new();
        context.set_strategy(Box::new(PayPalPayment));
        assert_eq!(context.execute_payment(5.0).unwrap(), "Paid 5 using PayPal");

        context.set_strategy(Box::new(CryptoPayment));
        assert_eq!(
            context.execute_payment(0.25).unwrap(),
            "Paid 0.25 using Cryptocurrency"
        );
    }

    #[test]
    fn test_missing_strategy() {
        let context = PaymentContext::new();
        assert!(matches!(
            context.execute_payment(1.0),
            Err(PatternError::MissingStrategy)
        ));
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(demo().lines(), ["Paid 100 using Credit Card"]);
    }
}
