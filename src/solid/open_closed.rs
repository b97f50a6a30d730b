// Open/Closed: the processor is closed for modification, payment methods
// are open for extension through the trait.

use crate::transcript::Transcript;

pub trait PaymentMethod {
    fn process(&self, amount: f64) -> String;
}

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn process(&self, amount: f64) -> String {
        format!("Processing credit card payment of ${amount}")
    }
}

pub struct PayPalPayment;

impl PaymentMethod for PayPalPayment {
    fn process(&self, amount: f64) -> String {
        format!("Processing PayPal payment of ${amount}")
    }
}

/// Added later without touching `PaymentProcessor`.
pub struct BankTransferPayment {
    pub iban: String,
}

impl PaymentMethod for BankTransferPayment {
    fn process(&self, amount: f64) -> String {
        format!("Processing bank transfer of ${amount} from {}", self.iban)
    }
}

pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn process_payment(&self, method: &dyn PaymentMethod, amount: f64) -> String {
        method.process(amount)
    }
}

pub fn demo() -> Transcript {
    let processor = PaymentProcessor;
    let methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCardPayment),
        Box::new(PayPalPayment),
        Box::new(BankTransferPayment {
            iban: "DE89 3704 0044".to_string(),
        }),
    ];

    methods
        .iter()
        .map(|method| processor.process_payment(method.as_ref(), 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_delegates_to_method() {
        let processor = PaymentProcessor;
        assert_eq!(
            processor.process_payment(&CreditCardPayment, 42.5),
            "Processing credit card payment of $42.5"
        );
        assert_eq!(
            processor.process_payment(&PayPalPayment, 10.0),
            "Processing PayPal payment of $10"
        );
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Processing credit card payment of $100",
                "Processing PayPal payment of $100",
                "Processing bank transfer of $100 from DE89 3704 0044",
            ]
        );
    }
}
