// Adapter: two third-party payment SDKs with incompatible method names,
// wrapped so the application only talks to `PaymentProcessor`.

use crate::transcript::Transcript;

pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64) -> String;
}

/// Third-party SDK. Its interface can't be changed.
pub struct PayPal;

impl PayPal {
    pub fn send_payment(&self, amount: f64) -> String {
        format!("PayPal: Processing payment of ${amount}")
    }
}

/// Third-party SDK. Its interface can't be changed.
pub struct Stripe;

impl Stripe {
    pub fn make_payment(&self, amount: f64) -> String {
        format!("Stripe: Processing payment of ${amount}")
    }
}

pub struct PayPalAdapter {
    paypal: PayPal,
}

impl PayPalAdapter {
    pub fn new(paypal: PayPal) -> Self {
        Self { paypal }
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.paypal.send_payment(amount)
    }
}

pub struct StripeAdapter {
    stripe: Stripe,
}

impl StripeAdapter {
    pub fn new(stripe: Stripe) -> Self {
        Self { stripe }
    }
}

impl PaymentProcessor for StripeAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.stripe.make_payment(amount)
    }
}

pub fn demo() -> Transcript {
    let processors: Vec<Box<dyn PaymentProcessor>> = vec![
        Box::new(PayPalAdapter::new(PayPal)),
        Box::new(StripeAdapter::new(Stripe)),
    ];
    let amount = 100.0;
    processors
        .iter()
        .map(|processor| processor.process_payment(amount))
        .collect()
}
