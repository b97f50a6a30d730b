// Observer: a stock pushes every price change to whoever subscribed,
// in subscription order.

use std::rc::Rc;

use crate::transcript::Transcript;

pub trait Observer {
    fn update(&self, price: f64) -> String;
}

pub trait Subject {
    fn register_observer(&mut self, observer: Rc<dyn Observer>);
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>);
    fn notify_observers(&self) -> Vec<String>;
}

#[derive(Default)]
pub struct Stock {
    observers: Vec<Rc<dyn Observer>>,
    price: f64,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_price(&mut self, price: f64) -> Vec<String> {
        self.price = price;
        self.notify_observers()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for Stock {
    fn register_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes by identity, not by value.
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    fn notify_observers(&self) -> Vec<String> {
        tracing::debug!(price = self.price, observers = self.observers.len(), "notifying");
        self.observers.iter().map(|o| o.update(self.price)).collect()
    }
}

pub struct Investor {
    name: String,
}

impl Investor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for Investor {
    fn update(&self, price: f64) -> String {
        format!(
            "Investor {} is notified about stock price change: ${price}",
            self.name
        )
    }
}

pub struct StockBroker {
    name: String,
}

impl StockBroker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for StockBroker {
    fn update(&self, price: f64) -> String {
        format!(
            "StockBroker {} is notified about stock price change: ${price}",
            self.name
        )
    }
}

pub fn demo() -> Transcript {
    let mut stock = Stock::new();
    let alice: Rc<dyn Observer> = Rc::new(Investor::new("Alice"));
    let bob: Rc<dyn Observer> = Rc::new(Investor::new("Bob"));
    let broker: Rc<dyn Observer> = Rc::new(StockBroker::new("XYZ Brokerage"));

    stock.register_observer(Rc::clone(&alice));
    stock.register_observer(bob);
    stock.register_observer(broker);

    let mut out = Transcript::new();
    out.extend(stock.set_price(100.0));
    out.extend(stock.set_price(150.0));
    stock.remove_observer(&alice);
    out.extend(stock.set_price(200.0));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_is_by_identity() {
        let mut stock = Stock::new();
        let first: Rc<dyn Observer> = Rc::new(Investor::new("Same"));
        let second: Rc<dyn Observer> = Rc::new(Investor::new("Same"));
        stock.register_observer(Rc::clone(&first));
        stock.register_observer(second);

        stock.remove_observer(&first);
        assert_eq!(stock.observer_count(), 1);
        stock.remove_observer(&first);
        assert_eq!(stock.observer_count(), 1);
    }

    #[test]
    fn test_no_observers() {
        let mut stock = Stock::new();
        assert!(stock.set_price(1.5).is_empty());
        assert_eq!(stock.price(), 1.5);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Investor Alice is notified about stock price change: $100",
                "Investor Bob is notified about stock price change: $100",
                "StockBroker XYZ Brokerage is notified about stock price change: $100",
                "Investor Alice is notified about stock price change: $150",
                "Investor Bob is notified about stock price change: $150",
                "StockBroker XYZ Brokerage is notified about stock price change: $150",
                "Investor Bob is notified about stock price change: $200",
                "StockBroker XYZ Brokerage is notified about stock price change: $200",
            ]
        );
    }
}
