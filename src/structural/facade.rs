// Facade: one `place_order` call hides the inventory, payment and shipping
// subsystems and the order in which they have to be driven.

use std::collections::HashMap;

use crate::transcript::Transcript;

pub struct InventorySystem {
    stock: HashMap<String, u32>,
}

impl InventorySystem {
    pub fn new() -> Self {
        Self {
            stock: HashMap::new(),
        }
    }

    pub fn with_stock(mut self, product_id: impl Into<String>, quantity: u32) -> Self {
        self.stock.insert(product_id.into(), quantity);
        self
    }

    pub fn available(&self, product_id: &str) -> u32 {
        self.stock.get(product_id).copied().unwrap_or(0)
    }

    pub fn check_stock(&self, product_id: &str, quantity: u32) -> (bool, String) {
        (
            self.available(product_id) >= quantity,
            format!("Checking stock for product: {product_id}"),
        )
    }

    pub fn reduce_stock(&mut self, product_id: &str, quantity: u32) -> String {
        if let Some(level) = self.stock.get_mut(product_id) {
            *level = level.saturating_sub(quantity);
        }
        format!("Reducing stock for product: {product_id} by {quantity}")
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new().with_stock("12345", 10)
    }
}

/// Approves any payment up to `approval_limit`.
pub struct PaymentSystem {
    approval_limit: f64,
}

impl PaymentSystem {
    pub fn new(approval_limit: f64) -> Self {
        Self { approval_limit }
    }

    pub fn process_payment(&self, amount: f64) -> (bool, String) {
        (
            amount > 0.0 && amount <= self.approval_limit,
            format!("Processing payment of ${amount}"),
        )
    }
}

impl Default for PaymentSystem {
    fn default() -> Self {
        Self::new(10_000.0)
    }
}

#[derive(Default)]
pub struct ShippingSystem;

impl ShippingSystem {
    pub fn arrange_shipping(&self, product_id: &str, address: &str) -> String {
        format!("Arranging shipping for product: {product_id} to address: {address}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed,
    OutOfStock,
    PaymentFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub outcome: OrderOutcome,
    pub lines: Vec<String>,
}

#[derive(Default)]
pub struct OrderFacade {
    inventory: InventorySystem,
    payment: PaymentSystem,
    shipping: ShippingSystem,
}

impl OrderFacade {
    pub fn new(inventory: InventorySystem, payment: PaymentSystem) -> Self {
        Self {
            inventory,
            payment,
            shipping: ShippingSystem,
        }
    }

    pub fn inventory(&self) -> &InventorySystem {
        &self.inventory
    }

    pub fn place_order(
        &mut self,
        product_id: &str,
        quantity: u32,
        amount: f64,
        address: &str,
    ) -> OrderReceipt {
        let mut lines = vec!["Placing order...".to_string()];

        let (in_stock, line) = self.inventory.check_stock(product_id, quantity);
        lines.push(line);
        if !in_stock {
            lines.push("Product out of stock!".to_string());
            return OrderReceipt {
                outcome: OrderOutcome::OutOfStock,
                lines,
            };
        }

        let (paid, line) = self.payment.process_payment(amount);
        lines.push(line);
        if !paid {
            lines.push("Payment failed!".to_string());
            return OrderReceipt {
                outcome: OrderOutcome::PaymentFailed,
                lines,
            };
        }

        lines.push(self.inventory.reduce_stock(product_id, quantity));
        lines.push(self.shipping.arrange_shipping(product_id, address));
        lines.push("Order placed successfully!".to_string());
        tracing::debug!(product_id, quantity, "order placed");
        OrderReceipt {
            outcome: OrderOutcome::Placed,
            lines,
        }
    }
}

pub fn demo() -> Transcript {
    let mut facade = OrderFacade::default();
    let receipt = facade.place_order("12345", 1, 100.0, "123 Main St, Anytown, USA");
    receipt.lines.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock() {
        let mut facade = OrderFacade::new(
            InventorySystem::new().with_stock("1", 2),
            PaymentSystem::default(),
        );
        let receipt = facade.place_order("1", 3, 10.0, "here");

        assert_eq!(receipt.outcome, OrderOutcome::OutOfStock);
        assert_eq!(receipt.lines.last().unwrap(), "Product out of stock!");
        assert_eq!(facade.inventory().available("1"), 2);
    }

    #[test]
    fn test_payment_failed_keeps_stock() {
        let mut facade = OrderFacade::new(
            InventorySystem::new().with_stock("1", 5),
            PaymentSystem::new(50.0),
        );
        let receipt = facade.place_order("1", 1, 75.0, "here");

        assert_eq!(receipt.outcome, OrderOutcome::PaymentFailed);
        assert_eq!(receipt.lines.last().unwrap(), "Payment failed!");
        assert_eq!(facade.inventory().available("1"), 5);
    }

    #[test]
    fn test_placed_order_reduces_stock() {
        let mut facade = OrderFacade::default();
        let receipt = facade.place_order("12345", 4, 20.0, "here");
        assert_eq!(receipt.outcome, OrderOutcome::Placed);
        assert_eq!(facade.inventory().available("12345"), 6);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Placing order...",
                "Checking stock for product: 12345",
                "Processing payment of $100",
                "Reducing stock for product: 12345 by 1",
                "Arranging shipping for product: 12345 to address: 123 Main St, Anytown, USA",
                "Order placed successfully!",
            ]
        );
    }
}
