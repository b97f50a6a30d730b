// Single Responsibility: one reason to change per type.
// Persistence, pricing and notification live apart; the workflow only wires them.

use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    pub items: Vec<String>,
}

// ============================================================================
// Persistence
// ============================================================================

#[derive(Debug)]
pub struct OrderRepository {
    orders: Vec<Order>,
    next_id: u32,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, customer: &str, items: Vec<String>) -> Order {
        let order = Order {
            id: self.next_id,
            customer: customer.to_string(),
            items,
        };
        self.next_id += 1;
        self.orders.push(order.clone());
        order
    }

    pub fn find(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Pricing
// ============================================================================

pub trait DiscountPolicy {
    fn discount_for(&self, order: &Order) -> u32;
}

pub struct FlatDiscount(pub u32);

impl DiscountPolicy for FlatDiscount {
    fn discount_for(&self, _order: &Order) -> u32 {
        self.0
    }
}

// ============================================================================
// Notification
// ============================================================================

#[derive(Debug, Default)]
pub struct OrderConfirmation;

impl OrderConfirmation {
    pub fn send(&self, order: &Order) -> String {
        format!(
            "Confirmation sent to {} for order #{}",
            order.customer, order.id
        )
    }
}

// ============================================================================
// Workflow
// ============================================================================

pub struct OrderWorkflow<D> {
    repository: OrderRepository,
    discounts: D,
    confirmation: OrderConfirmation,
}

impl<D: DiscountPolicy> OrderWorkflow<D> {
    pub fn new(discounts: D) -> Self {
        Self {
            repository: OrderRepository::new(),
            discounts,
            confirmation: OrderConfirmation,
        }
    }

    pub fn place(&mut self, customer: &str, items: Vec<String>) -> Vec<String> {
        let order = self.repository.create(customer, items);
        let discount = self.discounts.discount_for(&order);
        vec![
            format!(
                "Order #{} saved for {} ({} items)",
                order.id,
                order.customer,
                order.items.len()
            ),
            format!("Discount applied: {discount}"),
            self.confirmation.send(&order),
        ]
    }

    pub fn repository(&self) -> &OrderRepository {
        &self.repository
    }
}

pub fn demo() -> Transcript {
    let mut workflow = OrderWorkflow::new(FlatDiscount(10));
    workflow
        .place("alice", vec!["keyboard".into(), "mouse".into()])
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_assigns_sequential_ids() {
        let mut repo = OrderRepository::new();
        let first = repo.create("alice", vec![]);
        let second = repo.create("bob", vec!["pen".into()]);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find(2).map(|o| o.customer.as_str()), Some("bob"));
        assert!(repo.find(3).is_none());
    }

    #[test]
    fn test_default_repository_starts_at_one() {
        let mut repo = OrderRepository::default();
        assert!(repo.is_empty());
        assert_eq!(repo.create("bob", vec![]).id, 1);
    }

    #[test]
    fn test_discount_policy_is_swappable() {
        struct PerItem;
        impl DiscountPolicy for PerItem {
            fn discount_for(&self, order: &Order) -> u32 {
                order.items.len() as u32 * 5
            }
        }

        let mut workflow = OrderWorkflow::new(PerItem);
        let lines = workflow.place("carol", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(lines[1], "Discount applied: 15");
        assert_eq!(workflow.repository().len(), 1);
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "Order #1 saved for alice (2 items)",
                "Discount applied: 10",
                "Confirmation sent to alice for order #1",
            ]
        );
    }
}
