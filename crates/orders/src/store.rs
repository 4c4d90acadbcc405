//! In-memory order store.

use std::collections::HashMap;

use common::OrderId;
use domain::Order;

/// In-memory collection of live orders.
///
/// Orders are keyed by id for constant-time lookup; a separate index keeps
/// insertion order, which is the order snapshots are returned in.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
    insertion_order: Vec<OrderId>,
}

impl OrderStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an order.
    ///
    /// Ids come from the allocator and are fresh by construction, so an
    /// insert never displaces an existing order.
    pub fn insert(&mut self, order: Order) {
        self.insertion_order.push(order.id());
        self.orders.insert(order.id(), order);
    }

    /// Returns the order with the given id, if present.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Returns a mutable reference to the order with the given id.
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// Removes and returns the order with the given id.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let order = self.orders.remove(&id)?;
        self.insertion_order.retain(|existing| *existing != id);
        Some(order)
    }

    /// Returns a cloned snapshot of all live orders in insertion order.
    pub fn snapshot(&self) -> Vec<Order> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.orders.get(id))
            .cloned()
            .collect()
    }

    /// Returns the number of live orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the store holds no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ProductId;

    fn order(id: u64, product: &str, quantity: u32) -> Order {
        Order::new(OrderId::new(id), ProductId::new(product), quantity)
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = OrderStore::new();
        store.insert(order(1, "Laptop", 1));

        assert_eq!(store.len(), 1);
        let found = store.get(OrderId::new(1)).unwrap();
        assert_eq!(found.product().as_str(), "Laptop");
        assert!(store.get(OrderId::new(2)).is_none());
    }

    #[test]
    fn test_remove_returns_order_and_drops_index() {
        let mut store = OrderStore::new();
        store.insert(order(1, "Laptop", 1));
        store.insert(order(2, "Webcam", 2));

        let removed = store.remove(OrderId::new(1)).unwrap();
        assert_eq!(removed.id(), OrderId::new(1));
        assert!(store.remove(OrderId::new(1)).is_none());

        let ids: Vec<_> = store.snapshot().iter().map(Order::id).collect();
        assert_eq!(ids, vec![OrderId::new(2)]);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut store = OrderStore::new();
        store.insert(order(3, "Keyboard", 1));
        store.insert(order(1, "Laptop", 2));
        store.insert(order(2, "Webcam", 3));

        let ids: Vec<_> = store.snapshot().iter().map(Order::id).collect();
        assert_eq!(
            ids,
            vec![OrderId::new(3), OrderId::new(1), OrderId::new(2)]
        );
    }

    #[test]
    fn test_snapshot_ordering_survives_interleaved_removals() {
        let mut store = OrderStore::new();
        for id in 1..=5 {
            store.insert(order(id, "Widget", 1));
        }
        store.remove(OrderId::new(2));
        store.remove(OrderId::new(4));

        let ids: Vec<_> = store.snapshot().iter().map(Order::id).collect();
        assert_eq!(
            ids,
            vec![OrderId::new(1), OrderId::new(3), OrderId::new(5)]
        );
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = OrderStore::new();
        store.insert(order(1, "Laptop", 1));

        store.get_mut(OrderId::new(1)).unwrap().set_quantity(4);
        assert_eq!(store.get(OrderId::new(1)).unwrap().quantity(), 4);
    }

    #[test]
    fn test_empty_store() {
        let store = OrderStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }
}
