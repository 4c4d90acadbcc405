//! Notification collaborator trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::Order;

/// Trait for customer notification operations.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Sends an order confirmation to the customer.
    ///
    /// Fire-and-forget from the manager's perspective; delivery failures
    /// stay inside the collaborator and are never surfaced to the core.
    async fn send_confirmation(&self, order: &Order);
}

#[derive(Debug, Default)]
struct InMemoryNotificationState {
    confirmations: Vec<OrderId>,
}

/// In-memory notification service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationService {
    state: Arc<RwLock<InMemoryNotificationState>>,
}

impl InMemoryNotificationService {
    /// Creates a new in-memory notification service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of confirmations sent.
    pub fn confirmation_count(&self) -> usize {
        self.state.read().unwrap().confirmations.len()
    }

    /// Returns the ids of all confirmed orders in call order.
    pub fn confirmed_orders(&self) -> Vec<OrderId> {
        self.state.read().unwrap().confirmations.clone()
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationService {
    async fn send_confirmation(&self, order: &Order) {
        self.state.write().unwrap().confirmations.push(order.id());
    }
}
