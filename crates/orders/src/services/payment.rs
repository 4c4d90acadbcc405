//! Payment collaborator trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;
use domain::Order;

/// Trait for payment processing operations.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Attempts to charge for the given order.
    ///
    /// Returns true when the charge went through. The order handed in is
    /// still unpaid at this point; the manager flips the flag only after a
    /// successful attempt.
    async fn process_payment(&self, order: &Order) -> bool;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    charged: Vec<OrderId>,
    attempts: usize,
    fail_on_charge: bool,
}

/// In-memory payment service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to decline charges.
    pub fn set_fail_on_charge(&self, fail: bool) {
        self.state.write().unwrap().fail_on_charge = fail;
    }

    /// Returns the number of successful charges.
    pub fn charge_count(&self) -> usize {
        self.state.read().unwrap().charged.len()
    }

    /// Returns the number of charge attempts, successful or not.
    pub fn attempt_count(&self) -> usize {
        self.state.read().unwrap().attempts
    }

    /// Returns the ids of all successfully charged orders in call order.
    pub fn charged_orders(&self) -> Vec<OrderId> {
        self.state.read().unwrap().charged.clone()
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentService {
    async fn process_payment(&self, order: &Order) -> bool {
        let mut state = self.state.write().unwrap();
        state.attempts += 1;

        if state.fail_on_charge {
            return false;
        }

        state.charged.push(order.id());
        true
    }
}
