//! Order entity implementation.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::value_objects::ProductId;

/// A placed order.
///
/// Constructed unpaid while payment is still pending; an order only becomes
/// visible outside the coordination layer once `mark_paid` has run. The id
/// and product are fixed at construction, the quantity stays mutable for
/// later adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier, assigned at construction.
    id: OrderId,

    /// The ordered product.
    product: ProductId,

    /// Units ordered, always greater than zero.
    quantity: u32,

    /// Whether a payment attempt has succeeded for this order.
    is_paid: bool,
}

impl Order {
    /// Creates a new unpaid order.
    ///
    /// The caller is responsible for validating the product and quantity
    /// beforehand; the entity records what it is given.
    pub fn new(id: OrderId, product: ProductId, quantity: u32) -> Self {
        Self {
            id,
            product,
            quantity,
            is_paid: false,
        }
    }

    /// Returns the order ID.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the ordered product.
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns true if a payment attempt has succeeded.
    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Records a successful payment.
    ///
    /// This transition is one-way; a surviving order never reverts to
    /// unpaid.
    pub fn mark_paid(&mut self) {
        self.is_paid = true;
    }

    /// Replaces the ordered quantity.
    ///
    /// Callers must keep the quantity positive; the order manager rejects
    /// zero before this is reached.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
