//! Error types for order placement.

use common::OrderId;
use domain::ProductId;
use thiserror::Error;

/// Errors that can occur while placing an order.
///
/// These cover the hard failure modes of placement only. Updating and
/// removing an order signal their expected negative outcomes (unknown id,
/// zero quantity) through a boolean return instead, since those are
/// ordinary caller mistakes rather than exceptional states.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Requested quantity must be greater than zero.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Product identifier must not be empty.
    #[error("Invalid product: identifier must not be empty")]
    EmptyProduct,

    /// Inventory reported insufficient stock; no reservation was made.
    #[error("Out of stock: {requested} x {product} not available")]
    OutOfStock { product: ProductId, requested: u32 },

    /// Payment was declined; the stock reservation has been released.
    #[error("Payment failed for order {order_id}")]
    PaymentFailed { order_id: OrderId },
}

/// Convenience type alias for order placement results.
pub type Result<T> = std::result::Result<T, OrderError>;
