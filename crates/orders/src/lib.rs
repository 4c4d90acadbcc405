//! Order lifecycle coordination for the order management workspace.
//!
//! `OrderManager` drives a placement through these steps:
//! 1. Check stock with the inventory collaborator
//! 2. Reserve stock (provisional, pending payment)
//! 3. Attempt payment
//! 4. Store the order and send the customer confirmation
//!
//! If payment is declined the reservation is released before the failure is
//! surfaced, so inventory ends up exactly where it was before the call.
//! Updates and removals work against the stored orders, with removal
//! handing the reserved stock back to the inventory collaborator.

pub mod error;
pub mod ids;
pub mod manager;
pub mod services;
pub mod store;

pub use error::OrderError;
pub use ids::OrderIdAllocator;
pub use manager::OrderManager;
pub use services::{
    InMemoryInventoryService, InMemoryNotificationService, InMemoryPaymentService,
    InventoryService, NotificationService, PaymentService,
};
pub use store::OrderStore;
