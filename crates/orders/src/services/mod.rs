//! Collaborator traits and in-memory implementations.
//!
//! The order manager depends on these traits only; concrete inventory,
//! payment, and notification backends live outside the core and are passed
//! in at construction. The in-memory implementations back the test suites
//! and serve as reference collaborators for embedders.

pub mod inventory;
pub mod notification;
pub mod payment;

pub use inventory::{InMemoryInventoryService, InventoryService};
pub use notification::{InMemoryNotificationService, NotificationService};
pub use payment::{InMemoryPaymentService, PaymentService};
