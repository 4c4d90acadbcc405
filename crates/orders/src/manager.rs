//! Order manager coordinating placement, update, and removal.

use common::OrderId;
use domain::{Order, ProductId};
use tokio::sync::Mutex;

use crate::error::OrderError;
use crate::ids::OrderIdAllocator;
use crate::services::{InventoryService, NotificationService, PaymentService};
use crate::store::OrderStore;

#[derive(Debug, Default)]
struct ManagerState {
    store: OrderStore,
    ids: OrderIdAllocator,
}

/// Coordinates the order lifecycle against the injected collaborators.
///
/// Placement runs check → reserve → pay → confirm. When payment is declined
/// the stock reservation is released before the failure is surfaced, so
/// inventory ends up exactly where it was before the call. The store and
/// the id allocator are the only mutable state; both sit behind a single
/// mutex held for the whole of each operation, so stock check, reservation,
/// id allocation, and insertion are observed atomically by concurrent
/// callers.
pub struct OrderManager<I, P, N>
where
    I: InventoryService,
    P: PaymentService,
    N: NotificationService,
{
    state: Mutex<ManagerState>,
    inventory: I,
    payment: P,
    notifier: N,
}

impl<I, P, N> OrderManager<I, P, N>
where
    I: InventoryService,
    P: PaymentService,
    N: NotificationService,
{
    /// Creates a new order manager with the given collaborators.
    pub fn new(inventory: I, payment: P, notifier: N) -> Self {
        Self {
            state: Mutex::new(ManagerState::default()),
            inventory,
            payment,
            notifier,
        }
    }

    /// Places an order for `quantity` units of `product`.
    ///
    /// Checks and reserves stock, attempts payment, and on success stores
    /// the order and sends the customer confirmation exactly once. A
    /// declined payment releases the reservation before the error is
    /// returned, so a failed placement leaves inventory untouched.
    ///
    /// # Errors
    ///
    /// - [`OrderError::InvalidQuantity`] if `quantity` is zero; no
    ///   collaborator is touched.
    /// - [`OrderError::EmptyProduct`] if the product identifier is empty;
    ///   no collaborator is touched.
    /// - [`OrderError::OutOfStock`] if inventory reports insufficient
    ///   stock; no reservation is made.
    /// - [`OrderError::PaymentFailed`] if the charge is declined; the
    ///   reservation has been released by the time this is returned.
    #[tracing::instrument(skip(self))]
    pub async fn place_order(
        &self,
        product: ProductId,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        metrics::counter!("order_placements_total").increment(1);
        let placement_start = std::time::Instant::now();

        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }
        if product.is_empty() {
            return Err(OrderError::EmptyProduct);
        }

        let mut state = self.state.lock().await;

        if !self.inventory.check_stock(&product, quantity).await {
            tracing::warn!(%product, quantity, "placement rejected, out of stock");
            return Err(OrderError::OutOfStock {
                product,
                requested: quantity,
            });
        }

        // Provisional reservation, pending payment.
        self.inventory.reduce_stock(&product, quantity).await;

        let id = state.ids.allocate();
        let mut order = Order::new(id, product, quantity);

        if !self.payment.process_payment(&order).await {
            // Release the reservation before surfacing the failure.
            self.inventory
                .increase_stock(order.product(), order.quantity())
                .await;
            metrics::counter!("orders_payment_failed").increment(1);
            tracing::warn!(%id, "payment declined, reservation released");
            return Err(OrderError::PaymentFailed { order_id: id });
        }

        order.mark_paid();
        state.store.insert(order.clone());
        self.notifier.send_confirmation(&order).await;

        let duration = placement_start.elapsed().as_secs_f64();
        metrics::histogram!("order_placement_duration_seconds").record(duration);
        metrics::counter!("orders_placed").increment(1);
        tracing::info!(%id, product = %order.product(), quantity, "order placed");

        Ok(order)
    }

    /// Replaces the quantity of an existing order.
    ///
    /// Returns false when the id is unknown or the new quantity is zero;
    /// the order is left untouched in both cases. The stock reservation is
    /// not adjusted and no re-billing happens; quantity changes are a
    /// record-keeping operation only.
    #[tracing::instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, new_quantity: u32) -> bool {
        if new_quantity == 0 {
            return false;
        }

        let mut state = self.state.lock().await;
        match state.store.get_mut(id) {
            Some(order) => {
                order.set_quantity(new_quantity);
                tracing::info!(%id, new_quantity, "order quantity updated");
                true
            }
            None => false,
        }
    }

    /// Removes an order, handing its reserved stock back to inventory.
    ///
    /// Returns false when the id is unknown. On success the order's current
    /// quantity is released back to the inventory collaborator exactly
    /// once.
    #[tracing::instrument(skip(self))]
    pub async fn remove_order(&self, id: OrderId) -> bool {
        let mut state = self.state.lock().await;
        match state.store.remove(id) {
            Some(order) => {
                self.inventory
                    .increase_stock(order.product(), order.quantity())
                    .await;
                metrics::counter!("orders_removed").increment(1);
                tracing::info!(%id, "order removed, stock released");
                true
            }
            None => false,
        }
    }

    /// Returns a snapshot of all live orders in placement order.
    ///
    /// The snapshot is cloned; mutating it cannot reach the manager's
    /// state.
    pub async fn orders(&self) -> Vec<Order> {
        self.state.lock().await.store.snapshot()
    }

    /// Returns the order with the given id, if it is live.
    pub async fn get_order(&self, id: OrderId) -> Option<Order> {
        self.state.lock().await.store.get(id).cloned()
    }

    /// Returns the number of live orders.
    pub async fn order_count(&self) -> usize {
        self.state.lock().await.store.len()
    }
}
