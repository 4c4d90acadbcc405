//! Inventory collaborator trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::ProductId;

/// Trait for inventory operations.
///
/// Availability is reported as a boolean; the two adjustments are
/// fire-and-forget against inventory state owned outside the core.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Returns true if `quantity` units of `product` are available.
    async fn check_stock(&self, product: &ProductId, quantity: u32) -> bool;

    /// Reduces available stock of `product` by `quantity` units.
    async fn reduce_stock(&self, product: &ProductId, quantity: u32);

    /// Increases available stock of `product` by `quantity` units.
    async fn increase_stock(&self, product: &ProductId, quantity: u32);
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    stock: HashMap<ProductId, u32>,
    check_calls: Vec<(ProductId, u32)>,
    reduce_calls: Vec<(ProductId, u32)>,
    increase_calls: Vec<(ProductId, u32)>,
}

/// In-memory inventory ledger for testing.
///
/// Tracks per-product stock levels and records every call it receives so
/// tests can assert on the exact adjustment sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryService {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventoryService {
    /// Creates a new in-memory inventory service with no stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available stock level for a product.
    pub fn set_stock(&self, product: impl Into<ProductId>, quantity: u32) {
        self.state
            .write()
            .unwrap()
            .stock
            .insert(product.into(), quantity);
    }

    /// Returns the current stock level for a product.
    pub fn stock_level(&self, product: &ProductId) -> u32 {
        self.state
            .read()
            .unwrap()
            .stock
            .get(product)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the number of availability checks received.
    pub fn check_count(&self) -> usize {
        self.state.read().unwrap().check_calls.len()
    }

    /// Returns all recorded stock reductions in call order.
    pub fn reduce_calls(&self) -> Vec<(ProductId, u32)> {
        self.state.read().unwrap().reduce_calls.clone()
    }

    /// Returns all recorded stock increases in call order.
    pub fn increase_calls(&self) -> Vec<(ProductId, u32)> {
        self.state.read().unwrap().increase_calls.clone()
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn check_stock(&self, product: &ProductId, quantity: u32) -> bool {
        let mut state = self.state.write().unwrap();
        state.check_calls.push((product.clone(), quantity));
        state.stock.get(product).copied().unwrap_or(0) >= quantity
    }

    async fn reduce_stock(&self, product: &ProductId, quantity: u32) {
        let mut state = self.state.write().unwrap();
        state.reduce_calls.push((product.clone(), quantity));
        if let Some(level) = state.stock.get_mut(product) {
            *level = level.saturating_sub(quantity);
        }
    }

    async fn increase_stock(&self, product: &ProductId, quantity: u32) {
        let mut state = self.state.write().unwrap();
        state.increase_calls.push((product.clone(), quantity));
        *state.stock.entry(product.clone()).or_insert(0) += quantity;
    }
}
