use common::OrderId;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Order, ProductId};
use orders::{
    InMemoryInventoryService, InMemoryNotificationService, InMemoryPaymentService, OrderManager,
    OrderStore,
};

fn populated_store(count: u64) -> OrderStore {
    let mut store = OrderStore::new();
    for id in 1..=count {
        store.insert(Order::new(OrderId::new(id), ProductId::new("SKU-BENCH"), 1));
    }
    store
}

fn bench_store_insert(c: &mut Criterion) {
    c.bench_function("store/insert_1000", |b| {
        b.iter(|| populated_store(1000));
    });
}

fn bench_store_lookup(c: &mut Criterion) {
    let store = populated_store(1000);

    c.bench_function("store/lookup", |b| {
        b.iter(|| store.get(OrderId::new(500)).unwrap().quantity());
    });
}

fn bench_store_snapshot(c: &mut Criterion) {
    let store = populated_store(1000);

    c.bench_function("store/snapshot_1000", |b| {
        b.iter(|| store.snapshot().len());
    });
}

fn bench_place_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("manager/place_order", |b| {
        b.iter(|| {
            rt.block_on(async {
                let inventory = InMemoryInventoryService::new();
                inventory.set_stock("SKU-BENCH", 1);
                let manager = OrderManager::new(
                    inventory,
                    InMemoryPaymentService::new(),
                    InMemoryNotificationService::new(),
                );
                manager
                    .place_order(ProductId::new("SKU-BENCH"), 1)
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_store_insert,
    bench_store_lookup,
    bench_store_snapshot,
    bench_place_order
);
criterion_main!(benches);
