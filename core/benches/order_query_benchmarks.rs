use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orderdesk::{summarize, Document, MemoryStore, Order, OrderQuery, OrderRepository};
use serde_json::json;
use tokio::runtime::Runtime;

// --- Fixture: a collection of storefront orders ---
fn make_orders(count: usize) -> Vec<Order> {
  let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
  (0..count)
    .map(|i| {
      let fields = json!({
        "customerName": format!("Customer {}", i),
        "email": format!("customer{}@mail.id", i),
        "productType": if i % 2 == 0 { "kaos" } else { "jaket" },
        "quantity": (i % 12) + 1,
        "totalPrice": 85_000 + (i as u64 % 10) * 5_000,
      });
      let mut order = Order::new(
        format!("MKS{:08}", i),
        fields.as_object().cloned().unwrap_or_default(),
        base + Duration::seconds((i * 37 % count) as i64),
      );
      if i % 4 == 0 {
        order.status = "Completed".to_string();
      }
      order
    })
    .collect()
}

fn bench_in_memory_queries(c: &mut Criterion) {
  let mut group = c.benchmark_group("OrderQuery");
  for &size in &[100usize, 1_000, 10_000] {
    let orders = make_orders(size);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_with_input(BenchmarkId::new("paginate_default", size), &orders, |b, orders| {
      let query = OrderQuery::default();
      b.iter(|| query.paginate(orders.clone()))
    });

    group.bench_with_input(BenchmarkId::new("status_and_search", size), &orders, |b, orders| {
      let query = OrderQuery {
        status: Some("pending".to_string()),
        search: Some("customer1".to_string()),
        ..Default::default()
      };
      b.iter(|| query.select(orders.clone()))
    });

    group.bench_with_input(BenchmarkId::new("dashboard_summary", size), &orders, |b, orders| {
      b.iter(|| summarize(orders))
    });
  }
  group.finish();
}

fn bench_repository_round_trip(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("OrderRepository");
  for &size in &[100usize, 1_000] {
    let value = serde_json::to_value(make_orders(size)).unwrap();
    let store = Arc::new(MemoryStore::new().with_document(Document::Orders, value));
    let repo = OrderRepository::new(store);

    group.bench_function(BenchmarkId::new("list_first_page", size), |b| {
      b.to_async(&rt).iter(|| async { repo.list(&OrderQuery::default()).await.unwrap() })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_in_memory_queries, bench_repository_round_trip);
criterion_main!(benches);
