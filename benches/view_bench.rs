//! Benchmarks for filter-and-rank
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use happiness_dashboard::data::{ColumnConfig, Table};
use happiness_dashboard::view::{compute_view, Selection};
use happiness_dashboard::{Dashboard, DashboardSettings};

fn create_test_table(count: usize) -> Table {
    let mut csv = String::from("Overall rank,Country or region,Score,GDP per capita\n");
    for i in 0..count {
        let score = ((i * 7919) % 1000) as f64 / 100.0;
        csv.push_str(&format!("{},Country {},{},{}\n", i + 1, i, score, i as f64 / 10.0));
    }
    Table::from_csv_str(&csv, &ColumnConfig::default()).unwrap()
}

fn bench_compute_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_view");

    for size in [156, 1000, 10000] {
        let table = create_test_table(size);
        let half: Selection = table
            .country_names()
            .into_iter()
            .step_by(2)
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_{}", size), |b| {
            b.iter(|| compute_view(black_box(&table), black_box(&Selection::all())))
        });

        group.bench_function(format!("half_{}", size), |b| {
            b.iter(|| compute_view(black_box(&table), black_box(&half)))
        });
    }

    group.finish();
}

fn bench_dashboard_update(c: &mut Criterion) {
    let dashboard = Dashboard::new(create_test_table(156), DashboardSettings::default());
    let selection = Selection::from_iter(["Country 1", "Country 42", "Country 99"]);

    c.bench_function("dashboard_update_156", |b| {
        b.iter(|| dashboard.update(black_box(&selection)))
    });
}

criterion_group!(benches, bench_compute_view, bench_dashboard_update);
criterion_main!(benches);
