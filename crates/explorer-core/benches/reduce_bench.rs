use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use explorer_core::axis::{AxisRole, Axes, ScaleKind};
use explorer_core::domain::{extent, DataSet};
use explorer_core::downsample::reduced_rows;
use explorer_core::series::{Series, SeriesId};
use explorer_core::table::Table;

fn gen_track(n: usize) -> Rc<Table> {
    let rows = (0..n)
        .map(|i| {
            let t = i as f64;
            // slowly brightening track with a wobble
            vec![t + 1.0, 3.0 + (t * 0.001).sin() + t * 1e-5]
        })
        .collect();
    Rc::new(Table::from_columns("track", vec!["model_number".into(), "log_L".into()], rows).unwrap())
}

fn setup(n: usize, kind: ScaleKind) -> (Axes, Vec<Series>) {
    let table = gen_track(n);
    let mut axes = Axes::default();
    axes.x.column = Some("model_number".into());
    axes.y.column = Some("log_L".into());
    axes.y.kind = kind;
    let s = Series::new(
        SeriesId::new("track", AxisRole::Y, 0, 0),
        table,
        AxisRole::Y,
        Some("model_number".into()),
        Some("log_L".into()),
        axes.y.transform.clone(),
    );
    (axes, vec![s])
}

fn bench_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain");
    for &n in &[10_000usize, 100_000usize] {
        for kind in [ScaleKind::Linear, ScaleKind::Log10] {
            let (axes, series) = setup(n, kind);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{kind:?}")), &n, |b, _| {
                b.iter(|| black_box(extent(DataSet::new(&axes, &series, &[]), AxisRole::Y)));
            });
        }
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let (mut axes, series) = setup(100_000, ScaleKind::Linear);
    axes.x.min = Some(20_000.0);
    axes.x.max = Some(60_000.0);
    for &every in &[1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("every{every}")), &every, |b, &e| {
            b.iter(|| black_box(reduced_rows(DataSet::new(&axes, &series, &[]), &series[0], e).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_domain, bench_reduce);
criterion_main!(benches);
