//! Criterion benchmark for one full redraw.
//!
//! Run with:
//!   cargo bench -p flambe_view
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flambe_view::prelude::*;

fn bench_render(c: &mut Criterion) {
    let style = RenderStyle::default();
    let mut surface = RecordingSurface::new(400.0, 400.0);

    c.bench_function("render_400x400", |b| {
        b.iter(|| render(&mut surface, black_box(Vector::new(42.0, -17.5)), &style))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
