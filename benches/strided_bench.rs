use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stridemat::{decompose_lu, Axis, Matrix, MatrixView};

fn bench_view_traversal(c: &mut Criterion) {
    let data: Vec<f64> = (0..256 * 256).map(|i| i as f64).collect();
    let view = MatrixView::from_slice(&data, 256, 256).unwrap();

    c.bench_function("sum_slice_direct", |b| {
        b.iter(|| black_box(&data).iter().sum::<f64>())
    });

    c.bench_function("sum_view_row_major", |b| {
        b.iter(|| {
            black_box(&view)
                .lanes(Axis::Rows)
                .flatten()
                .copied()
                .sum::<f64>()
        })
    });

    c.bench_function("sum_view_transposed", |b| {
        let t = view.transposed();
        b.iter(|| {
            black_box(&t)
                .lanes(Axis::Rows)
                .flatten()
                .copied()
                .sum::<f64>()
        })
    });
}

fn bench_fixed_linalg(c: &mut Criterion) {
    let a: Matrix<f64, 8, 8> = Matrix::from_fn(|r, q| ((r * 8 + q) % 7) as f64 + 1.0);
    let mut d: Matrix<f64, 8, 8> = Matrix::from_fn(|r, q| if r == q { 20.0 } else { 1.0 });
    d = d + a;

    c.bench_function("matmul_8x8", |b| {
        b.iter(|| black_box(&a).matmul(black_box(&a)))
    });

    c.bench_function("lu_8x8", |b| b.iter(|| decompose_lu(black_box(&d))));
}

criterion_group!(benches, bench_view_traversal, bench_fixed_linalg);
criterion_main!(benches);
