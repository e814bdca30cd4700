use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterkit::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn star(cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<Vec2> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = (i as f64 * 36.0).to_radians();
            Vec2::new(cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

fn benchmark_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");

    for (name, r) in [("small", 8), ("medium", 64), ("large", 256)] {
        group.bench_with_input(BenchmarkId::new("circle_outline", name), &r, |b, &r| {
            b.iter(|| circle_outline(black_box(400), black_box(300), r));
        });
        group.bench_with_input(BenchmarkId::new("circle_filled", name), &r, |b, &r| {
            b.iter(|| circle_filled(black_box(400), black_box(300), r));
        });
        group.bench_with_input(BenchmarkId::new("ellipse_filled", name), &r, |b, &r| {
            b.iter(|| ellipse_filled(black_box(400), black_box(300), r, r / 2));
        });
    }

    group.finish();
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    let window = ClipWindow::from_size(WIDTH, HEIGHT);

    group.bench_function("bresenham_diagonal", |b| {
        b.iter(|| line(black_box(0), black_box(0), black_box(799), black_box(599)));
    });

    // A fan of segments crossing the window, most needing clipping.
    let segments: Vec<(f64, f64, f64, f64)> = (0..360)
        .step_by(3)
        .map(|deg| {
            let a = (deg as f64).to_radians();
            (400.0, 300.0, 400.0 + 900.0 * a.cos(), 300.0 + 900.0 * a.sin())
        })
        .collect();

    group.bench_function("cohen_sutherland_fan", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter_map(|&(x1, y1, x2, y2)| clip_line(&window, x1, y1, x2, y2))
                .count()
        });
    });

    group.finish();
}

fn benchmark_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygons");
    let window = ClipWindow::from_size(WIDTH, HEIGHT);

    for (name, polygon) in [
        ("inside", star(400.0, 300.0, 200.0, 80.0)),
        ("straddling", star(780.0, 580.0, 200.0, 80.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &polygon, |b, poly| {
            b.iter(|| polygon_fill(black_box(poly)));
        });
        group.bench_with_input(BenchmarkId::new("sutherland_hodgman", name), &polygon, |b, poly| {
            b.iter(|| clip_polygon(&window, black_box(poly)));
        });
        group.bench_with_input(BenchmarkId::new("clip_then_fill", name), &polygon, |b, poly| {
            b.iter(|| polygon_fill(&clip_polygon(&window, black_box(poly))));
        });
    }

    group.finish();
}

fn benchmark_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas");
    let config = CanvasConfig::default().with_size(WIDTH, HEIGHT);

    // Grid of small triangles drawn through the full pipeline.
    let triangles: Vec<Vec<Vec2>> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f64 * 40.0;
                let y = row as f64 * 30.0;
                vec![Vec2::new(x, y), Vec2::new(x + 35.0, y), Vec2::new(x + 17.5, y + 25.0)]
            })
        })
        .collect();

    group.bench_function("fill_400_triangles", |b| {
        let Ok(mut canvas) = Canvas::new(config) else {
            return;
        };
        b.iter(|| {
            for tri in &triangles {
                canvas.draw_polygon(black_box(tri), PaintStyle::Fill, Color::WHITE);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curves,
    benchmark_lines,
    benchmark_polygons,
    benchmark_canvas
);
criterion_main!(benches);
