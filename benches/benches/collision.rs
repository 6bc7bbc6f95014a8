// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use easel_board::testing::RecordingSink;
use easel_board::{Board, VisualObject};
use easel_pixels::Pixmap;
use peniko::Color;

const OPAQUE: Color = Color::from_rgba8(200, 40, 40, 255);

/// A ring: opaque border, transparent interior, so overlapping rings that do
/// not touch force a full scan of the intersection.
fn ring(size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size, size);
    pixmap.stroke_rect(0, 0, size, size, 1, OPAQUE);
    pixmap
}

fn collision(c: &mut Criterion) {
    let mut g = c.benchmark_group("collision");

    for size in [16_u32, 64, 256] {
        let offset = i32::try_from(size / 4).unwrap();

        let mut board = Board::new(RecordingSink::new(1024, 1024));
        let pixmap = Pixmap::filled(size, size, OPAQUE);
        let a = board.add(VisualObject::new(pixmap.clone()));
        let b = board.add(VisualObject::new(pixmap).with_position(offset, offset));
        g.bench_with_input(BenchmarkId::new("opaque_hit", size), &size, |bench, _| {
            bench.iter(|| black_box(board.collides(a, b)));
        });

        let mut board = Board::new(RecordingSink::new(1024, 1024));
        let outer = board.add(VisualObject::new(ring(size)));
        let inner = board.add(VisualObject::new(ring(size / 2)).with_position(offset, offset));
        g.bench_with_input(BenchmarkId::new("ring_miss", size), &size, |bench, _| {
            bench.iter(|| black_box(board.collides(outer, inner)));
        });
    }

    g.finish();
}

fn detector_on_move(c: &mut Criterion) {
    let mut board = Board::new(RecordingSink::new(1024, 1024));
    let a = board.add(VisualObject::new(Pixmap::filled(64, 64, OPAQUE)));
    let b = board.add(VisualObject::new(Pixmap::filled(64, 64, OPAQUE)).with_position(32, 32));
    board.add_collision_detector(a, b, |first, second| {
        black_box((first, second));
    });

    c.bench_function("move_with_collision_detector", |bench| {
        let mut step = 0_i32;
        bench.iter(|| {
            step = (step + 1) % 16;
            board.object_mut(a).unwrap().move_to(step, step);
            board.sink_mut().requests.clear();
        });
    });
}

criterion_group!(benches, collision, detector_on_move);
criterion_main!(benches);
