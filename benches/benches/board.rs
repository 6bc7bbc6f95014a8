// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_board::testing::RecordingSink;
use easel_board::{Board, ObjectId, VisualObject};
use easel_pixels::Pixmap;
use peniko::Color;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn coord(&mut self, upper_exclusive: u32) -> i32 {
        i32::try_from(self.next_u32() % upper_exclusive).unwrap()
    }
}

fn scattered_board(n: usize, seed: u64) -> (Board<RecordingSink>, Vec<ObjectId>) {
    let mut rng = Lcg::new(seed);
    let mut board = Board::new(RecordingSink::new(1920, 1080));
    let sprite = Pixmap::filled(32, 32, Color::from_rgba8(0, 120, 255, 255));
    let ids = (0..n)
        .map(|_| {
            let x = rng.coord(1920 - 32);
            let y = rng.coord(1080 - 32);
            board.add(VisualObject::new(sprite.clone()).with_position(x, y))
        })
        .collect();
    board.sink_mut().requests.clear();
    (board, ids)
}

fn board_ops(c: &mut Criterion) {
    let mut g = c.benchmark_group("board");

    g.bench_function("locked_moves_1000", |bench| {
        bench.iter_batched(
            || scattered_board(1000, 7),
            |(mut board, ids)| {
                board.lock();
                for (i, id) in ids.iter().enumerate() {
                    let d = i32::try_from(i % 5).unwrap();
                    board.object_mut(*id).unwrap().move_by(d, -d);
                }
                board.unlock();
                black_box(board.sink().requests.len())
            },
            BatchSize::SmallInput,
        );
    });

    let (board, _) = scattered_board(1000, 11);
    g.bench_function("object_at_1000", |bench| {
        let mut rng = Lcg::new(3);
        bench.iter(|| black_box(board.object_at(rng.coord(1920), rng.coord(1080))));
    });

    let (board, _) = scattered_board(200, 13);
    let mut surface = Pixmap::new(1920, 1080);
    g.bench_function("paint_200", |bench| {
        bench.iter(|| board.paint(black_box(&mut surface)));
    });

    g.finish();
}

criterion_group!(benches, board_ops);
criterion_main!(benches);
