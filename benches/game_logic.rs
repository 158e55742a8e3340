use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_starfield::core::types::{Controls, GameConfig};
use tui_starfield::core::{Frame, ObstacleRegistry, Sprites};
use tui_starfield::engine::Game;
use tui_starfield::term::{encode_diff_into, FrameBuffer};

fn sprites() -> Sprites {
    Sprites {
        rocket: vec![
            Frame::from_text("  .\n .'.\n |o|\n.'o'.\n|.-.|"),
            Frame::from_text("  .\n .'.\n |o|\n.'o'.\n|.-.|\n  )"),
        ]
        .into(),
        debris: vec![
            Rc::new(Frame::from_text("(_)")),
            Rc::new(Frame::from_text("  ___\n /   \\\n \\___/")),
        ],
        game_over: Rc::new(Frame::from_text("GAME OVER")),
    }
}

fn bench_tick(c: &mut Criterion) {
    let config = GameConfig {
        seed: 12345,
        start_year: 2040,
        ..GameConfig::default()
    };
    let mut game = Game::new(&config, &sprites(), 24, 80).unwrap();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("scheduler_tick_80x24", |b| {
        b.iter(|| {
            game.tick(black_box(Controls::default()), &mut fb).unwrap();
        })
    });
}

fn bench_overlaps(c: &mut Criterion) {
    let mut registry = ObstacleRegistry::new();
    for i in 0..64 {
        registry.register(f64::from(i % 20), f64::from(i), 3, 6);
    }

    c.bench_function("overlaps_64_obstacles", |b| {
        b.iter(|| registry.overlaps(black_box(10.0), black_box(30.0), 7, 5))
    });
}

fn bench_diff_encode(c: &mut Criterion) {
    let prev = FrameBuffer::new(80, 24);
    let mut next = FrameBuffer::new(80, 24);
    next.draw_border();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_80x24", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_tick, bench_overlaps, bench_diff_encode);
criterion_main!(benches);
