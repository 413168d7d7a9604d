use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bowling_tracker::core::GameSession;
use bowling_tracker::types::LAST_FRAME;

fn played(rolls: &[&str]) -> GameSession {
    let mut session = GameSession::new();
    for raw in rolls {
        session.submit_next(raw).unwrap();
    }
    session
}

fn bench_running_total(c: &mut Criterion) {
    let session = played(&["10"; 12]);

    c.bench_function("running_total_perfect_game", |b| {
        b.iter(|| black_box(&session).running_total(black_box(LAST_FRAME)))
    });
}

fn bench_full_game_entry(c: &mut Criterion) {
    c.bench_function("enter_full_game", |b| {
        b.iter(|| {
            let mut session = GameSession::new();
            while !session.is_complete() {
                let _ = session.submit_next(black_box("7"));
                let _ = session.submit_next(black_box("3"));
            }
            session.total_score()
        })
    });
}

fn bench_rejected_roll(c: &mut Criterion) {
    let mut session = played(&["7"]);

    c.bench_function("reject_pin_overflow", |b| {
        b.iter(|| session.submit_next(black_box("9")).is_err())
    });
}

fn bench_game_record(c: &mut Criterion) {
    let session = played(&["10"; 12]);

    c.bench_function("to_game_record", |b| {
        b.iter(|| black_box(&session).to_game_record("bench", 1))
    });
}

criterion_group!(
    benches,
    bench_running_total,
    bench_full_game_entry,
    bench_rejected_roll,
    bench_game_record
);
criterion_main!(benches);
