use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::{calculate_move, evaluate, Board, Mark, MoveSpec, SessionRng, Variant};

fn mid_game_board(variant: Variant, moves: usize) -> Board {
    let mut board = Board::new(variant);
    let mut rng = SessionRng::new(17);
    let mut mark = Mark::PlayerA;
    for _ in 0..moves {
        let Some(mv) = calculate_move(&board, variant, &mut rng) else {
            break;
        };
        if board.place(mv, mark).is_err() {
            break;
        }
        mark = if mark == Mark::PlayerA { Mark::PlayerB } else { Mark::PlayerA };
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let tictactoe = mid_game_board(Variant::TicTacToe, 6);
    let connect_four = mid_game_board(Variant::ConnectFour, 20);

    c.bench_function("evaluate_tictactoe", |b| {
        b.iter(|| evaluate(black_box(&tictactoe), Variant::TicTacToe))
    });
    c.bench_function("evaluate_connect_four", |b| {
        b.iter(|| evaluate(black_box(&connect_four), Variant::ConnectFour))
    });
}

fn bench_bot_move(c: &mut Criterion) {
    let board = mid_game_board(Variant::ConnectFour, 12);
    let mut rng = SessionRng::new(3);

    c.bench_function("bot_move_connect_four", |b| {
        b.iter(|| calculate_move(black_box(&board), Variant::ConnectFour, &mut rng))
    });
    c.bench_function("drop_into_column", |b| {
        b.iter(|| {
            let mut board = Board::new(Variant::ConnectFour);
            for col in 0..6 {
                let _ = board.place(MoveSpec::Column(black_box(col)), Mark::PlayerA);
            }
            board
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_bot_move);
criterion_main!(benches);
