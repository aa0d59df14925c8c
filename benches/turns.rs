use board_race::core::{BoardConfig, LinearBoardConfig, LudoColor, Token};
use board_race::game::{GameSession, TurnPhase};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn born() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn play_out(session: &mut GameSession) -> u32 {
    let mut rolls = 0;
    while !session.has_winner() {
        session.roll_dice().unwrap();
        if session.phase().unwrap() == TurnPhase::PieceSelection {
            let piece = session.current_game().unwrap().movable_pieces()[0];
            session.select_piece(piece).unwrap();
            session.apply_piece_movement().unwrap();
        }
        rolls += 1;
    }
    rolls
}

fn linear_benchmark(c: &mut Criterion) {
    let config = BoardConfig::Linear(
        LinearBoardConfig::new(100)
            .with_hazard(98, 12)
            .with_hazard(54, 31)
            .with_ladder(4, 40)
            .with_ladder(33, 70),
    );

    c.bench_function("linear game, 4 players", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::with_seed(seed);
            session.new_game(black_box(config.clone())).unwrap();
            for name in ["A", "B", "C", "D"] {
                session.add_player(name, Token::new(name), born()).unwrap();
            }
            play_out(&mut session)
        })
    });
}

fn ludo_benchmark(c: &mut Criterion) {
    c.bench_function("ludo game, 4 players", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::with_seed(seed);
            session.new_game(BoardConfig::Ludo).unwrap();
            for color in LudoColor::ALL {
                session.add_player(color.name(), color, born()).unwrap();
            }
            play_out(&mut session)
        })
    });
}

criterion_group!(benches, linear_benchmark, ludo_benchmark);
criterion_main!(benches);
