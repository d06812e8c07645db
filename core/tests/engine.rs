use tilemerge_core::*;

fn is_valid_board(board: &Board) -> bool {
    board.view().iter().all(|&value| is_valid_tile(value))
}

/// Cycles through the directions, falling back to any legal one.
fn next_direction(engine: &GridEngine, turn: usize) -> Option<Direction> {
    let preferred = Direction::ALL[turn % Direction::ALL.len()];
    if engine.can_move(preferred) {
        Some(preferred)
    } else {
        engine.legal_moves().next()
    }
}

#[test]
fn fresh_game_has_two_small_tiles() {
    for seed in 0..32 {
        let engine = GridEngine::with_seed(GameConfig::default(), seed);
        let board = engine.board();

        assert_eq!(board.size(), 4);
        assert_eq!(board.tile_count(), 2);
        assert!(board.view().iter().all(|&v| matches!(v, 0 | 2 | 4)));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.outcome(), GameOutcome::InProgress);
    }
}

#[test]
fn random_play_keeps_invariants() {
    for seed in 0..8 {
        let mut engine = GridEngine::with_seed(GameConfig::default(), seed);
        let mut merged_total: Score = 0;

        for turn in 0..2_000 {
            let direction = Direction::ALL[(seed as usize + turn * 7) % 4];
            let board_before = engine.board().clone();
            let score_before = engine.score();

            match engine.apply_move(direction) {
                Ok(result) if result.changed => {
                    merged_total += result.score_delta;
                    assert!(engine.score() >= score_before);
                    // slides keep the tile count, each merge removes one, the spawn adds one
                    assert!(engine.board().tile_count() <= board_before.tile_count() + 1);
                }
                Ok(result) => {
                    assert_eq!(result, MoveResult::default());
                    assert_eq!(engine.board(), &board_before);
                    assert_eq!(engine.score(), score_before);
                }
                Err(err) => {
                    assert_eq!(err, GameError::GameOver);
                    assert_eq!(engine.outcome(), GameOutcome::Lost);
                    assert_eq!(engine.board(), &board_before);
                    break;
                }
            }

            assert!(is_valid_board(engine.board()));
            assert_eq!(engine.score(), merged_total);
        }
    }
}

#[test]
fn score_tracks_tile_sum() {
    // every merge adds the merged value while conserving the tile sum, so the
    // sum only grows through spawns
    let mut engine = GridEngine::with_seed(GameConfig::default(), 99);
    let mut spawned = engine.board().tile_sum();

    for turn in 0..500 {
        let Some(direction) = next_direction(&engine, turn) else {
            break;
        };
        let sum_before = engine.board().tile_sum();
        let result = engine.apply_move(direction).unwrap();
        assert!(result.changed);
        let spawned_now = engine.board().tile_sum() - sum_before;
        assert!(matches!(spawned_now, 0 | 2 | 4));
        spawned += spawned_now;
    }

    assert_eq!(engine.board().tile_sum(), spawned);
}

#[test]
fn same_seed_replays_identically() {
    let moves = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Up,
    ];
    let mut first = GridEngine::with_seed(GameConfig::new(5, 256), 1234);
    let mut second = GridEngine::with_seed(GameConfig::new(5, 256), 1234);

    for direction in moves.into_iter().cycle().take(200) {
        assert_eq!(first.apply_move(direction), second.apply_move(direction));
    }

    assert_eq!(first.board(), second.board());
    assert_eq!(first.score(), second.score());
}

#[test]
fn small_games_run_to_a_loss() {
    let config = GameConfig::new(2, 1 << 20);
    for seed in 0..16 {
        let mut engine = GridEngine::with_seed(config, seed);

        let mut turns = 0;
        while let Some(direction) = next_direction(&engine, turns) {
            engine.apply_move(direction).unwrap();
            turns += 1;
            assert!(turns < 10_000);
        }

        assert!(engine.is_lost());
        assert!(engine.board().is_stuck());
        for direction in Direction::ALL {
            assert_eq!(engine.apply_move(direction), Err(GameError::GameOver));
        }
    }
}

#[test]
fn prepared_win_continues_after_2048() {
    let board = Board::from_rows([
        [1024, 1024, 2, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let mut engine = GridEngine::from_board(board, DEFAULT_WIN_VALUE, RandomSpawner::new(3));

    let result = engine.apply_move(Direction::Left).unwrap();

    assert!(result.won);
    assert_eq!(engine.outcome(), GameOutcome::Won);
    assert_eq!(engine.board().value_at((0, 0)), Ok(2048));
    assert_eq!(engine.board().value_at((0, 1)), Ok(2));
    assert!(engine.legal_moves().count() > 0);
}

#[test]
fn outcome_serializes_for_observers() {
    let result = MoveResult {
        changed: true,
        score_delta: 8,
        won: false,
    };

    let json = serde_json::to_string(&(result, GameOutcome::Won, Direction::Left)).unwrap();

    assert_eq!(
        json,
        r#"[{"changed":true,"score_delta":8,"won":false},"Won","Left"]"#
    );
}
