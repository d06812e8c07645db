use anyhow::{Context, Result};
use rand::prelude::*;
use serde::Serialize;
use tilemerge_core::*;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::Policy;

#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    pub moves: u32,
    pub score: Score,
    pub max_tile: Tile,
    pub outcome: GameOutcome,
}

pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

pub fn autoplay(config: GameConfig, seed: u64, policy: Policy, max_moves: u32) -> GameSummary {
    let mut engine = GridEngine::with_seed(config, seed);
    // keep move choice independent of the spawn stream
    let mut rng = SmallRng::seed_from_u64(seed.rotate_left(32));
    let mut moves = 0;

    while moves < max_moves {
        let legal: Vec<Direction> = engine.legal_moves().collect();
        let direction = match policy {
            _ if legal.is_empty() => break,
            Policy::Random => legal[rng.random_range(0..legal.len())],
            Policy::Cycle => {
                let preferred = Direction::ALL[moves as usize % Direction::ALL.len()];
                if legal.contains(&preferred) {
                    preferred
                } else {
                    legal[0]
                }
            }
        };

        match engine.apply_move(direction) {
            Ok(result) => {
                if result.won {
                    log::info!("Seed {seed} reached {} after {} moves", config.win_value, moves + 1);
                }
            }
            Err(err) => {
                log::warn!("Seed {seed} stopped early: {err}");
                break;
            }
        }
        moves += 1;
    }

    let summary = GameSummary {
        seed,
        moves,
        score: engine.score(),
        max_tile: engine.board().max_tile(),
        outcome: engine.outcome(),
    };
    log::debug!("{summary:?}");
    summary
}

pub fn replay(config: GameConfig, seed: u64, moves: &[String]) -> Result<()> {
    let directions = moves
        .iter()
        .map(|name| {
            Direction::from_key_name(name).with_context(|| format!("unknown move {name:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut engine = GridEngine::with_seed(config, seed);
    println!("seed {seed}\n{}", engine.board());

    for direction in directions {
        match engine.apply_move(direction) {
            Ok(result) if result.has_update() => {
                println!(
                    "{direction}: +{} (score {})\n{}",
                    result.score_delta,
                    engine.score(),
                    engine.board()
                );
            }
            Ok(_) => println!("{direction}: no change\n"),
            Err(GameError::GameOver) => {
                println!("{direction}: game over, start a new game");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("outcome {:?}, score {}", engine.outcome(), engine.score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_is_reproducible() {
        let config = GameConfig::new(3, 256);

        let first = autoplay(config, 17, Policy::Random, 500);
        let second = autoplay(config, 17, Policy::Random, 500);

        assert_eq!(first.moves, second.moves);
        assert_eq!(first.score, second.score);
        assert_eq!(first.max_tile, second.max_tile);
    }

    #[test]
    fn autoplay_respects_move_cap() {
        let summary = autoplay(GameConfig::default(), 3, Policy::Cycle, 5);

        assert_eq!(summary.moves, 5);
        assert_eq!(summary.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn replay_rejects_unknown_moves() {
        let moves = ["left".to_owned(), "sideways".to_owned()];

        let err = replay(GameConfig::default(), 1, &moves).unwrap_err();

        assert!(err.to_string().contains("sideways"));
    }
}
