use crate::*;

/// Turn-based driver owning one board and its score.
///
/// Construction starts a game right away. Each accepted move runs the move
/// resolver, then (only if the board changed) one spawn, after which the
/// outcome is derived from the board again.
#[derive(Clone, Debug)]
pub struct GridEngine<S = RandomSpawner> {
    config: GameConfig,
    board: Board,
    score: Score,
    spawner: S,
}

impl GridEngine<RandomSpawner> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomSpawner::new(seed))
    }
}

impl<S: TileSpawner> GridEngine<S> {
    pub fn new(config: GameConfig, spawner: S) -> Self {
        let mut engine = Self {
            config,
            board: Board::new(config.size),
            score: 0,
            spawner,
        };
        engine.new_game(config);
        engine
    }

    /// Continues from a prepared board with a zero score and no initial spawn.
    pub fn from_board(board: Board, win_value: Tile, spawner: S) -> Self {
        let config = GameConfig::new(board.size(), win_value);
        Self {
            config,
            board,
            score: 0,
            spawner,
        }
    }

    /// Clears the board and score, then places the initial tiles. The config
    /// is normalized the same way as [`GameConfig::new`].
    pub fn new_game(&mut self, config: GameConfig) {
        let config = GameConfig::new(config.size, config.win_value);
        self.config = config;
        self.board = Board::new(config.size);
        self.score = 0;
        for _ in 0..INITIAL_TILES {
            self.board.spawn_tile(&mut self.spawner);
        }
        log::debug!(
            "New {0}x{0} game, playing to {1}",
            self.config.size,
            self.config.win_value
        );
    }

    pub fn restart(&mut self) {
        self.new_game(self.config);
    }

    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveResult> {
        let before = self.outcome();
        if !before.accepts_moves() {
            return Err(GameError::GameOver);
        }

        let summary = self.board.slide(direction, self.config.win_value);
        if !summary.changed {
            log::trace!("Move {direction} changed nothing");
            return Ok(MoveResult::default());
        }

        self.score += summary.score_delta;
        self.board.spawn_tile(&mut self.spawner);
        log::trace!(
            "Move {direction}: +{} points, score {}",
            summary.score_delta,
            self.score
        );

        let after = self.outcome();
        if after != before {
            log::debug!("Outcome {before:?} -> {after:?} at score {}", self.score);
        }

        Ok(MoveResult {
            changed: true,
            score_delta: summary.score_delta,
            won: summary.reached_win,
        })
    }

    /// Parses a key or command name before moving; unknown names leave the
    /// game untouched.
    pub fn apply_key(&mut self, key: &str) -> Result<MoveResult> {
        let direction = Direction::from_key_name(key)?;
        self.apply_move(direction)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.outcome().accepts_moves() && self.board.can_slide(direction)
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_move(direction))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board, self.config.win_value)
    }

    pub fn is_lost(&self) -> bool {
        !self.outcome().accepts_moves()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }
}
