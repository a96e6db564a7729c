use std::cmp::max;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::Cell;
use crate::food;
use crate::grid::Grid;
use crate::snake::{Snake, Direction, MoveResult, DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    Crashed { at: Cell, score: u64 },
    BoardFull { score: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell>, ate: bool },
    Reset(ResetReason),
}

/// Everything the simulation needs, independent of how it is drawn.
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    pending: Option<Direction>,
    score: u64,
    best: u64,
    rng: StdRng,
}

impl GameState {
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(grid.center(), Direction::Right);
        let mut state = GameState { grid, snake, food: None, pending: None, score: 0, best: 0, rng };
        state.food = food::spawn(&state.grid, &state.snake, &mut state.rng);
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Buffers a turn for the next tick. A later call in the same tick replaces it,
    /// unless it would reverse the current heading.
    pub fn queue_direction(&mut self, dir: Direction) {
        if self.snake.get_direction().is_opposite(dir) {
            debug!("Ignoring reversal to {:?} while heading {:?}", dir, self.snake.get_direction());
            return;
        }
        self.pending = Some(dir);
    }

    pub fn tick(&mut self) -> Tick {
        if let Some(dir) = self.pending.take() {
            if !self.snake.set_direction(dir) {
                debug!("Ignoring reversal to {:?} while heading {:?}", dir, self.snake.get_direction());
            }
        }

        match self.snake.move_step(&self.grid, self.food.unwrap_or(NO_CELL)) {
            MoveResult::Crashed { at } => {
                let reason = ResetReason::Crashed { at, score: self.score };
                debug!("Snake crashed into itself at {:?} with score {}", at, self.score);
                self.reset();
                Tick::Reset(reason)
            }
            MoveResult::Moved { new_head, old_head, old_tail, ate } => {
                if ate {
                    self.score += 1;
                    self.best = max(self.best, self.score);
                    self.food = food::spawn(&self.grid, &self.snake, &mut self.rng);
                    debug!("Ate food at {:?}, score {}, next food {:?}", new_head, self.score, self.food);

                    if self.food.is_none() {
                        let reason = ResetReason::BoardFull { score: self.score };
                        debug!("Snake filled the board with score {}", self.score);
                        self.reset();
                        return Tick::Reset(reason);
                    }
                }
                Tick::Moved { new_head, old_head, old_tail, ate }
            }
        }
    }

    /// Back to a single cell at the center, heading somewhere random, with fresh food.
    pub fn reset(&mut self) {
        let direction = *DIRECTIONS.choose(&mut self.rng).unwrap_or(&Direction::Right);
        self.snake = Snake::new(self.grid.center(), direction);
        self.food = food::spawn(&self.grid, &self.snake, &mut self.rng);
        self.pending = None;
        self.score = 0;
    }
}

// Never on the grid, so a missing food cell can't be eaten.
const NO_CELL: Cell = (u16::MAX, u16::MAX);
