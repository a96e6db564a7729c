use rand::Rng;
use rand::seq::IteratorRandom;

use crate::Cell;
use crate::grid::Grid;
use crate::snake::Snake;

/// Picks a random grid cell the snake does not occupy, or `None` if the board is full.
pub fn spawn<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    grid.cells().filter(|cell| !snake.occupies(*cell)).choose(rng)
}
