use std::collections::VecDeque;

use crate::Cell;
use crate::grid::Grid;
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

pub const DIRECTIONS: [Direction; 4] = [Up, Down, Left, Right];

impl Direction {
    /// Unit delta `(dx, dy)`, with `y` growing downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell>, ate: bool },
    Crashed { at: Cell },
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    length: usize,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Cell, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![pos]), length: 1, direction }
    }

    /// Builds a snake from explicit cells, head first.
    #[cfg(test)]
    pub fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        Snake { body: cells.iter().copied().collect(), length: cells.len(), direction }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// The recorded length. The body never holds more cells than this.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advances the head one cell, keeping the tail when the new head lands on `food`.
    ///
    /// The tail cell is about to be vacated, so moving into it is not a crash
    /// unless the snake is growing on this move.
    pub fn move_step(&mut self, grid: &Grid, food: Cell) -> MoveResult {
        let old_head = self.head();
        let new_head = grid.step(old_head, self.direction);
        debug_assert!(grid.contains(new_head));
        let ate = new_head == food;

        let vacating = !ate && self.body.len() >= self.length;
        let still_occupied = if vacating { self.body.len() - 1 } else { self.body.len() };
        if self.body.iter().take(still_occupied).any(|c| *c == new_head) {
            return Crashed { at: new_head };
        }

        self.body.push_front(new_head);
        if ate {
            self.length += 1;
        }

        let old_tail = if self.body.len() > self.length { self.body.pop_back() } else { None };
        Moved { new_head, old_head, old_tail, ate }
    }

    /// Turns the snake unless `new_direction` would reverse it onto its neck.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(new_direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FOOD: Cell = (99, 99);

    #[test]
    fn test_opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));
        assert!(!Up.is_opposite(Left));
        assert!(!Up.is_opposite(Up));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = Snake::new((2, 2), Right);
        assert!(!snake.set_direction(Left));
        assert_eq!(snake.get_direction(), Right);
        assert!(snake.set_direction(Up));
        assert_eq!(snake.get_direction(), Up);
        assert_eq!(snake.head_char(), '^');
    }

    #[test]
    fn test_move_shifts_body() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::from_cells(&[(5, 5), (4, 5), (3, 5)], Right);

        let res = snake.move_step(&grid, NO_FOOD);

        assert_eq!(res, Moved { new_head: (6, 5), old_head: (5, 5), old_tail: Some((3, 5)), ate: false });
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), vec![(6, 5), (5, 5), (4, 5)]);
        assert_eq!(snake.length(), 3);
    }

    #[test]
    fn test_move_onto_food_grows() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new((5, 5), Down);

        let res = snake.move_step(&grid, (5, 6));

        assert_eq!(res, Moved { new_head: (5, 6), old_head: (5, 5), old_tail: None, ate: true });
        assert_eq!(snake.length(), 2);
        assert_eq!(snake.body().len(), 2);
    }

    #[test]
    fn test_move_wraps() {
        let grid = Grid::new(4, 4);
        let mut snake = Snake::new((0, 0), Left);
        snake.move_step(&grid, NO_FOOD);
        assert_eq!(snake.head(), (3, 0));
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::new(10, 10);
        // Head at (5,5) moving Up into (5,4), which is still occupied.
        let cells = [(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)];
        let mut snake = Snake::from_cells(&cells, Up);

        assert_eq!(snake.move_step(&grid, NO_FOOD), Crashed { at: (5, 4) });
        assert_eq!(snake.body().len(), 5);
    }

    #[test]
    fn test_chasing_tail_is_not_a_crash() {
        let grid = Grid::new(10, 10);
        // A 2x2 loop: the head moves into the cell the tail leaves.
        let mut snake = Snake::from_cells(&[(1, 1), (2, 1), (2, 2), (1, 2)], Down);

        let res = snake.move_step(&grid, NO_FOOD);

        assert!(matches!(res, Moved { new_head: (1, 2), .. }));
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn test_body_never_exceeds_length() {
        let grid = Grid::new(6, 6);
        let mut snake = Snake::new((0, 0), Right);
        let foods = [(1, 0), (2, 0), (9, 9), (4, 0), (9, 9), (9, 9)];
        for food in foods.iter() {
            snake.move_step(&grid, *food);
            assert!(snake.body().len() <= snake.length());
        }
        assert_eq!(snake.length(), 4);
    }
}
