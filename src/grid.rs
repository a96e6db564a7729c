use crate::{Cell, TermInt};
use crate::snake::Direction;

/// The fixed playing field. Every edge wraps around to the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
}

impl Grid {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    /// The neighbour of `cell` in `direction`, taken modulo the grid size on each axis.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        (wrap(cell.0, dx, self.width), wrap(cell.1, dy, self.height))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

fn wrap(pos: TermInt, delta: i32, size: TermInt) -> TermInt {
    (pos as i32 + delta).rem_euclid(size as i32) as TermInt
}
