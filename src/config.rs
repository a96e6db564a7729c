use std::time::Duration;

use anyhow::{ensure, Result};

use crate::{Coords, TermInt};
use crate::grid::Grid;

/// A 640x480 board of 20px cells.
pub const DEFAULT_GRID_WIDTH: TermInt = 32;
pub const DEFAULT_GRID_HEIGHT: TermInt = 24;
pub const DEFAULT_TICK_RATE: u32 = 10;
pub const MAX_TICK_RATE: u32 = 60;

/// Each grid cell takes this many terminal columns so it looks square.
pub const CELL_WIDTH: TermInt = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Fills in missing dimensions from the terminal size and checks the board fits.
    pub fn resolve(
        width: Option<TermInt>,
        height: Option<TermInt>,
        tick_rate: u32,
        seed: Option<u64>,
        term_size: Coords,
    ) -> Result<Self> {
        let (term_w, term_h) = term_size;
        let width = width.unwrap_or_else(|| DEFAULT_GRID_WIDTH.min(term_w.saturating_sub(2) / CELL_WIDTH));
        let height = height.unwrap_or_else(|| DEFAULT_GRID_HEIGHT.min(term_h.saturating_sub(2)));

        ensure!(width >= 2 && height >= 2, "grid must be at least 2x2, got {}x{}", width, height);
        ensure!(
            (1..=MAX_TICK_RATE).contains(&tick_rate),
            "tick rate must be between 1 and {} Hz, got {}", MAX_TICK_RATE, tick_rate
        );

        let grid = Grid::new(width, height);
        let (need_w, need_h) = board_size(&grid);
        ensure!(
            need_w <= term_w as u32 && need_h <= term_h as u32,
            "a {}x{} grid needs a {}x{} terminal, this one is {}x{}",
            width, height, need_w, need_h, term_w, term_h
        );

        Ok(GameConfig {
            grid,
            tick_interval: Duration::from_secs(1) / tick_rate,
            seed,
        })
    }
}

/// Terminal columns and rows taken by the grid and its border.
pub fn board_size(grid: &Grid) -> (u32, u32) {
    (grid.width() as u32 * CELL_WIDTH as u32 + 2, grid.height() as u32 + 2)
}
