use std::time::Instant;

use anyhow::Result;
use log::info;

use crate::{Cell, Coords, TermInt};
use crate::config::{self, GameConfig, CELL_WIDTH};
use crate::input::{command_for, Command};
use crate::state::{GameState, ResetReason, Tick};
use crate::term::TermManager;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHARS: [char; 2] = ['(', ')'];

pub struct SnakeGame {
    config: GameConfig,
    term: TermManager,
    state: GameState,
    paused: bool,
}

impl SnakeGame {
    pub fn new(config: GameConfig, term: TermManager) -> Self {
        let state = GameState::new(config.grid, config.seed);
        SnakeGame { config, term, state, paused: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        self.term.setup()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Shows the controls and waits for a key. Returns `false` if that key was a quit.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.draw_board()?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "P or Space to pause",
            "Esc, Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        if command_for(&key) == Command::Quit {
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    /// Runs ticks at the configured rate until the player quits.
    pub fn play(&mut self) -> Result<()> {
        let interval = self.config.tick_interval;
        let mut deadline = Instant::now() + interval;

        loop {
            while let Some(key_ev) = self.term.next_key_before(deadline)? {
                match command_for(&key_ev) {
                    Command::Quit => {
                        info!("Quit requested with score {}, best {}", self.state.score(), self.state.best());
                        return Ok(());
                    }
                    Command::TogglePause => self.toggle_pause()?,
                    Command::Turn(dir) if !self.paused => self.state.queue_direction(dir),
                    _ => {}
                }
            }

            deadline += interval;
            let now = Instant::now();
            if deadline < now {
                deadline = now;
            }

            if self.paused { continue; }

            match self.state.tick() {
                Tick::Moved { new_head, old_head, old_tail, ate } => {
                    self.print_snake_update(new_head, old_head, old_tail)?;
                    if ate {
                        self.print_food()?;
                        self.print_score()?;
                    }
                    self.term.flush()?;
                }
                Tick::Reset(reason) => {
                    match reason {
                        ResetReason::Crashed { at, score } => info!("Crashed at {:?}, final score {}", at, score),
                        ResetReason::BoardFull { score } => info!("Board full, final score {}", score),
                    }
                    self.draw_board()?;
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn board_size(&self) -> Coords {
        let (w, h) = config::board_size(self.state.grid());
        (w as TermInt, h as TermInt)
    }

    fn draw_board(&mut self) -> Result<()> {
        self.term.clear()?;
        let title = self.score_line();
        self.term.draw_borders(self.board_size(), &title)?;

        let snake = self.state.snake();
        let head = snake.head();
        let head_char = snake.head_char();
        let body: Vec<Cell> = snake.body().iter().skip(1).copied().collect();

        for cell in body {
            self.print_cell(cell, [SNAKE_BODY_CHAR; 2])?;
        }
        self.print_cell(head, [head_char; 2])?;
        self.print_food()?;
        self.term.flush()
    }

    fn print_snake_update(&mut self, new_head: Cell, old_head: Cell, old_tail: Option<Cell>) -> Result<()> {
        // The tail goes first: on a tight loop the new head takes its cell
        if let Some(old_tail_pos) = old_tail {
            self.print_cell(old_tail_pos, [' '; 2])?;
        }
        if self.state.snake().length() > 1 {
            self.print_cell(old_head, [SNAKE_BODY_CHAR; 2])?;
        }
        let head_char = self.state.snake().head_char();
        self.print_cell(new_head, [head_char; 2])
    }

    fn print_food(&mut self) -> Result<()> {
        match self.state.food() {
            Some(food) => self.print_cell(food, FOOD_CHARS),
            None => Ok(()),
        }
    }

    fn print_score(&mut self) -> Result<()> {
        let title = self.score_line();
        self.term.print_title(self.board_size(), &title)
    }

    fn score_line(&self) -> String {
        format!("Score: {}  Best: {}", self.state.score(), self.state.best())
    }

    fn print_cell(&mut self, cell: Cell, chars: [char; 2]) -> Result<()> {
        let x = 1 + cell.0 * CELL_WIDTH;
        let y = 1 + cell.1;
        self.term.print_at((x, y), chars[0])?;
        self.term.print_at((x + 1, y), chars[1])
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            info!("Paused");
            self.term.show_message(&["Paused", "P or Space to resume", "Esc to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}
