use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
    Ignore,
}

pub fn command_for(ev: &KeyEvent) -> Command {
    if is_ctrl_c(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Direction::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Direction::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Direction::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Direction::Right),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::Ignore,
    }
}

// Raw mode turns Ctrl+C into an ordinary key press.
fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(&key(KeyCode::Up)), Command::Turn(Direction::Up));
        assert_eq!(command_for(&key(KeyCode::Down)), Command::Turn(Direction::Down));
        assert_eq!(command_for(&key(KeyCode::Left)), Command::Turn(Direction::Left));
        assert_eq!(command_for(&key(KeyCode::Right)), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('w'))), Command::Turn(Direction::Up));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Command::Turn(Direction::Left));
        assert_eq!(command_for(&key(KeyCode::Char('s'))), Command::Turn(Direction::Down));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Command::Turn(Direction::Right));

        let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(command_for(&shifted), Command::Turn(Direction::Up));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(&key(KeyCode::Esc)), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Command::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('c'))), Command::Ignore);
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('p'))), Command::TogglePause);
        assert_eq!(command_for(&key(KeyCode::Char(' '))), Command::TogglePause);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), Command::Ignore);
        assert_eq!(command_for(&key(KeyCode::Enter)), Command::Ignore);
    }
}
