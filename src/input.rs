use ggez::input::keyboard::{KeyCode, KeyboardContext};

use crate::grid::Direction;

/// Key state sampled once per frame.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

impl InputSnapshot {
    pub fn from_keyboard(keyboard: &KeyboardContext) -> Self {
        InputSnapshot {
            up: keyboard.is_key_pressed(KeyCode::Up),
            down: keyboard.is_key_pressed(KeyCode::Down),
            left: keyboard.is_key_pressed(KeyCode::Left),
            right: keyboard.is_key_pressed(KeyCode::Right),
            confirm: keyboard.is_key_pressed(KeyCode::Return)
                || keyboard.is_key_pressed(KeyCode::NumpadEnter),
        }
    }

    pub fn confirm() -> Self {
        InputSnapshot { confirm: true, ..Default::default() }
    }

    pub fn direction(direction: Direction) -> Self {
        let mut snapshot = InputSnapshot::default();
        match direction {
            Direction::Up => snapshot.up = true,
            Direction::Down => snapshot.down = true,
            Direction::Left => snapshot.left = true,
            Direction::Right => snapshot.right = true,
        }
        snapshot
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// First held direction, in `Direction::ALL` order, that does not reverse `current`.
    pub fn turn(&self, current: Direction) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.is_pressed(d) && d != current.opposite())
    }
}
