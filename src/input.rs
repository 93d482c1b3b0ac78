#![cfg(feature = "std")]

//! Single-key input: maps key events to game commands.

use crate::common::Direction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;

/// A player command produced by one keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Block until a key maps to a command. Unmapped keys are ignored.
pub fn read_command() -> io::Result<Command> {
    loop {
        if let Event::Key(key) = event::read()? {
            if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                if let Some(command) = command_for(&key) {
                    return Ok(command);
                }
            }
        }
    }
}

/// Map a single key event to a command, case-insensitively.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'r' => Some(Command::Restart),
            'w' => Some(Command::Move(Direction::Up)),
            's' => Some(Command::Move(Direction::Down)),
            'a' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            _ => None,
        },
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
