#![cfg(feature = "std")]

//! Character-cell rendering of the board over `crossterm`.
//!
//! The grid is drawn as a bordered box of `+`, `-` and `|` characters
//! with 5-character cells (box height `N*2+1`, width `N*6+1`), centered
//! horizontally, with a score line and the key help underneath.

use crate::config::GRID_SIZE;
use crate::game::{GameEngine, GameStatus};
use crate::Tile;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use std::io::{self, Stdout, Write};

const CELL_W: usize = 5;
pub const HELP_LINE: &str = "QUIT(Q), RESTART(R), UP(W), DOWN(S), LEFT(A), RIGHT(D)";

/// Width and height of the board box in terminal cells.
pub fn board_dims() -> (u16, u16) {
    (
        (GRID_SIZE * (CELL_W + 1) + 1) as u16,
        (GRID_SIZE * 2 + 1) as u16,
    )
}

/// Minimum terminal size: the board box plus a blank line and two HUD lines.
pub fn required_dims() -> (u16, u16) {
    let (w, h) = board_dims();
    (w, h + 3)
}

/// Switch the terminal into game mode: raw input, alternate screen,
/// hidden cursor.
pub fn init_terminal(stdout: &mut Stdout) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(())
}

/// Undo [`init_terminal`]. Must run even when the game loop errored.
pub fn restore_terminal(stdout: &mut Stdout) -> io::Result<()> {
    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Redraw the whole screen for the current engine state.
pub fn draw(stdout: &mut Stdout, engine: &GameEngine) -> io::Result<()> {
    let (need_w, need_h) = required_dims();
    let (term_w, term_h) = terminal::size()?;
    if term_w < need_w || term_h < need_h {
        // Terminal was resized under us; keep the message up until it fits.
        stdout.queue(Clear(ClearType::All))?;
        stdout.queue(MoveTo(0, 0))?;
        stdout.queue(Print(format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            need_w, need_h, term_w, term_h
        )))?;
        stdout.flush()?;
        return Ok(());
    }

    let (box_w, box_h) = board_dims();
    let origin_x = (term_w - box_w) / 2;
    let origin_y = 0u16;

    stdout.queue(Clear(ClearType::All))?;
    let rows = engine.board().grid().rows();
    for line in 0..box_h {
        stdout.queue(MoveTo(origin_x, origin_y + line))?;
        if line % 2 == 0 {
            stdout.queue(SetForegroundColor(Color::DarkGrey))?;
            for _ in 0..GRID_SIZE {
                stdout.queue(Print('+'))?;
                stdout.queue(Print("-".repeat(CELL_W)))?;
            }
            stdout.queue(Print('+'))?;
            stdout.queue(ResetColor)?;
        } else {
            let row = (line / 2) as usize;
            for col in 0..GRID_SIZE {
                stdout.queue(SetForegroundColor(Color::DarkGrey))?;
                stdout.queue(Print('|'))?;
                let value = rows[row][col];
                if value == 0 {
                    stdout.queue(ResetColor)?;
                    stdout.queue(Print(" ".repeat(CELL_W)))?;
                } else {
                    stdout.queue(SetForegroundColor(tile_color(value)))?;
                    stdout.queue(Print(format!("{:>width$}", value, width = CELL_W)))?;
                }
            }
            stdout.queue(SetForegroundColor(Color::DarkGrey))?;
            stdout.queue(Print('|'))?;
            stdout.queue(ResetColor)?;
        }
    }

    let hud = format!(
        "Score: {}  Best: {}  Target: {}",
        engine.score(),
        engine.board().highest_tile(),
        engine.target()
    );
    print_centered(stdout, term_w, origin_y + box_h + 1, &hud)?;
    print_centered(stdout, term_w, origin_y + box_h + 2, HELP_LINE)?;

    match engine.status() {
        GameStatus::Won => banner(stdout, term_w, origin_y + box_h / 2, "YOU WIN")?,
        GameStatus::Lost => banner(stdout, term_w, origin_y + box_h / 2, "GAME OVER")?,
        GameStatus::InProgress => {}
    }

    stdout.flush()
}

fn print_centered(stdout: &mut Stdout, term_w: u16, row: u16, text: &str) -> io::Result<()> {
    let x = term_w.saturating_sub(text.len() as u16) / 2;
    stdout.queue(MoveTo(x, row))?;
    stdout.queue(Print(text))?;
    Ok(())
}

fn banner(stdout: &mut Stdout, term_w: u16, row: u16, message: &str) -> io::Result<()> {
    let text = format!("  {}  ", message);
    let x = term_w.saturating_sub(text.len() as u16) / 2;
    stdout.queue(MoveTo(x, row))?;
    stdout.queue(SetForegroundColor(Color::Red))?;
    stdout.queue(Print(text))?;
    stdout.queue(ResetColor)?;
    Ok(())
}

fn tile_color(value: Tile) -> Color {
    match value {
        0..=4 => Color::White,
        8..=32 => Color::Yellow,
        64..=512 => Color::Red,
        _ => Color::Magenta,
    }
}
