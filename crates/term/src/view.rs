//! Frame encoding: game read model to terminal commands.
//!
//! Pure with respect to the terminal - everything is queued into a byte
//! buffer the renderer flushes, so encoding can be tested without a TTY.
//! Color tags are interpreted here (hex triplets from the catalog); the
//! core never looks inside them.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use gridfall_core::{Game, PieceRng};
use gridfall_types::ColorTag;

/// Board cell width in terminal columns (compensates glyph aspect ratio).
const CELL_W: usize = 2;

/// Decode a `#rrggbb` color tag; anything else renders white.
pub fn color_from_tag(tag: ColorTag) -> Color {
    let s = tag.as_str();
    let hex = match s.strip_prefix('#') {
        Some(hex) if hex.len() == 6 => hex,
        _ => return Color::White,
    };
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb { r, g, b },
        _ => Color::White,
    }
}

/// Encode one full frame (board, active piece overlay, HUD) into `out`.
pub fn encode_frame<R: PieceRng>(game: &Game<R>, out: &mut Vec<u8>) -> Result<()> {
    let board = game.board();
    let width = board.width();
    let height = board.height();

    // Board cells with the active piece overlaid.
    let mut grid: Vec<Vec<Option<Color>>> = board
        .rows()
        .map(|row| row.iter().map(|cell| cell.map(color_from_tag)).collect())
        .collect();

    if let Some(active) = game.active() {
        let pos = game.position();
        let color = color_from_tag(active.color);
        for (sx, sy) in active.shape.cells() {
            let x = pos.x + sx as i32;
            let y = pos.y + sy as i32;
            if x >= 0 && (x as usize) < width && y >= 0 && (y as usize) < height {
                grid[y as usize][x as usize] = Some(color);
            }
        }
    }

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let border = Color::Grey;
    let inner_w = width * CELL_W;

    // Top border.
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(SetForegroundColor(border))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner_w))))?;

    for (y, row) in grid.iter().enumerate() {
        out.queue(cursor::MoveTo(0, (y + 1) as u16))?;
        out.queue(SetForegroundColor(border))?;
        out.queue(Print("│"))?;
        for cell in row {
            match cell {
                Some(color) => {
                    out.queue(SetBackgroundColor(*color))?;
                    out.queue(Print("  "))?;
                    out.queue(ResetColor)?;
                }
                None => {
                    out.queue(SetForegroundColor(Color::DarkGrey))?;
                    out.queue(Print("· "))?;
                }
            }
        }
        out.queue(SetForegroundColor(border))?;
        out.queue(Print("│"))?;
    }

    out.queue(cursor::MoveTo(0, (height + 1) as u16))?;
    out.queue(SetForegroundColor(border))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner_w))))?;

    encode_hud(game, (inner_w + 4) as u16, out)?;

    out.queue(ResetColor)?;
    Ok(())
}

fn encode_hud<R: PieceRng>(game: &Game<R>, col: u16, out: &mut Vec<u8>) -> Result<()> {
    let mut line = 0u16;
    let mut put = |out: &mut Vec<u8>, text: String| -> Result<()> {
        out.queue(cursor::MoveTo(col, line))?;
        out.queue(Print(text))?;
        line += 1;
        Ok(())
    };

    out.queue(SetForegroundColor(Color::White))?;
    put(out, "GRIDFALL".to_string())?;
    put(out, String::new())?;
    put(out, format!("Score  {:>8}", game.score()))?;
    put(out, format!("Level  {:>8}", game.level()))?;
    put(out, format!("Lines  {:>8}", game.lines()))?;
    put(out, String::new())?;

    out.queue(SetForegroundColor(Color::DarkGrey))?;
    put(out, "←/→     move".to_string())?;
    put(out, "↑/space rotate".to_string())?;
    put(out, "↓       soft drop".to_string())?;
    put(out, "enter   hard drop".to_string())?;
    put(out, "p       pause".to_string())?;
    put(out, "r       restart".to_string())?;
    put(out, "q       quit".to_string())?;
    put(out, String::new())?;

    if game.is_over() {
        out.queue(SetForegroundColor(Color::Red))?;
        put(out, "GAME OVER".to_string())?;
        out.queue(SetForegroundColor(Color::White))?;
        put(out, "press r to play again".to_string())?;
    } else if game.is_paused() {
        out.queue(SetForegroundColor(Color::Yellow))?;
        put(out, "PAUSED".to_string())?;
    }

    Ok(())
}
