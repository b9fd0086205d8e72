//! Core types shared across the workspace.
//!
//! This crate contains pure data types and tuning constants with no game
//! logic. Everything here is cheap to copy and carries no I/O concerns.

use thiserror::Error;

/// Default board dimensions.
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Driver frame period in milliseconds (~60 FPS).
pub const TICK_MS: u64 = 16;

/// Gravity timing: base interval, per-level speedup, and the floor.
pub const BASE_DROP_MS: u64 = 1000;
pub const DROP_STEP_MS: u64 = 100;
pub const MIN_DROP_MS: u64 = 100;

/// Base scores per number of lines cleared in one lock (index = lines).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The level advances every this many cleared lines.
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order. Random selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Opaque display color identifier attached to locked cells.
///
/// The engine never interprets the tag beyond presence and equality; the
/// presentation layer decides what it means (the catalog uses hex colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag(&'static str);

impl ColorTag {
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Board cell: `None` = empty, `Some` = locked with a display color.
pub type Cell = Option<ColorTag>;

/// Offset of the active piece's shape-grid origin from the board's top-left.
///
/// `y` may be negative while a piece is still entering from above the
/// visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by (dx, dy).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Discrete player commands accepted by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }
}

/// Construction-time misuse. Gameplay itself never returns errors; illegal
/// moves are silent rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn position_offset() {
        let p = Position::new(4, 0);
        assert_eq!(p.offset(-1, 2), Position::new(3, 2));
        // Negative y is representable (pieces entering from above).
        assert_eq!(p.offset(0, -1), Position::new(4, -1));
    }

    #[test]
    fn config_error_message_names_dimensions() {
        let err = ConfigError::InvalidDimensions {
            width: 0,
            height: 20,
        };
        assert!(err.to_string().contains("0x20"));
    }
}
