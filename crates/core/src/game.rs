//! Game state machine - spawn, movement, rotation, gravity, locking,
//! line clears, scoring, pause and restart.
//!
//! The machine is driven entirely from outside: discrete input events call
//! the operations directly, and a host clock calls [`Game::tick`] with a
//! monotonic millisecond timestamp. Nothing here blocks, suspends, or keeps
//! its own timer. Illegal moves are rejected silently; the only terminal
//! condition is a spawn that collides, which flips the game into the
//! game-over state until an explicit restart.

use gridfall_types::{
    ColorTag, ConfigError, GameAction, PieceKind, Position, DEFAULT_BOARD_HEIGHT,
    DEFAULT_BOARD_WIDTH,
};

use crate::board::Board;
use crate::catalog::{self, Shape};
use crate::geometry::{collides, rotate_cw};
use crate::progression::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::rng::{PieceRng, SimpleRng};

/// Horizontal wall-kick offsets tried in order when an in-place rotation
/// collides. The leading 0 repeats the in-place attempt so the loop is
/// uniform.
pub const KICK_OFFSETS: [i32; 5] = [0, 1, -1, 2, -2];

/// The piece currently in play. Its position lives separately on [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub color: ColorTag,
    pub shape: Shape,
}

/// Board dimensions for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Complete game state, generic over the injected randomness source.
#[derive(Debug, Clone)]
pub struct Game<R> {
    board: Board,
    active: Option<ActivePiece>,
    position: Position,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    over: bool,
    /// Timestamp (host clock, ms) of the last gravity step.
    last_drop_at: u64,
    rng: R,
}

impl Game<SimpleRng> {
    /// A default-sized game seeded with the built-in LCG.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default(), SimpleRng::new(seed))
            .expect("default board dimensions are valid")
    }
}

impl<R: PieceRng> Game<R> {
    /// Create a fresh game. Fails fast on invalid board dimensions.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self::with_board(
            Board::new(config.width, config.height)?,
            rng,
        ))
    }

    /// Start from a prepared board, with zeroed counters. Lets callers
    /// stage mid-game positions through [`Board::set`].
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            active: None,
            position: Position::default(),
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            over: false,
            last_drop_at: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn gameplay_blocked(&self) -> bool {
        self.paused || self.over
    }

    /// Spawn a random piece centered at the top of the board.
    ///
    /// If the spawn placement already collides the game is over; the
    /// attempted piece and position are still recorded so the final frame
    /// can render the colliding piece.
    pub fn spawn(&mut self) -> bool {
        if self.gameplay_blocked() {
            return false;
        }

        let kind = catalog::random_kind(&mut self.rng);
        let shape = catalog::shape(kind);
        // Signed centering: on a board narrower than the shape grid this
        // goes negative, collides with the wall, and ends the game.
        let start = Position::new(
            (self.board.width() as i32 - shape.size() as i32).div_euclid(2),
            0,
        );
        let blocked = collides(&self.board, &shape, start);

        self.active = Some(ActivePiece {
            kind,
            color: catalog::color_tag(kind),
            shape,
        });
        self.position = start;

        if blocked {
            self.over = true;
        }
        !blocked
    }

    /// Move the active piece by (dx, dy) if the target placement is free.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.gameplay_blocked() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let candidate = self.position.offset(dx, dy);
        if collides(&self.board, &active.shape, candidate) {
            return false;
        }
        self.position = candidate;
        true
    }

    /// Move the active piece down one row (player-initiated).
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate the active piece 90° clockwise, kicking horizontally if the
    /// in-place rotation collides. Rejected entirely when no kick fits.
    pub fn rotate(&mut self) -> bool {
        if self.gameplay_blocked() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = rotate_cw(&active.shape);
        for dx in KICK_OFFSETS {
            let candidate = self.position.offset(dx, 0);
            if !collides(&self.board, &rotated, candidate) {
                self.active = Some(ActivePiece {
                    shape: rotated,
                    ..active
                });
                self.position = candidate;
                return true;
            }
        }
        false
    }

    /// Drop the active piece to the lowest free row in its column.
    ///
    /// The piece is not locked here; the next gravity tick finds it
    /// grounded and locks it. That window intentionally allows last-moment
    /// movement, matching the deferred-lock design.
    pub fn hard_drop(&mut self) -> bool {
        if self.gameplay_blocked() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let mut y = self.position.y;
        while !collides(
            &self.board,
            &active.shape,
            Position::new(self.position.x, y + 1),
        ) {
            y += 1;
        }
        let moved = y != self.position.y;
        self.position.y = y;
        moved
    }

    /// Advance gravity if the level's drop interval has elapsed since the
    /// last step. Locks the piece when it can no longer descend.
    ///
    /// Returns true when the piece moved or locked this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.gameplay_blocked() {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_at) < drop_interval_ms(self.level) {
            return false;
        }
        self.last_drop_at = now_ms;

        let Some(active) = self.active.as_ref() else {
            return false;
        };

        if collides(&self.board, &active.shape, self.position.offset(0, 1)) {
            self.lock_and_clear();
        } else {
            self.position.y += 1;
        }
        true
    }

    /// Merge the active piece into the board, clear completed rows, and
    /// update lines/level/score. The next spawn is the driver's call, made
    /// when it observes the piece slot is empty.
    pub fn lock_and_clear(&mut self) {
        if self.gameplay_blocked() {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.color, self.position);
        let cleared = self.board.clear_completed_rows();

        // Score uses the level at lock time, before the clear advances it.
        let level_at_lock = self.level;
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
        self.score += line_clear_score(cleared, level_at_lock);
    }

    /// Flip the pause flag. Unpausing resets the gravity clock so time
    /// spent paused does not arrive as one giant drop delta.
    pub fn toggle_pause(&mut self, now_ms: u64) {
        self.paused = !self.paused;
        if !self.paused {
            self.last_drop_at = now_ms;
        }
    }

    /// Reset to a fresh game: empty board, no piece, zeroed counters,
    /// level 1. The RNG keeps its state so piece sequences continue rather
    /// than repeat. Permitted in any state, including paused and game over.
    pub fn restart(&mut self, now_ms: u64) {
        self.board.clear();
        self.active = None;
        self.position = Position::default();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.paused = false;
        self.over = false;
        self.last_drop_at = now_ms;
    }

    /// Dispatch a discrete player command.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => {
                self.toggle_pause(now_ms);
                true
            }
            GameAction::Restart => {
                self.restart(now_ms);
                true
            }
        }
    }
}
