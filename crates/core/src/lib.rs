//! Pure game engine - deterministic, I/O-free, and testable.
//!
//! This crate holds the full rules of the falling-block game and nothing
//! else: no rendering, no input devices, no clocks. A host drives it by
//! calling [`Game::tick`] with timestamps from its own clock, forwarding
//! discrete input as [`gridfall_types::GameAction`] values, and spawning a
//! piece whenever the read model shows none while the game is running.
//!
//! # Module structure
//!
//! - [`catalog`]: the seven shape definitions, colors, and random selection
//! - [`board`]: the locked-cell grid with merge and line clearing
//! - [`geometry`]: rotation transform and collision testing
//! - [`progression`]: scoring table, level formula, drop-speed curve
//! - [`game`]: the state machine tying the above together
//! - [`rng`]: injectable randomness sources (engine uses no global RNG)
//!
//! # Example
//!
//! ```
//! use gridfall_core::Game;
//! use gridfall_types::GameAction;
//!
//! let mut game = Game::with_seed(12345);
//! game.spawn();
//! game.apply_action(GameAction::MoveLeft, 0);
//! game.apply_action(GameAction::HardDrop, 0);
//! game.tick(1000); // gravity finds the piece grounded and locks it
//! assert!(game.active().is_none());
//! ```

pub mod board;
pub mod catalog;
pub mod game;
pub mod geometry;
pub mod progression;
pub mod rng;

pub use gridfall_types as types;

pub use board::Board;
pub use catalog::Shape;
pub use game::{ActivePiece, Game, GameConfig, KICK_OFFSETS};
pub use geometry::{collides, rotate_cw};
pub use rng::{PieceRng, ScriptedRng, SimpleRng};
