//! Terminal presentation for the game read model.
//!
//! A thin layer over the core: [`view`] encodes the board, active piece
//! overlay, and HUD into crossterm commands; [`renderer`] owns the
//! raw-mode session and flushes frames. No game logic lives here.

pub mod renderer;
pub mod view;

pub use gridfall_types as types;

pub use renderer::TerminalRenderer;
pub use view::encode_frame;
