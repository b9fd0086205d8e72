//! Gridfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof: the pure engine in
//! [`core`], key bindings in [`input`], the terminal layer in [`term`],
//! and shared data types in [`types`].

pub use gridfall_core as core;
pub use gridfall_input as input;
pub use gridfall_term as term;
pub use gridfall_types as types;
