//! # Connect Four vs CPU
//!
//! Connect Four on the standard 6×7 grid, a human against a computer that
//! plays uniformly random legal columns. Comes with a terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: board, owners, four-in-a-row detection, turn engine
//! - [`ai`]: Opponent strategy trait and the random mover
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
