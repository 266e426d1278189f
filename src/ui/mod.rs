//! Terminal UI for playing against the computer. Reads the engine's cell grid
//! and status; the game rules never depend on this module.

mod app;
mod game_view;

pub use app::App;
