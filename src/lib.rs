//! Interactive Conway's Game of Life on a bounded, non-wrapping board.
//!
//! The simulation core (`grid`, `engine`, `viewport`, `paint`, `session`) has no window or
//! GPU dependency and is driven one frame at a time by `main.rs`.

pub mod config;
pub mod engine;
pub mod error;
pub mod font;
pub mod graphics;
pub mod grid;
pub mod hud;
pub mod input;
pub mod pacing;
pub mod paint;
pub mod session;
pub mod viewport;
