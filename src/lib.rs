//! Snake on a fixed grid, drawn into a `pixels` frame buffer.
//!
//! The simulation (`grid`, `snake`, `food`, `game`) has no platform
//! dependencies; `draw`, `display` and `input` connect it to winit.

pub mod config;
pub mod display;
pub mod draw;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
