//! Browser client for Pong
//!
//! Everything except the DOM glue in `web` and the Canvas 2D backend builds
//! natively, so the session logic and frame layout are tested with plain
//! `cargo test`.

pub mod fsm;
pub mod input;
pub mod renderer;
pub mod simulation;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{send_command, start, stats_json};
