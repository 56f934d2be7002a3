//! UI modules for the blind map.
//!
//! - Input: held-key polling and the quit key
//! - Central canvas: map outlines, hover detection and hover label

mod canvas;
mod input;

pub use canvas::render_canvas;
pub use input::{quit_requested, read_held_keys};
