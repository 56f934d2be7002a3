//! Keyboard polling.

use crate::state::HeldKeys;
use eframe::egui::{self, Key};

/// Reads the map-control keys currently held down.
pub fn read_held_keys(ctx: &egui::Context) -> HeldKeys {
    ctx.input(|i| HeldKeys {
        modifier: i.modifiers.shift,
        up: i.key_down(Key::ArrowUp),
        down: i.key_down(Key::ArrowDown),
        left: i.key_down(Key::ArrowLeft),
        right: i.key_down(Key::ArrowRight),
        reset: i.key_down(Key::Space),
    })
}

/// Whether the cancel key was pressed this frame.
pub fn quit_requested(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.key_pressed(Key::Escape))
}
