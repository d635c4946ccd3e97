/*
 * Input Module
 *
 * This module handles user input events for the starfield:
 * - Escape closes the application
 * - Space toggles the pause state
 * - D toggles the debug overlay
 * Raw window events are forwarded to egui so the control window stays
 * interactive.
 */

use nannou::prelude::*;

use crate::app::Model;

// Keyboard event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => app.quit(),
        Key::Space => model.controls.pause = !model.controls.pause,
        Key::D => model.controls.show_debug = !model.controls.show_debug,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
