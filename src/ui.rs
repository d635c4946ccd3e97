/*
 * UI Module
 *
 * This module contains functions for the control window and the on-screen
 * debug overlay. The simulation configuration itself is immutable, so the
 * window only exposes runtime toggles (pause, parallel emission, debug
 * overlay) next to live performance and wrap statistics.
 */

use nannou_egui::{egui, Egui};

use crate::app::Controls;
use crate::config::Config;
use crate::debug::DebugInfo;

// Update the control window
pub fn update_ui(egui: &mut Egui, controls: &mut Controls, debug_info: &DebugInfo, config: &Config) {
    let ctx = egui.begin_frame();

    egui::Window::new("Starfield Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.checkbox(&mut controls.pause, "Pause Simulation");
            ui.checkbox(&mut controls.parallel_emission, "Parallel Geometry Emission");
            ui.checkbox(&mut controls.show_debug, "Show Debug Overlay");

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));
            ui.label(format!(
                "Emission time: {:.2} ms",
                debug_info.emit_time.as_secs_f64() * 1000.0
            ));

            ui.separator();

            ui.label(format!("Stars: {}", config.star_count));
            ui.label(format!("Depth range: {} .. {}", config.near, config.far));
            ui.label(format!("Speed: {}", config.speed));
            ui.label(format!("Wraps last tick: {}", debug_info.wraps_last_tick));
            ui.label(format!("Multi-wrap ticks: {}", debug_info.multi_wrap_ticks));
        });
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    star_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!(
            "Emission time: {:.2} ms",
            debug_info.emit_time.as_secs_f64() * 1000.0
        ),
        format!("Stars: {}", star_count),
        format!("Wraps last tick: {}", debug_info.wraps_last_tick),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
