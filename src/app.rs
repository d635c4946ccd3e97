/*
 * Application Module
 *
 * This module defines the main application model and the per-tick update for
 * the starfield. One tick is: read the elapsed frame time, advance every
 * star's depth (unless paused), then rewrite the full geometry buffer from
 * the live depths. The configuration is fixed at startup; the UI only holds
 * runtime toggles.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::Instant;

use crate::config::Config;
use crate::debug::DebugInfo;
use crate::field::StarField;
use crate::geometry::GeometryBuffer;
use crate::input;
use crate::renderer;
use crate::ui;

// Runtime toggles adjustable via UI and keyboard
pub struct Controls {
    pub pause: bool,
    pub show_debug: bool,
    pub parallel_emission: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            pause: false,
            show_debug: false,
            parallel_emission: true,
        }
    }
}

// Main model for the application
pub struct Model {
    pub config: Config,
    pub field: StarField,
    pub geometry: GeometryBuffer,
    pub controls: Controls,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Starfield")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // The position plane is scaled to the window, so the spawn area and the
    // near-plane exclusion rectangle both track the actual screen
    let config = Config::for_screen(vec2(window_width, window_height));

    // Generate the star population; a configuration that cannot produce one
    // is fatal at startup
    let mut rng = rand::thread_rng();
    let field = match StarField::generate(config, &mut rng) {
        Ok(field) => field,
        Err(err) => {
            log::error!("invalid starfield configuration: {}", err);
            std::process::exit(1);
        }
    };

    let geometry = GeometryBuffer::new(config.star_count, config.texture_extent);

    Model {
        config,
        field,
        geometry,
        controls: Controls::default(),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    let delta_time = update.since_last.as_secs_f32();
    model.debug_info.record_frame(delta_time);

    // Update UI
    ui::update_ui(
        &mut model.egui,
        &mut model.controls,
        &model.debug_info,
        &model.config,
    );

    // Move the stars toward the viewer unless paused
    if !model.controls.pause {
        model.field.advance(delta_time);
        let wraps = model.field.wraps_last_tick();
        model.debug_info.note_wraps(wraps);
    }

    // Rewrite every quad from the live depths, in far-to-near order
    let emit_start = Instant::now();
    if model.controls.parallel_emission {
        model.geometry.fill_parallel(&model.field);
    } else {
        model.geometry.fill(&model.field);
    }
    model.debug_info.emit_time = emit_start.elapsed();
}
