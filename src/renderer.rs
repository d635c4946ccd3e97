/*
 * Renderer Module
 *
 * This module submits the prepared geometry buffer for display. The buffer
 * already holds screen-centered positions and per-quad colors in far-to-near
 * order, so the view pass is a straight conversion of vertex triples into a
 * colored triangle mesh. nannou's draw space has its origin at the window
 * center, which is the coordinate space the geometry is emitted in, so no
 * extra translation is applied.
 */

use nannou::geom::Tri;
use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Submit the starfield as one triangle mesh, two triangles per star
    let tris = model
        .geometry
        .vertices()
        .chunks_exact(3)
        .map(|v| {
            Tri([
                (pt3(v[0].position.x, v[0].position.y, 0.0), v[0].color),
                (pt3(v[1].position.x, v[1].position.y, 0.0), v[1].color),
                (pt3(v[2].position.x, v[2].position.y, 0.0), v[2].color),
            ])
        });
    draw.mesh().tris_colored(tris);

    // Draw the debug overlay if enabled
    if model.controls.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.field.len(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
