/*
 * Flythrough Starfield
 *
 * A fixed population of stars streams past a virtual camera along the depth
 * axis. Stars crossing the near plane wrap back behind the far plane, and a
 * rotation offset keeps the population drawable in far-to-near order without
 * ever re-sorting it. Size and brightness follow the perspective divide, so
 * stars grow and brighten as they approach.
 *
 * Controls: Escape quits, Space pauses, D toggles the debug overlay; the
 * egui window exposes the same toggles plus live statistics.
 */

use starfield::app;

fn main() {
    env_logger::init();

    nannou::app(app::model)
        .update(app::update)
        .run();
}
