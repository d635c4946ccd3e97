/*
 * Star Module
 *
 * This module defines the Star struct and the per-star derived quantities.
 * A star is a point in a 2D plane at some depth in front of the camera;
 * everything visible about it (screen position, quad size, brightness) is
 * recomputed from that state every frame.
 */

use nannou::prelude::*;

use crate::config::Config;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub position: Point2,
    pub depth: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, depth: f32) -> Self {
        Self {
            position: pt2(x, y),
            depth,
        }
    }

    // Perspective divide: closer stars (smaller depth) scale up
    pub fn scale(&self) -> f32 {
        1.0 / self.depth
    }

    // Position projected into the screen-centered plane
    pub fn screen_position(&self) -> Point2 {
        self.position * self.scale()
    }

    // Where the star sits between the near (0.0) and far (1.0) planes
    pub fn depth_ratio(&self, config: &Config) -> f32 {
        ((self.depth - config.near) / config.depth_span()).clamp(0.0, 1.0)
    }

    // 8-bit grey channel: brightest at the near plane, dimmest at the far
    // plane, never below the configured floor
    pub fn brightness_channel(&self, config: &Config) -> u8 {
        let brightness = 1.0 - self.depth_ratio(config);
        let floored = config.min_brightness + (1.0 - config.min_brightness) * brightness;
        (floored * 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_star_projects_larger() {
        let near_star = Star::new(100.0, 50.0, 1.0);
        let far_star = Star::new(100.0, 50.0, 5.0);
        assert!(near_star.scale() > far_star.scale());
    }

    #[test]
    fn screen_position_shrinks_with_depth() {
        let star = Star::new(400.0, -200.0, 4.0);
        let p = star.screen_position();
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, -50.0);
    }

    #[test]
    fn brightness_is_monotonic_in_depth() {
        let config = Config::default();
        let mut previous = u8::MAX;
        for step in 0..=10 {
            let depth = config.near + config.depth_span() * step as f32 / 10.0;
            let channel = Star::new(0.0, 0.0, depth).brightness_channel(&config);
            assert!(channel <= previous, "brightness increased with depth");
            previous = channel;
        }
    }

    #[test]
    fn brightness_spans_full_range_without_floor() {
        let config = Config::default();
        let at_near = Star::new(0.0, 0.0, config.near);
        let at_far = Star::new(0.0, 0.0, config.far);
        assert_eq!(at_near.brightness_channel(&config), 255);
        assert_eq!(at_far.brightness_channel(&config), 0);
    }

    #[test]
    fn brightness_floor_keeps_far_stars_visible() {
        let config = Config {
            min_brightness: 0.2,
            ..Config::default()
        };
        let at_far = Star::new(0.0, 0.0, config.far);
        assert_eq!(at_far.brightness_channel(&config), (0.2 * 255.0) as u8);
    }

    #[test]
    fn depth_ratio_is_clamped() {
        let config = Config::default();
        // A star mid-wrap can momentarily sit outside the planes
        let below = Star::new(0.0, 0.0, config.near - 1.0);
        let beyond = Star::new(0.0, 0.0, config.far + 1.0);
        assert_eq!(below.depth_ratio(&config), 0.0);
        assert_eq!(beyond.depth_ratio(&config), 1.0);
    }
}
