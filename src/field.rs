/*
 * Star Field Module
 *
 * This module owns the star population and the two operations that define it:
 *
 * 1. Generation: rejection-samples star positions across a plane scaled to
 *    the far plane, discarding candidates inside a near-plane exclusion
 *    rectangle, then sorts the population once by depth (farthest first).
 * 2. Depth advance: every tick each star moves the same amount toward the
 *    camera. A star crossing the near plane is re-injected behind the far
 *    plane, carrying its overshoot, and its index becomes the rotation
 *    offset. Because all stars move at the same rate, traversing the array
 *    starting from that offset (wrapping around) still visits stars in
 *    approximately far-to-near order, so the population is never re-sorted
 *    after construction.
 */

use rand::Rng;

use crate::config::{Config, ConfigError};
use crate::star::Star;

// How many consecutive exclusion-zone rejections a single star may burn
// before generation gives up on the configuration
const MAX_ATTEMPTS_PER_STAR: usize = 1_000;

pub struct StarField {
    stars: Vec<Star>,
    // Index of the logical farthest star; traversal starts here and wraps
    first: usize,
    config: Config,
    wraps_last_tick: usize,
}

impl StarField {
    // Generate a depth-sorted population of config.star_count stars
    pub fn generate(config: Config, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;

        // Stars spawning inside this rectangle would cross the screen center
        // at minimum depth and pop in at full size, so they are redrawn
        let half_exclusion = config.exclusion_extent() * 0.5;

        let mut stars = Vec::with_capacity(config.star_count);
        for _ in 0..config.star_count {
            let mut attempts = 0;
            let star = loop {
                let x = (rng.gen::<f32>() - 0.5) * config.screen_size.x * config.far;
                let y = (rng.gen::<f32>() - 0.5) * config.screen_size.y * config.far;
                let depth = config.near + config.depth_span() * rng.gen::<f32>();

                if x.abs() < half_exclusion.x && y.abs() < half_exclusion.y {
                    attempts += 1;
                    if attempts >= MAX_ATTEMPTS_PER_STAR {
                        return Err(ConfigError::ExclusionZoneUnsatisfiable { attempts });
                    }
                    continue;
                }

                break Star::new(x, y, depth);
            };
            stars.push(star);
        }

        // Depth ordering: farthest first, nearest last
        stars.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));

        Ok(Self {
            stars,
            first: 0,
            config,
            wraps_last_tick: 0,
        })
    }

    // Move every star toward the camera by speed * delta_time, wrapping
    // near-plane crossings back behind the far plane. Returns the updated
    // rotation offset.
    //
    // The offset is a single scalar, so when a tick wraps several stars it
    // keeps only the last crossing. Iterating from the nearest end of the
    // array means crossings land in storage order and the final assignment is
    // the correct boundary, but if the depth step covers the whole near-far
    // span the resulting traversal order is only approximate for that frame.
    pub fn advance(&mut self, delta_time: f32) -> usize {
        let step = self.config.speed * delta_time;
        if step >= self.config.depth_span() {
            log::warn!(
                "depth step {} covers the whole {}..{} span; this frame's draw order is approximate",
                step,
                self.config.near,
                self.config.far
            );
        }

        let mut wraps = 0;
        for i in (0..self.stars.len()).rev() {
            let star = &mut self.stars[i];
            star.depth -= step;
            if star.depth < self.config.near {
                star.depth = self.config.far - (self.config.near - star.depth);
                self.first = i;
                wraps += 1;
            }
        }

        self.wraps_last_tick = wraps;
        self.first
    }

    // Visit the population in approximately far-to-near order
    pub fn traversal(&self) -> impl Iterator<Item = &Star> + '_ {
        let n = self.stars.len();
        (0..n).map(move |i| &self.stars[(i + self.first) % n])
    }

    // Star occupying the given traversal slot
    pub fn star_at_slot(&self, slot: usize) -> &Star {
        &self.stars[(slot + self.first) % self.stars.len()]
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Near-plane crossings recorded during the most recent advance
    pub fn wraps_last_tick(&self) -> usize {
        self.wraps_last_tick
    }
}
