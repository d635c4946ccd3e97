/*
 * Configuration Module
 *
 * This module defines the Config struct holding every tunable value for the
 * starfield: population size, near/far planes, recession speed, quad size,
 * screen dimensions, texture extent and the brightness floor. The config is
 * built once at startup and never changes for the lifetime of the process.
 * It also defines the ConfigError taxonomy surfaced when a configuration
 * cannot produce a valid star population.
 */

use nannou::prelude::*;
use thiserror::Error;

// Immutable configuration for the simulation, fixed at startup
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub star_count: usize,
    pub star_size: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub screen_size: Vec2,
    pub texture_extent: Vec2,
    pub min_brightness: f32,
}

// Errors raised when a configuration cannot yield a valid population
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("star count must be greater than zero")]
    NoStars,
    #[error("invalid depth range: near ({near}) must satisfy 0 < near < far ({far})")]
    InvalidDepthRange { near: f32, far: f32 },
    #[error("screen size must be positive on both axes: {width}x{height}")]
    InvalidScreenSize { width: f32, height: f32 },
    #[error("exclusion zone rejected {attempts} candidates in a row; it covers too much of the spawn area")]
    ExclusionZoneUnsatisfiable { attempts: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: 100_000,
            star_size: 30.0,
            near: 0.1,
            far: 10.0,
            speed: 0.5,
            screen_size: vec2(1920.0, 1080.0),
            texture_extent: vec2(256.0, 256.0),
            min_brightness: 0.0,
        }
    }
}

impl Config {
    // Build a config with the given screen dimensions and defaults for the rest
    pub fn for_screen(screen_size: Vec2) -> Self {
        Self {
            screen_size,
            ..Self::default()
        }
    }

    // Check the configuration up front so generation cannot loop or divide by zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::NoStars);
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::InvalidDepthRange {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.screen_size.x > 0.0 && self.screen_size.y > 0.0) {
            return Err(ConfigError::InvalidScreenSize {
                width: self.screen_size.x,
                height: self.screen_size.y,
            });
        }
        Ok(())
    }

    // Full extent of the near-plane exclusion rectangle (centered at the origin)
    pub fn exclusion_extent(&self) -> Vec2 {
        self.screen_size * self.near
    }

    // Depth span between the near and far planes
    pub fn depth_span(&self) -> f32 {
        self.far - self.near
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_stars_is_rejected() {
        let config = Config {
            star_count: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoStars));
    }

    #[test]
    fn near_at_or_beyond_far_is_rejected() {
        let config = Config {
            near: 10.0,
            far: 10.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDepthRange { .. })
        ));

        let config = Config {
            near: 12.0,
            far: 10.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDepthRange { .. })
        ));
    }

    #[test]
    fn non_positive_near_is_rejected() {
        let config = Config {
            near: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDepthRange { .. })
        ));
    }

    #[test]
    fn degenerate_screen_is_rejected() {
        let config = Config {
            screen_size: vec2(0.0, 1080.0),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScreenSize { .. })
        ));
    }

    #[test]
    fn exclusion_extent_scales_with_near() {
        let config = Config {
            near: 0.1,
            screen_size: vec2(1000.0, 500.0),
            ..Config::default()
        };
        let extent = config.exclusion_extent();
        assert_eq!(extent.x, 100.0);
        assert_eq!(extent.y, 50.0);
    }
}
