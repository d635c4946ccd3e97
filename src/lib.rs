/*
 * Flythrough Starfield - Module Definitions
 *
 * This file defines the module structure for the starfield application.
 * The core lives in config, star, field and geometry; app, ui, renderer and
 * input are the thin nannou shell around it.
 */

// Re-export key components for easier access
pub use config::{Config, ConfigError};
pub use debug::DebugInfo;
pub use field::StarField;
pub use geometry::{GeometryBuffer, Vertex};
pub use star::Star;
pub use app::Model;

// Define modules
pub mod config;
pub mod star;
pub mod field;
pub mod geometry;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const VERTICES_PER_STAR: usize = 6;
