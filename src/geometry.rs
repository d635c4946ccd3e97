/*
 * Geometry Module
 *
 * This module turns the star population into screen-space triangles. Each
 * star owns six vertices (two triangles forming a quad) in a flat buffer that
 * is fully rewritten every frame. Quads are written in traversal order, not
 * storage order, so the renderer draws far-to-near while the underlying star
 * array stays in creation order.
 *
 * Texture coordinates only depend on the configured texture extent, so they
 * are prefilled once at construction and never touched again.
 */

use nannou::prelude::*;
use rayon::prelude::*;

use crate::config::Config;
use crate::field::StarField;
use crate::star::Star;
use crate::VERTICES_PER_STAR;

#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub position: Point2,
    pub tex_coords: Point2,
    pub color: Rgb<u8>,
}

impl Default for Vertex {
    fn default() -> Self {
        Self {
            position: Point2::ZERO,
            tex_coords: Point2::ZERO,
            color: rgb(0, 0, 0),
        }
    }
}

pub struct GeometryBuffer {
    vertices: Vec<Vertex>,
}

impl GeometryBuffer {
    pub fn new(star_count: usize, texture_extent: Vec2) -> Self {
        let mut vertices = vec![Vertex::default(); star_count * VERTICES_PER_STAR];

        // The flat quad mapping is identical for every star
        let corners = quad_tex_coords(texture_extent);
        for quad in vertices.chunks_exact_mut(VERTICES_PER_STAR) {
            for (vertex, uv) in quad.iter_mut().zip(corners) {
                vertex.tex_coords = uv;
            }
        }

        Self { vertices }
    }

    // Rewrite every star's quad from its live depth, in traversal order
    pub fn fill(&mut self, field: &StarField) {
        let config = *field.config();
        for (quad, star) in self
            .vertices
            .chunks_exact_mut(VERTICES_PER_STAR)
            .zip(field.traversal())
        {
            write_quad(quad, star, &config);
        }
    }

    // Same as fill, but splits the buffer across threads. Every quad is a
    // disjoint six-vertex range and the star slice is only read, so the
    // partitions cannot race.
    pub fn fill_parallel(&mut self, field: &StarField) {
        let config = *field.config();
        self.vertices
            .par_chunks_mut(VERTICES_PER_STAR)
            .enumerate()
            .for_each(|(slot, quad)| {
                write_quad(quad, field.star_at_slot(slot), &config);
            });
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

// Project one star into its six-vertex quad (two triangles, fixed winding)
fn write_quad(quad: &mut [Vertex], star: &Star, config: &Config) {
    let p = star.screen_position();
    let r = config.star_size * star.scale();

    quad[0].position = pt2(p.x - r, p.y - r);
    quad[1].position = pt2(p.x + r, p.y - r);
    quad[2].position = pt2(p.x - r, p.y + r);
    quad[3].position = pt2(p.x + r, p.y - r);
    quad[4].position = pt2(p.x + r, p.y + r);
    quad[5].position = pt2(p.x - r, p.y + r);

    let c = star.brightness_channel(config);
    let color = rgb(c, c, c);
    for vertex in quad {
        vertex.color = color;
    }
}

// Texture corner per vertex, matching the position winding
fn quad_tex_coords(extent: Vec2) -> [Point2; VERTICES_PER_STAR] {
    [
        pt2(0.0, 0.0),
        pt2(extent.x, 0.0),
        pt2(0.0, extent.y),
        pt2(extent.x, 0.0),
        pt2(extent.x, extent.y),
        pt2(0.0, extent.y),
    ]
}
