use crate::coords::{Rgba, Vec2};

use super::Texture;

/// Position + color pair consumed by [`Canvas::geometry`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    pub color: Rgba,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec2, color: Rgba) -> Self {
        Self { pos, color }
    }
}

/// Software render target with a stateful current draw color.
///
/// Every draw call clips against the canvas bounds; drawing to a zero-sized
/// canvas is a no-op. Pixels are plain overwrites (no blending), matching a
/// renderer with blending disabled. The only alpha-aware path is [`copy`],
/// which skips fully transparent texels.
///
/// [`copy`]: Canvas::copy
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    draw_color: Rgba,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Allocates a canvas of the given size, initially transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            draw_color: Rgba::BLACK,
            pixels: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel buffer, for upload to the presenter.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets the color used by [`clear`], [`draw_point`] and [`fill_rect`].
    ///
    /// [`clear`]: Canvas::clear
    /// [`draw_point`]: Canvas::draw_point
    /// [`fill_rect`]: Canvas::fill_rect
    #[inline]
    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    #[inline]
    pub fn draw_color(&self) -> Rgba {
        self.draw_color
    }

    /// Fills the whole canvas with the current draw color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.draw_color);
    }

    /// Plots a single pixel in the current draw color; out-of-bounds
    /// coordinates are silently dropped.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = self.draw_color;
        }
    }

    /// Fills an axis-aligned rectangle in the current draw color.
    ///
    /// The rectangle is clipped to the canvas; non-positive extents draw
    /// nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                let i = (py as usize) * (self.width as usize) + px as usize;
                self.pixels[i] = self.draw_color;
            }
        }
    }

    /// Fills one 2-D triangle with barycentric color interpolation.
    ///
    /// Pixels are sampled at their centers; a degenerate (zero-area)
    /// triangle draws nothing. The current draw color is not consulted —
    /// color comes entirely from the vertices.
    pub fn geometry(&mut self, verts: &[Vertex; 3]) {
        let [a, b, c] = *verts;

        let area = edge(a.pos, b.pos, c.pos);
        if area == 0.0 {
            return;
        }

        let min_x = a.pos.x.min(b.pos.x).min(c.pos.x).floor().max(0.0) as i32;
        let min_y = a.pos.y.min(b.pos.y).min(c.pos.y).floor().max(0.0) as i32;
        let max_x = (a.pos.x.max(b.pos.x).max(c.pos.x).ceil() as i32).min(self.width as i32);
        let max_y = (a.pos.y.max(b.pos.y).max(c.pos.y).ceil() as i32).min(self.height as i32);

        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);

                // Signed areas against each edge; a point is inside when all
                // three carry the triangle's winding (zero = on an edge).
                let wa = edge(b.pos, c.pos, p);
                let wb = edge(c.pos, a.pos, p);
                let wc = edge(a.pos, b.pos, p);

                let inside = if area > 0.0 {
                    wa >= 0.0 && wb >= 0.0 && wc >= 0.0
                } else {
                    wa <= 0.0 && wb <= 0.0 && wc <= 0.0
                };
                if !inside {
                    continue;
                }

                let (wa, wb, wc) = (wa / area, wb / area, wc / area);
                let color = Rgba::new(
                    lerp3(a.color.r, b.color.r, c.color.r, wa, wb, wc),
                    lerp3(a.color.g, b.color.g, c.color.g, wa, wb, wc),
                    lerp3(a.color.b, b.color.b, c.color.b, wa, wb, wc),
                    lerp3(a.color.a, b.color.a, c.color.a, wa, wb, wc),
                );

                let i = (py as usize) * (self.width as usize) + px as usize;
                self.pixels[i] = color;
            }
        }
    }

    /// Blits `texture` into the destination rectangle, scaling with
    /// nearest-neighbor sampling.
    ///
    /// Fully transparent texels are skipped so the label's background stays
    /// whatever was drawn underneath. Non-positive destination extents or an
    /// empty texture draw nothing.
    pub fn copy(&mut self, texture: &Texture, dst_x: i32, dst_y: i32, dst_w: i32, dst_h: i32) {
        if dst_w <= 0 || dst_h <= 0 || texture.width() == 0 || texture.height() == 0 {
            return;
        }

        for j in 0..dst_h {
            for i in 0..dst_w {
                let sx = (i as i64 * texture.width() as i64 / dst_w as i64) as u32;
                let sy = (j as i64 * texture.height() as i64 / dst_h as i64) as u32;

                let Some(texel) = texture.texel(sx, sy) else { continue };
                if texel.a == 0 {
                    continue;
                }

                if let Some(idx) = self.index(dst_x + i, dst_y + j) {
                    self.pixels[idx] = texel;
                }
            }
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some((y as usize) * (self.width as usize) + x as usize)
        } else {
            None
        }
    }
}

/// Signed parallelogram area of (b - a) × (p - a).
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[inline]
fn lerp3(a: u8, b: u8, c: u8, wa: f32, wb: f32, wc: f32) -> u8 {
    let v = wa * a as f32 + wb * b as f32 + wc * c as f32;
    v.round().clamp(0.0, 255.0) as u8
}
