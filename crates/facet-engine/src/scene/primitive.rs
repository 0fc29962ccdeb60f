use crate::coords::{Rgba, Vec2};
use crate::raster::{Canvas, Vertex};

/// Default per-vertex colors for [`Triangle::new`], in vertex order.
const TRIANGLE_DEFAULT_COLORS: [Rgba; 3] = [
    Rgba::new(255, 0, 0, 255),
    Rgba::new(0, 0, 255, 255),
    Rgba::new(0, 255, 0, 255),
];

/// A drawable shape.
///
/// The variant set is closed; dispatch in [`Primitive::draw`] is exhaustive.
/// Geometry and color are fixed at construction — after that, drawing is the
/// only thing a primitive can do.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Primitive {
    /// Draws the primitive onto `canvas`. Never mutates the primitive.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Primitive::Triangle(t) => t.draw(canvas),
            Primitive::Rectangle(r) => r.draw(canvas),
            Primitive::Circle(c) => c.draw(canvas),
        }
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<Rectangle> for Primitive {
    fn from(r: Rectangle) -> Self {
        Primitive::Rectangle(r)
    }
}

impl From<Circle> for Primitive {
    fn from(c: Circle) -> Self {
        Primitive::Circle(c)
    }
}

/// Filled triangle with per-vertex colors.
///
/// Rasterization is delegated to [`Canvas::geometry`] in a single call; the
/// primitive holds no per-pixel logic.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    verts: [Vertex; 3],
}

impl Triangle {
    /// Triangle with the fixed default coloring: red, blue, green in vertex
    /// order.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self::shaded(a, b, c, TRIANGLE_DEFAULT_COLORS)
    }

    /// Triangle with one color on all three vertices.
    pub fn solid(a: Vec2, b: Vec2, c: Vec2, color: Rgba) -> Self {
        Self::shaded(a, b, c, [color; 3])
    }

    /// Triangle with explicit per-vertex colors, in vertex order.
    pub fn shaded(a: Vec2, b: Vec2, c: Vec2, colors: [Rgba; 3]) -> Self {
        Self {
            verts: [
                Vertex::new(a, colors[0]),
                Vertex::new(b, colors[1]),
                Vertex::new(c, colors[2]),
            ],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.verts
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.geometry(&self.verts);
    }
}

/// Axis-aligned filled rectangle.
///
/// Width and height are signed and unvalidated; the canvas draws nothing for
/// non-positive extents.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rectangle {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Rgba,
}

impl Rectangle {
    /// Rectangle in the default fill color (opaque white).
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::colored(x, y, w, h, Rgba::WHITE)
    }

    pub fn colored(x: i32, y: i32, w: i32, h: i32, color: Rgba) -> Self {
        Self { x, y, w, h, color }
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.set_draw_color(self.color);
        canvas.fill_rect(self.x, self.y, self.w, self.h);
    }
}

/// Filled circle (disk).
///
/// Drawn as a brute-force membership scan over the closed bounding square:
/// a pixel at offset (dx, dy) from the center is plotted iff
/// `dx² + dy² <= r²`. Boundary pixels at exactly distance `r` are included.
/// Deliberately not a midpoint/scanline algorithm — the boundary shape of
/// the inclusive distance test is part of the contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Circle {
    cx: i32,
    cy: i32,
    radius: i32,
    color: Rgba,
}

impl Circle {
    /// Circle in the default fill color (opaque white).
    pub fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self::colored(cx, cy, radius, Rgba::WHITE)
    }

    /// A negative radius is accepted and draws nothing.
    pub fn colored(cx: i32, cy: i32, radius: i32, color: Rgba) -> Self {
        Self { cx, cy, radius, color }
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.set_draw_color(self.color);

        let r = self.radius;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    canvas.draw_point(self.cx + dx, self.cy + dy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── triangle constructors ─────────────────────────────────────────────

    #[test]
    fn triangle_default_vertex_colors() {
        let tri = Triangle::new(p(300.0, 100.0), p(50.0, 250.0), p(400.0, 250.0));
        let verts = tri.vertices();
        assert_eq!(verts[0].color, Rgba::new(255, 0, 0, 255));
        assert_eq!(verts[1].color, Rgba::new(0, 0, 255, 255));
        assert_eq!(verts[2].color, Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn triangle_solid_colors_all_vertices() {
        let tri = Triangle::solid(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), MAGENTA);
        assert!(tri.vertices().iter().all(|v| v.color == MAGENTA));
    }

    #[test]
    fn triangle_shaded_keeps_vertex_order() {
        let colors = [Rgba::rgb(1, 2, 3), Rgba::rgb(4, 5, 6), Rgba::rgb(7, 8, 9)];
        let tri = Triangle::shaded(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), colors);
        for (v, c) in tri.vertices().iter().zip(colors) {
            assert_eq!(v.color, c);
        }
    }

    // ── default fill colors ───────────────────────────────────────────────

    #[test]
    fn rectangle_default_color_is_opaque_white() {
        assert_eq!(Rectangle::new(0, 0, 10, 10).color(), Rgba::new(255, 255, 255, 255));
    }

    #[test]
    fn circle_default_color_is_opaque_white() {
        assert_eq!(Circle::new(0, 0, 5).color(), Rgba::new(255, 255, 255, 255));
    }

    // ── circle fill membership ────────────────────────────────────────────

    #[test]
    fn circle_paints_exactly_the_inclusive_disk() {
        let r: i32 = 7;
        let (cx, cy) = (10, 10);

        let mut canvas = Canvas::new(21, 21);
        Primitive::from(Circle::colored(cx, cy, r, MAGENTA)).draw(&mut canvas);

        for dy in -r - 1..=r + 1 {
            for dx in -r - 1..=r + 1 {
                let painted = canvas.pixel(cx + dx, cy + dy) == Some(MAGENTA);
                let inside = dx * dx + dy * dy <= r * r;
                assert_eq!(painted, inside, "offset ({dx},{dy})");
            }
        }
    }

    #[test]
    fn circle_boundary_pixels_included() {
        let r = 5;
        let mut canvas = Canvas::new(16, 16);
        Primitive::from(Circle::colored(7, 7, r, MAGENTA)).draw(&mut canvas);

        // All four axis extremes sit at exactly distance r.
        assert_eq!(canvas.pixel(7 + r, 7), Some(MAGENTA));
        assert_eq!(canvas.pixel(7 - r, 7), Some(MAGENTA));
        assert_eq!(canvas.pixel(7, 7 + r), Some(MAGENTA));
        assert_eq!(canvas.pixel(7, 7 - r), Some(MAGENTA));

        // Distance r + 1 is out.
        assert_ne!(canvas.pixel(7 + r + 1, 7), Some(MAGENTA));
    }

    #[test]
    fn circle_negative_radius_draws_nothing() {
        let mut canvas = Canvas::new(8, 8);
        Primitive::from(Circle::colored(4, 4, -3, MAGENTA)).draw(&mut canvas);
        assert!(canvas.pixels().iter().all(|&px| px == Rgba::TRANSPARENT));
    }

    #[test]
    fn circle_clips_at_canvas_edge() {
        let mut canvas = Canvas::new(8, 8);
        Primitive::from(Circle::colored(0, 0, 3, MAGENTA)).draw(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), Some(MAGENTA));
        assert_eq!(canvas.pixel(3, 0), Some(MAGENTA));
    }

    // ── zero-sized target policy ──────────────────────────────────────────

    #[test]
    fn all_variants_accept_zero_sized_canvas() {
        let mut canvas = Canvas::new(0, 0);

        Primitive::from(Triangle::new(p(0.0, 0.0), p(5.0, 0.0), p(0.0, 5.0))).draw(&mut canvas);
        Primitive::from(Rectangle::new(0, 0, 5, 5)).draw(&mut canvas);
        Primitive::from(Circle::new(2, 2, 2)).draw(&mut canvas);

        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn triangle_draw_leaves_draw_color_untouched() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_draw_color(MAGENTA);
        Primitive::from(Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0))).draw(&mut canvas);
        assert_eq!(canvas.draw_color(), MAGENTA);
    }

    // ── rectangle draw ────────────────────────────────────────────────────

    #[test]
    fn rectangle_draw_fills_stored_bounds() {
        let mut canvas = Canvas::new(8, 8);
        Primitive::from(Rectangle::colored(1, 2, 3, 2, MAGENTA)).draw(&mut canvas);
        assert_eq!(canvas.pixel(1, 2), Some(MAGENTA));
        assert_eq!(canvas.pixel(3, 3), Some(MAGENTA));
        assert_eq!(canvas.pixel(4, 2), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.pixel(1, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn rectangle_zero_extent_draws_nothing() {
        let mut canvas = Canvas::new(8, 8);
        Primitive::from(Rectangle::colored(1, 1, 0, 0, MAGENTA)).draw(&mut canvas);
        assert!(canvas.pixels().iter().all(|&px| px == Rgba::TRANSPARENT));
    }
}
