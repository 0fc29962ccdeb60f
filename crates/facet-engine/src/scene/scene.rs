use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::coords::Rgba;
use crate::raster::{Canvas, Texture};
use crate::text::FontSystem;
use crate::window::Runtime;

use super::Primitive;

/// Scene configuration.
///
/// Defaults reproduce the demo's fixed setup: a 1000×1000 window, the label
/// "press ESC to quit" rasterized at 70 px from `data/FreeSans.ttf` and
/// blitted to (10, 10, 300×70).
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub font_path: PathBuf,
    pub label_text: String,
    pub label_size: f32,
    /// Destination rect for the label blit: (x, y, w, h).
    pub label_rect: (i32, i32, i32, i32),
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "facet".to_string(),
            width: 1000,
            height: 1000,
            font_path: PathBuf::from("data/FreeSans.ttf"),
            label_text: "press ESC to quit".to_string(),
            label_size: 70.0,
            label_rect: (10, 10, 300, 70),
        }
    }
}

/// An ordered primitive list plus the canvas and overlay label.
///
/// Primitives paint in insertion order; later pushes overdraw earlier ones
/// where they overlap. The scene renders exactly one frame and then waits in
/// [`run`] until an exit trigger arrives.
///
/// [`run`]: Scene::run
pub struct Scene {
    config: SceneConfig,
    canvas: Canvas,
    label: Texture,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Builds the scene, acquiring everything it owns up front: the canvas,
    /// the font asset, and the rasterized label texture.
    ///
    /// Any failure (missing or unparseable font, empty label) is fatal and
    /// propagates; there is no degraded mode.
    pub fn new(config: SceneConfig) -> Result<Self> {
        let bytes = std::fs::read(&config.font_path)
            .with_context(|| format!("failed to read font asset {:?}", config.font_path))?;

        let mut fonts = FontSystem::new();
        let font = fonts
            .load_font(&bytes)
            .with_context(|| format!("failed to parse font asset {:?}", config.font_path))?;

        let label = fonts
            .rasterize_line(font, &config.label_text, config.label_size)
            .context("failed to rasterize label text")?;

        Ok(Self::with_label(config, label))
    }

    /// Builds the scene around an already-rasterized label texture.
    pub fn with_label(config: SceneConfig, label: Texture) -> Self {
        let canvas = Canvas::new(config.width, config.height);
        Self {
            config,
            canvas,
            label,
            primitives: Vec::new(),
        }
    }

    /// Appends a primitive to the paint list. O(1), no validation.
    pub fn push_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Rasterizes the frame: clear to opaque black, primitives in insertion
    /// order, then the label blit on top.
    pub fn render(&mut self) {
        self.canvas.set_draw_color(Rgba::BLACK);
        self.canvas.clear();

        for primitive in &self.primitives {
            primitive.draw(&mut self.canvas);
        }

        let (x, y, w, h) = self.config.label_rect;
        self.canvas.copy(&self.label, x, y, w, h);
    }

    /// Opens the window, presents the rendered frame, and blocks until a
    /// close request or Escape key-down arrives.
    ///
    /// Consumes the scene; the run loop executes once per process. Window and
    /// GPU resources live inside the call and are released before it returns,
    /// in reverse order of acquisition.
    pub fn run(self) -> Result<()> {
        Runtime::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::{Circle, Rectangle, Triangle};

    fn test_config(w: u32, h: u32) -> SceneConfig {
        SceneConfig {
            width: w,
            height: h,
            label_rect: (0, 0, 0, 0), // no label unless a test asks for one
            ..SceneConfig::default()
        }
    }

    fn scene(w: u32, h: u32) -> Scene {
        Scene::with_label(test_config(w, h), Texture::from_pixels(0, 0, vec![]))
    }

    // ── render basics ─────────────────────────────────────────────────────

    #[test]
    fn render_clears_to_opaque_black() {
        let mut s = scene(4, 4);
        s.render();
        assert!(s.canvas().pixels().iter().all(|&p| p == Rgba::BLACK));
    }

    #[test]
    fn push_keeps_insertion_order_count() {
        let mut s = scene(4, 4);
        s.push_primitive(Rectangle::new(0, 0, 1, 1));
        s.push_primitive(Circle::new(2, 2, 1));
        assert_eq!(s.primitive_count(), 2);
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn later_primitive_wins_at_overlap() {
        let red = Rgba::rgb(255, 0, 0);
        let blue = Rgba::rgb(0, 0, 255);

        let mut s = scene(10, 10);
        s.push_primitive(Rectangle::colored(0, 0, 6, 6, red));
        s.push_primitive(Rectangle::colored(3, 3, 6, 6, blue));
        s.render();

        // Overlap region belongs to the later rectangle.
        assert_eq!(s.canvas().pixel(4, 4), Some(blue));
        // Non-overlapping parts keep their own colors.
        assert_eq!(s.canvas().pixel(1, 1), Some(red));
        assert_eq!(s.canvas().pixel(8, 8), Some(blue));
    }

    #[test]
    fn reversed_push_order_flips_the_overlap() {
        let red = Rgba::rgb(255, 0, 0);
        let blue = Rgba::rgb(0, 0, 255);

        let mut s = scene(10, 10);
        s.push_primitive(Rectangle::colored(3, 3, 6, 6, blue));
        s.push_primitive(Rectangle::colored(0, 0, 6, 6, red));
        s.render();

        assert_eq!(s.canvas().pixel(4, 4), Some(red));
    }

    // ── label ─────────────────────────────────────────────────────────────

    #[test]
    fn label_blits_on_top_at_its_rect() {
        let green = Rgba::rgb(0, 255, 0);
        let mut config = test_config(8, 8);
        config.label_rect = (1, 1, 2, 2);

        let mut s = Scene::with_label(config, Texture::from_pixels(1, 1, vec![green]));
        s.push_primitive(Rectangle::colored(0, 0, 8, 8, Rgba::rgb(255, 0, 0)));
        s.render();

        assert_eq!(s.canvas().pixel(1, 1), Some(green));
        assert_eq!(s.canvas().pixel(2, 2), Some(green));
        assert_eq!(s.canvas().pixel(3, 3), Some(Rgba::rgb(255, 0, 0)));
    }

    // ── full frame ────────────────────────────────────────────────────────

    #[test]
    fn demo_frame_renders_and_tears_down() {
        let rect_color = Rgba::rgb(122, 255, 66);
        let circle_color = Rgba::rgb(255, 128, 192);

        let mut s = scene(1000, 1000);
        s.push_primitive(Triangle::new(
            Vec2::new(300.0, 100.0),
            Vec2::new(50.0, 250.0),
            Vec2::new(400.0, 250.0),
        ));
        s.push_primitive(Rectangle::colored(100, 100, 600, 600, rect_color));
        s.push_primitive(Circle::colored(400, 800, 100, circle_color));
        s.render();

        // The rectangle painted over the triangle's area.
        assert_eq!(s.canvas().pixel(300, 200), Some(rect_color));
        // Circle center and boundary.
        assert_eq!(s.canvas().pixel(400, 800), Some(circle_color));
        assert_eq!(s.canvas().pixel(500, 800), Some(circle_color));
        // Background stays black.
        assert_eq!(s.canvas().pixel(999, 0), Some(Rgba::BLACK));

        // Drop releases the scene's resources without complaint.
        drop(s);
    }

    #[test]
    fn render_twice_is_idempotent() {
        let mut s = scene(10, 10);
        s.push_primitive(Circle::colored(5, 5, 3, Rgba::rgb(1, 2, 3)));
        s.render();
        let first: Vec<_> = s.canvas().pixels().to_vec();
        s.render();
        assert_eq!(s.canvas().pixels(), &first[..]);
    }
}
