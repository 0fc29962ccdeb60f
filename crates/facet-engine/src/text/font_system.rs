use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Rgba;
use crate::raster::Texture;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Lays out and rasterizes one line of text at `size` pixels into an
    /// RGBA texture: white glyphs, coverage in the alpha channel.
    ///
    /// Returns `None` for an unknown `FontId` or when nothing rasterizes
    /// (empty or all-whitespace text).
    pub fn rasterize_line(&self, id: FontId, text: &str, size: f32) -> Option<Texture> {
        let font = self.fonts.get(id.0)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // Tight extents over the glyph bitmaps; whitespace contributes
        // nothing and is dropped below.
        let mut width = 0u32;
        let mut height = 0u32;
        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            width = width.max((g.x.max(0.0) as u32) + g.width as u32);
            height = height.max((g.y.max(0.0) as u32) + g.height as u32);
        }
        if width == 0 || height == 0 {
            return None;
        }

        let mut pixels = vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)];

        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }

            let (metrics, coverage) = font.rasterize_config(g.key);
            let gx = g.x.max(0.0) as u32;
            let gy = g.y.max(0.0) as u32;

            for row in 0..metrics.height as u32 {
                for col in 0..metrics.width as u32 {
                    let cov = coverage[(row * metrics.width as u32 + col) as usize];
                    if cov == 0 {
                        continue;
                    }
                    let (px, py) = (gx + col, gy + row);
                    if px < width && py < height {
                        pixels[(py * width + px) as usize] = Rgba::new(255, 255, 255, cov);
                    }
                }
            }
        }

        Some(Texture::from_pixels(width, height, pixels))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_font_rejects_garbage_bytes() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(&[0u8; 32]).is_err());
    }

    #[test]
    fn rasterize_line_unknown_font_is_none() {
        let fonts = FontSystem::new();
        assert!(fonts.rasterize_line(FontId(7), "hello", 32.0).is_none());
    }
}
