use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// Canvas ground color (light).
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
/// Ink color (dark).
pub const INK: Rgb<u8> = Rgb([0, 0, 0]);
/// Default brush radius in pixels.
pub const BRUSH_RADIUS: i32 = 5;

/// In-memory drawing surface standing in for the UI's drawable area.
///
/// Strokes are stamped as filled brush circles; `image()` exposes the
/// raster exactly as a "predict" trigger would capture it.
pub struct Canvas {
    image: RgbImage,
    pub brush_radius: i32,
    pub ink: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            brush_radius: BRUSH_RADIUS,
            ink: INK,
            background: BACKGROUND,
        }
    }

    /// Stamp a single brush circle. Positions outside the canvas are
    /// clipped, not errors.
    pub fn dab(&mut self, pos: (i32, i32)) {
        draw_filled_circle_mut(&mut self.image, pos, self.brush_radius, self.ink);
    }

    /// Stamp brush circles along the segment from `from` to `to`, so fast
    /// pointer motion still leaves a continuous line.
    pub fn stroke_to(&mut self, from: (i32, i32), to: (i32, i32)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let distance = dx.abs().max(dy.abs());

        for i in 0..=distance {
            let x = from.0 + (i as f32 / distance.max(1) as f32 * dx as f32) as i32;
            let y = from.1 + (i as f32 / distance.max(1) as f32 * dy as f32) as i32;
            self.dab((x, y));
        }
    }

    /// Refill the whole surface with the ground color.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
    }

    /// The raster a capture would see.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}
