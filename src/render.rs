use ab_glyph::FontVec;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::models::DigitPrediction;

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const LABEL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Controls how predictions are drawn onto the capture.
pub struct RenderConfig {
    /// Font for label text. When no font is available, boxes are still
    /// drawn and the text is skipped.
    pub font: Option<FontVec>,
    pub font_scale: f32,
    pub box_thickness: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_scale: 18.0,
            box_thickness: 3,
        }
    }
}

impl RenderConfig {
    /// Try to load a font from common system locations, falling back to
    /// box-only rendering when none parses.
    pub fn with_system_font() -> Self {
        let font_paths = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in font_paths {
            if let Ok(data) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(data) {
                    return Self {
                        font: Some(font),
                        ..Self::default()
                    };
                }
            }
        }

        Self::default()
    }
}

/// Draw one annotation per prediction onto a copy of the capture: a hollow
/// box at the prediction's coordinates plus a digit-and-percentage label
/// near its top-left corner. The output has the input's dimensions.
pub fn annotate(
    image: &RgbImage,
    predictions: &[DigitPrediction],
    config: &RenderConfig,
) -> RgbImage {
    let mut annotated = image.clone();

    for prediction in predictions {
        let bbox = &prediction.bbox;

        // Nested rects give the outline its thickness.
        for inset in 0..config.box_thickness {
            let width = bbox.width.saturating_sub(2 * inset);
            let height = bbox.height.saturating_sub(2 * inset);
            if width == 0 || height == 0 {
                break;
            }
            let rect =
                Rect::at((bbox.x + inset) as i32, (bbox.y + inset) as i32).of_size(width, height);
            draw_hollow_rect_mut(&mut annotated, rect, BOX_COLOR);
        }

        if let Some(font) = &config.font {
            let label = format!("{}, %{:.1}", prediction.digit, prediction.confidence * 100.0);
            let text_x = (bbox.x as i32 - 5).max(0);
            let text_y = (bbox.y as i32 - config.font_scale as i32 - 5).max(0);
            draw_text_mut(
                &mut annotated,
                LABEL_COLOR,
                text_x,
                text_y,
                config.font_scale,
                font,
                &label,
            );
        }
    }

    annotated
}
