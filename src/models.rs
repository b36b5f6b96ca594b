/// Axis-aligned box in mask-local pixel coordinates.
///
/// Always non-degenerate: `width > 0` and `height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// One past the rightmost column covered by the box.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom row covered by the box.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// One maximal connected ink component found in a binary mask.
#[derive(Debug, Clone)]
pub struct Blob {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
}

impl Blob {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.min_x,
            y: self.min_y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// A recognized digit with the box it was found in and the classifier's
/// trust in the answer.
#[derive(Debug, Clone)]
pub struct DigitPrediction {
    pub bbox: BoundingBox,
    /// Digit class, 0 through 9.
    pub digit: u8,
    /// Maximum class probability, in `[0, 1]`.
    pub confidence: f32,
}
