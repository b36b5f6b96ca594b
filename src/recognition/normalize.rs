use image::{imageops, GrayImage, Luma};
use rten_tensor::NdTensor;

/// Side length of the tensor the classifier was trained on.
pub const DIGIT_SIZE: u32 = 28;
/// The glyph itself is shrunk to this inner square.
pub const GLYPH_SIZE: u32 = 18;
/// Background margin around the glyph, on all four sides.
pub const MARGIN: u32 = 5;

const LUMA_MAX: f32 = 255.0;

/// Turn one cropped mask region (ink = 255) into the 28x28x1 float tensor
/// the digit classifier expects.
///
/// The crop is shrunk to 18x18, viewed in the captured convention (dark ink
/// on a light ground), framed with a uniform 5px border of that ground,
/// rescaled to `[0, 1]` and inverted so ink lands at 1.0 and background at
/// 0.0 -- the polarity the classifier was trained on. A blank crop comes
/// out as all zeros.
pub fn normalize_digit(crop: &GrayImage) -> NdTensor<f32, 3> {
    // Triangle filtering averages without overshoot, so the shrunk glyph
    // never gains ink outside the original footprint.
    let resized = imageops::resize(crop, GLYPH_SIZE, GLYPH_SIZE, imageops::FilterType::Triangle);

    // Back to the canvas convention: ink dark, ground light.
    let mut inked = resized;
    imageops::invert(&mut inked);

    // Frame the glyph in a light ground so the stroke sits centered with
    // margin, like the classifier's training digits.
    let mut framed = GrayImage::from_pixel(DIGIT_SIZE, DIGIT_SIZE, Luma([u8::MAX]));
    imageops::replace(&mut framed, &inked, MARGIN as i64, MARGIN as i64);

    // Rescale to [0, 1], then invert to ink-high.
    let mut values = Vec::with_capacity((DIGIT_SIZE * DIGIT_SIZE) as usize);
    for y in 0..DIGIT_SIZE {
        for x in 0..DIGIT_SIZE {
            let v = framed.get_pixel(x, y)[0] as f32 / LUMA_MAX;
            values.push(1.0 - v);
        }
    }

    NdTensor::from_data([DIGIT_SIZE as usize, DIGIT_SIZE as usize, 1], values)
}
