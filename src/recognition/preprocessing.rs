use image::{imageops, GrayImage, RgbImage};
use imageproc::contrast::{threshold, ThresholdType};

/// Convert a captured canvas region to grayscale with standard luma
/// weighting
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}

/// Binarize with an inverted threshold: ink is drawn dark on a light
/// canvas, so pixels above `cutoff` become background (0) and the rest
/// become foreground (255). Output dimensions equal the input's.
pub fn binarize(gray: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(gray, cutoff, ThresholdType::BinaryInverted)
}
