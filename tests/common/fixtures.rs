use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use image::{Rgb, RgbImage};
use rten_tensor::NdTensor;

use digitpad::recognition::classifier::DigitClassifier;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// A white capture with no ink.
pub fn blank_capture(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Paint a filled ink rectangle with exact pixel extents.
pub fn paint_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32) {
    for py in y..y + height {
        for px in x..x + width {
            img.put_pixel(px, py, BLACK);
        }
    }
}

/// Paint a square ring: an ink outline with a hollow interior, like a
/// drawn "0". `thickness` is the stroke width of the ring wall.
pub fn paint_ring(img: &mut RgbImage, x: u32, y: u32, size: u32, thickness: u32) {
    paint_rect(img, x, y, size, thickness);
    paint_rect(img, x, y + size - thickness, size, thickness);
    paint_rect(img, x, y, thickness, size);
    paint_rect(img, x + size - thickness, y, thickness, size);
}

/// Probability vector with `confidence` at `digit` and the remainder
/// spread evenly over the other nine classes.
pub fn probs(digit: usize, confidence: f32) -> [f32; 10] {
    let rest = (1.0 - confidence) / 9.0;
    let mut out = [rest; 10];
    out[digit] = confidence;
    out
}

/// Classifier double that replays a scripted sequence of probability
/// vectors and counts how often it was consulted.
pub struct MockClassifier {
    responses: Mutex<VecDeque<[f32; 10]>>,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new(responses: Vec<[f32; 10]>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DigitClassifier for MockClassifier {
    fn predict(&self, _digit: &NdTensor<f32, 3>) -> anyhow::Result<[f32; 10]> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("mock classifier ran out of scripted answers"))
    }
}
