pub mod classifier;
pub mod normalize;
pub mod preprocessing;
pub mod segmentation;

use image::{imageops, GrayImage, RgbImage};

use crate::models::{BoundingBox, DigitPrediction};
use classifier::DigitClassifier;

/// Main recognition pipeline orchestrator
pub struct DigitRecognizer {
    /// Luma cutoff separating ink from canvas background.
    pub ink_threshold: u8,
    /// Minimum width and height a box must reach to count as a digit.
    pub min_box_size: u32,
    /// Minimum class probability a prediction must reach to be reported.
    pub min_confidence: f32,
    pub verbose: bool,
}

impl DigitRecognizer {
    pub fn new() -> Self {
        Self {
            ink_threshold: 100,
            min_box_size: 20,
            min_confidence: 0.25,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Size filter: stray dots and noise strokes smaller than
    /// `min_box_size` in either dimension are not digits. Inclusive at the
    /// threshold.
    pub fn is_digit_sized(&self, bbox: &BoundingBox) -> bool {
        bbox.width >= self.min_box_size && bbox.height >= self.min_box_size
    }

    /// Confidence filter: guesses below `min_confidence` are noise, not
    /// predictions. Inclusive at the threshold.
    pub fn is_confident(&self, confidence: f32) -> bool {
        confidence >= self.min_confidence
    }

    /// Run the full pipeline on one captured canvas region.
    ///
    /// Returns predictions in blob discovery order. A capture with no ink,
    /// or where every blob fails a filter, yields an empty vector; the only
    /// error path is the classifier itself failing.
    pub fn recognize(
        &self,
        canvas: &RgbImage,
        classifier: &dyn DigitClassifier,
    ) -> anyhow::Result<Vec<DigitPrediction>> {
        if self.verbose {
            println!("\nBinarizing {}x{} capture...", canvas.width(), canvas.height());
        }
        let mask = self.binarize(canvas);

        if self.verbose {
            println!("\nSegmenting ink blobs...");
        }
        let blobs = segmentation::find_blobs(&mask);

        if self.verbose {
            println!("Found {} blobs", blobs.len());
        }

        let mut predictions = Vec::new();

        for blob in &blobs {
            let bbox = blob.bounding_box();

            // Dropped silently: small strays are expected, not failures.
            if !self.is_digit_sized(&bbox) {
                if self.verbose {
                    println!(
                        "  Blob at ({}, {}) {}x{}: below digit size, skipped",
                        bbox.x, bbox.y, bbox.width, bbox.height
                    );
                }
                continue;
            }

            let crop = imageops::crop_imm(&mask, bbox.x, bbox.y, bbox.width, bbox.height).to_image();
            let tensor = normalize::normalize_digit(&crop);

            let probs = classifier.predict(&tensor)?;
            let (digit, confidence) = top_class(&probs);

            if !self.is_confident(confidence) {
                if self.verbose {
                    println!(
                        "  Blob at ({}, {}): best guess {} at {:.3}, below confidence floor, skipped",
                        bbox.x, bbox.y, digit, confidence
                    );
                }
                continue;
            }

            if self.verbose {
                println!(
                    "  Blob at ({}, {}) {}x{}: digit {} (confidence {:.3})",
                    bbox.x, bbox.y, bbox.width, bbox.height, digit, confidence
                );
            }

            predictions.push(DigitPrediction {
                bbox,
                digit,
                confidence,
            });
        }

        Ok(predictions)
    }

    /// Binarized view of a capture (for debugging)
    pub fn binarize(&self, canvas: &RgbImage) -> GrayImage {
        let gray = preprocessing::to_grayscale(canvas);
        preprocessing::binarize(&gray, self.ink_threshold)
    }

    /// Boxes that would reach the classifier, without classifying them
    /// (for debugging)
    pub fn candidate_boxes(&self, canvas: &RgbImage) -> Vec<BoundingBox> {
        let mask = self.binarize(canvas);
        segmentation::find_blobs(&mask)
            .iter()
            .map(|blob| blob.bounding_box())
            .filter(|bbox| self.is_digit_sized(bbox))
            .collect()
    }
}

impl Default for DigitRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Argmax over the class probabilities: the predicted digit and the
/// probability backing it.
fn top_class(probs: &[f32; 10]) -> (u8, f32) {
    let mut best = 0usize;
    for (i, p) in probs.iter().enumerate() {
        if *p > probs[best] {
            best = i;
        }
    }
    (best as u8, probs[best])
}
