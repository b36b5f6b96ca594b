use std::path::{Path, PathBuf};

use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::{NdTensor, Tensor};

/// The fixed input/output contract of the pre-trained digit model: one
/// 28x28x1 float tensor in, a probability vector over the ten digit
/// classes out.
///
/// Implementations must tolerate repeated sequential calls; concurrent
/// calls are not required.
pub trait DigitClassifier {
    fn predict(&self, digit: &NdTensor<f32, 3>) -> anyhow::Result<[f32; 10]>;
}

/// Pre-trained digit classifier backed by an `.rten` model file.
pub struct RtenDigitClassifier {
    model: Model,
}

impl RtenDigitClassifier {
    /// Standard cache location for the digit model
    pub fn default_model_path() -> anyhow::Result<PathBuf> {
        let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(Path::new(&home_dir).join(".cache/digitpad/digit-classifier.rten"))
    }

    /// Load the model from `path`. A missing or unreadable model is fatal:
    /// the recognizer cannot run without it and never substitutes a stand-in.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Digit model not found. Convert the pretrained model with rten-convert \
                 and place it at:\n  - {}",
                path.display()
            );
        }

        let model = Model::load_file(path)?;
        Ok(Self { model })
    }
}

impl DigitClassifier for RtenDigitClassifier {
    fn predict(&self, digit: &NdTensor<f32, 3>) -> anyhow::Result<[f32; 10]> {
        let [height, width, channels] = digit.shape();

        // The model takes a batch of one.
        let batch = digit.reshaped([1, height, width, channels]);
        let output = self
            .model
            .run_one((&batch).into(), None)
            .map_err(|e| anyhow::anyhow!("digit model inference failed: {}", e))?;

        let probs: Tensor<f32> = output
            .try_into()
            .map_err(|_| anyhow::anyhow!("digit model returned a non-float output"))?;

        let row: Vec<f32> = probs.iter().copied().collect();
        anyhow::ensure!(
            row.len() == 10,
            "expected 10 class probabilities, got {}",
            row.len()
        );

        let mut out = [0.0f32; 10];
        out.copy_from_slice(&row);
        Ok(out)
    }
}
