pub mod canvas;
pub mod models;
pub mod recognition;
pub mod render;
pub mod ui;

pub use canvas::Canvas;
pub use models::{Blob, BoundingBox, DigitPrediction};
pub use recognition::classifier::{DigitClassifier, RtenDigitClassifier};
pub use recognition::DigitRecognizer;
pub use render::{annotate, RenderConfig};
