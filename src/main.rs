use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use digitpad::render::{annotate, RenderConfig};
use digitpad::{DigitRecognizer, RtenDigitClassifier};

#[derive(Parser)]
#[command(name = "digitpad")]
#[command(about = "Recognize hand-drawn digits in a captured canvas image")]
struct Cli {
    /// Path to the captured canvas image
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Path to the digit model (defaults to the standard cache location)
    #[arg(long, value_name = "MODEL")]
    model: Option<PathBuf>,

    /// Save an annotated copy of the capture here
    #[arg(short, long, value_name = "PNG")]
    output: Option<PathBuf>,

    /// Only report the boxes that would be classified (faster, no model needed)
    #[arg(long)]
    boxes_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?
        .to_rgb8();

    if args.verbose {
        println!("Image loaded: {}x{}", img.width(), img.height());
    }

    let recognizer = DigitRecognizer::new().with_verbose(args.verbose);

    if args.boxes_only {
        let boxes = recognizer.candidate_boxes(&img);

        println!("\n=== Candidate Digit Boxes ===");
        println!("Total candidates: {}", boxes.len());
        for (i, bbox) in boxes.iter().enumerate() {
            println!(
                "  Box {} at ({}, {}) - {}x{}",
                i + 1,
                bbox.x,
                bbox.y,
                bbox.width,
                bbox.height
            );
        }
        return Ok(());
    }

    // The model is required; a missing model is fatal, not worked around.
    let model_path = match args.model {
        Some(path) => path,
        None => RtenDigitClassifier::default_model_path()?,
    };
    if args.verbose {
        println!("Loading digit model: {:?}", model_path);
    }
    let classifier = RtenDigitClassifier::load(&model_path)?;

    let predictions = recognizer.recognize(&img, &classifier)?;

    println!("\n=== Digit Predictions ===");
    println!("Total predictions: {}", predictions.len());
    for (i, prediction) in predictions.iter().enumerate() {
        println!(
            "  {} - digit {} (confidence {:.1}%) at ({}, {}) {}x{}",
            i + 1,
            prediction.digit,
            prediction.confidence * 100.0,
            prediction.bbox.x,
            prediction.bbox.y,
            prediction.bbox.width,
            prediction.bbox.height
        );
    }

    if let Some(output_path) = args.output {
        let config = RenderConfig::with_system_font();
        let annotated = annotate(&img, &predictions, &config);
        annotated
            .save(&output_path)
            .map_err(|e| anyhow::anyhow!("Failed to save annotated image: {}", e))?;
        if args.verbose {
            println!("Annotated image saved to {:?}", output_path);
        }
    }

    Ok(())
}
