use clap::Parser;
use inkglyph::input::{InkCharacter, InkDocument};
use inkglyph::{Recognition, RecognitionConfig, RecognitionContext, RecognizeError, Recognizer};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inkglyph", about = "Recognize handwritten characters from pen strokes")]
struct Cli {
    /// Input ink document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Surface width (overrides the document's surface)
    #[arg(long)]
    width: Option<f64>,

    /// Surface height (overrides the document's surface)
    #[arg(long)]
    height: Option<f64>,

    /// Threshold overrides (JSON, any subset of the recognition config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every segment with its curvature statistics
    #[arg(short, long)]
    verbose: bool,
}

/// Everything printed for one character.
struct Report {
    label: Option<String>,
    segments: Vec<String>,
    primitives: String,
    candidates: String,
    result: Result<Recognition, RecognizeError>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let doc = InkDocument::load(&cli.input)?;
    let config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => RecognitionConfig::default(),
    };
    let base = doc.context();
    let context = RecognitionContext::new(
        cli.width.unwrap_or(base.surface_width),
        cli.height.unwrap_or(base.surface_height),
    );

    // Header
    eprintln!();
    eprintln!(
        "  inkglyph \u{00b7} {} character(s) \u{00b7} {}x{}",
        doc.characters.len(),
        context.surface_width,
        context.surface_height
    );
    eprintln!();

    // Each character gets its own recognizer; nothing is shared.
    let reports: Vec<Report> = doc
        .characters
        .par_iter()
        .map(|c| run(c, &config, &context))
        .collect();

    let mut recognized = 0;
    let mut labelled = 0;
    let mut correct = 0;
    for (i, report) in reports.iter().enumerate() {
        if cli.verbose {
            for s in &report.segments {
                println!("         {s}");
            }
        }
        let shown = match &report.result {
            Ok(Recognition::Symbol(c)) => {
                recognized += 1;
                format!("'{c}'")
            }
            Ok(r) => r.to_string(),
            Err(e) => format!("error: {e}"),
        };
        let verdict = match (&report.label, &report.result) {
            (Some(label), Ok(r)) => {
                labelled += 1;
                let hit = r.symbol().map(String::from).as_deref() == Some(label.as_str());
                if hit {
                    correct += 1;
                    "  \u{2713}".to_string()
                } else {
                    format!("  \u{2717} expected '{label}'")
                }
            }
            (Some(_), Err(_)) => {
                labelled += 1;
                String::new()
            }
            _ => String::new(),
        };
        println!(
            "  {:>3}  {:<6} {:<14} {}{}",
            i + 1,
            report.primitives,
            report.candidates,
            shown,
            verdict
        );
    }

    // Footer
    eprintln!();
    eprintln!("  Recognized  {}/{}", recognized, reports.len());
    if labelled > 0 {
        eprintln!("  Correct     {}/{}", correct, labelled);
    }
    eprintln!();

    Ok(())
}

fn run(character: &InkCharacter, config: &RecognitionConfig, context: &RecognitionContext) -> Report {
    let label = character.label.clone();
    let strokes = match character.strokes() {
        Ok(strokes) => strokes,
        Err(e) => {
            return Report {
                label,
                segments: Vec::new(),
                primitives: String::new(),
                candidates: String::new(),
                result: Err(e),
            }
        }
    };

    let mut recognizer = Recognizer::new(config.clone(), *context);
    for stroke in strokes {
        recognizer.push_stroke(stroke);
    }

    let buffer = recognizer.buffer();
    let segments = buffer
        .segments()
        .iter()
        .map(|s| format!("{s}  hist {:?}", s.curvature_histogram()))
        .collect();
    let primitives = buffer.primitives();
    let tags = primitives.iter().map(|p| p.tag()).collect();
    let candidates = inkglyph::resolve(&primitives).to_string();

    Report {
        label,
        segments,
        primitives: tags,
        candidates,
        result: Ok(recognizer.finish_character()),
    }
}
