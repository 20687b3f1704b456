//! JSON ink documents: characters written on a surface, as point lists.
//!
//! ```json
//! {
//!   "surface": { "width": 320, "height": 480 },
//!   "characters": [
//!     { "label": "T", "strokes": [[[100, 50], [200, 50]], [[150, 52], [150, 250]]] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::config::RecognitionContext;
use crate::error::RecognizeError;
use crate::stroke::Stroke;

/// A batch of handwritten characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InkDocument {
    /// Surface the ink was captured on. Defaults to 320 x 480.
    #[serde(default)]
    pub surface: Option<Surface>,
    pub characters: Vec<InkCharacter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

/// One character: its strokes in writing order, each a list of `[x, y]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InkCharacter {
    /// The symbol the writer intended, when known.
    #[serde(default)]
    pub label: Option<String>,
    pub strokes: Vec<Vec<[f64; 2]>>,
}

impl InkDocument {
    pub fn from_json(json: &str) -> Result<Self, RecognizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, RecognizeError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn context(&self) -> RecognitionContext {
        match self.surface {
            Some(s) => RecognitionContext::new(s.width, s.height),
            None => RecognitionContext::default(),
        }
    }
}

impl InkCharacter {
    /// Build the character's strokes.
    pub fn strokes(&self) -> Result<Vec<Stroke>, RecognizeError> {
        if self.strokes.is_empty() {
            return Err(RecognizeError::InvalidInput("character has no strokes".into()));
        }
        self.strokes
            .iter()
            .map(|points| {
                let points: Vec<Point> = points.iter().map(|&[x, y]| Point::new(x, y)).collect();
                Stroke::from_points(&points)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document() {
        let doc = InkDocument::from_json(
            r#"{
                "surface": { "width": 640, "height": 960 },
                "characters": [
                    { "label": "T", "strokes": [[[100, 50], [200, 50]], [[150, 52], [150, 250]]] },
                    { "strokes": [[[10, 10]]] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.context(), RecognitionContext::new(640.0, 960.0));
        assert_eq!(doc.characters.len(), 2);
        assert_eq!(doc.characters[0].label.as_deref(), Some("T"));
        assert_eq!(doc.characters[0].strokes().unwrap().len(), 2);
        assert_eq!(doc.characters[1].label, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            InkDocument::from_json("{ \"characters\": 3 }"),
            Err(RecognizeError::Json(_))
        ));
        let empty = InkCharacter {
            label: None,
            strokes: vec![vec![]],
        };
        assert!(matches!(empty.strokes(), Err(RecognizeError::EmptyStroke)));
        assert!(matches!(
            InkCharacter::default().strokes(),
            Err(RecognizeError::InvalidInput(_))
        ));
    }

    #[test]
    fn default_surface() {
        let doc = InkDocument::from_json(r#"{ "characters": [] }"#).unwrap();
        assert_eq!(doc.context(), RecognitionContext::default());
    }
}
