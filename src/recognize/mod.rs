//! Text recognition boundary
//!
//! Defines the contract with the external text-recognition engine and the
//! conversion of its raw observations into pixel-space text regions. The
//! engine itself is a collaborator behind [`TextRecognizer`]; this crate
//! never implements recognition.

pub mod session;

use async_trait::async_trait;
use thiserror::Error;

use crate::geometry::{NormalizedBox, Rect};
use crate::source::SourceImage;

pub use session::RecognitionSession;

/// Default confidence cutoff for observation queries.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Failure reported by the recognition layer.
///
/// `Clone` so a single in-flight run's failure can be delivered to every
/// caller awaiting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    /// The external recognizer reported an error or could not process the
    /// image. Treated opaquely; the message is for logs only.
    #[error("text recognizer failed: {0}")]
    Recognizer(String),
}

/// One candidate reading of a recognized fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedCandidate {
    pub text: String,
    /// Recognizer-reported confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Raw recognizer output for one fragment: candidate readings (best first)
/// plus a normalized bounding box in the recognizer's own coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub candidates: Vec<RecognizedCandidate>,
    pub bounding_box: NormalizedBox,
}

/// A recognized text fragment and its rectangle in image pixel space.
///
/// Identity is the `(text, rect)` pair; no recognizer-assigned id exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    /// Recognized fragment content.
    pub text: String,
    /// Bounding rectangle in the image's pixel space, top-left origin.
    pub rect: Rect,
    /// Confidence of the top candidate, copied verbatim.
    pub confidence: f64,
}

impl TextRegion {
    /// Convert one raw observation into pixel space.
    ///
    /// Observations without a top candidate are malformed and dropped here
    /// rather than failing the batch.
    pub fn from_observation(observation: RawObservation, image_size: (u32, u32)) -> Option<Self> {
        let candidate = observation.candidates.into_iter().next()?;
        Some(Self {
            text: candidate.text,
            confidence: candidate.confidence,
            rect: observation.bounding_box.to_pixel_rect(image_size),
        })
    }
}

/// External text-recognition engine.
///
/// Implementations wrap whatever OCR backend is available; errors are
/// reported opaquely through `anyhow` and surfaced once per run.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &SourceImage) -> anyhow::Result<Vec<RawObservation>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(text: &str, confidence: f64) -> RawObservation {
        RawObservation {
            candidates: vec![RecognizedCandidate {
                text: text.to_string(),
                confidence,
            }],
            bounding_box: NormalizedBox::new(0.1, 0.2, 0.3, 0.1),
        }
    }

    #[test]
    fn test_from_observation_uses_top_candidate() {
        let mut obs = observation("first", 0.9);
        obs.candidates.push(RecognizedCandidate {
            text: "second".to_string(),
            confidence: 0.4,
        });

        let region = TextRegion::from_observation(obs, (1000, 500)).unwrap();
        assert_eq!(region.text, "first");
        assert!((region.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_from_observation_maps_into_pixel_space() {
        let region = TextRegion::from_observation(observation("hi", 1.0), (1000, 500)).unwrap();

        // min_y 0.2 + height 0.1 from the bottom => top edge at 0.7 * height.
        assert!((region.rect.x - 100.0).abs() < 1e-9);
        assert!((region.rect.y - 350.0).abs() < 1e-9);
        assert!((region.rect.width - 300.0).abs() < 1e-9);
        assert!((region.rect.height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_observation_without_candidates_is_dropped() {
        let obs = RawObservation {
            candidates: vec![],
            bounding_box: NormalizedBox::new(0.0, 0.0, 1.0, 1.0),
        };
        assert!(TextRegion::from_observation(obs, (100, 100)).is_none());
    }
}
