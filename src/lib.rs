//! Highlight text in images
//!
//! Given a raster image and an external text-recognition engine, this crate
//! finds the regions whose recognized text matches a free-text filter and
//! renders the image with those regions shown sharply while everything else
//! is visually suppressed (desaturated, blurred, or any custom effect).
//!
//! The recognizer and the drawing surface are collaborators behind traits:
//! [`TextRecognizer`] supplies raw observations (normalized bounding box +
//! candidate text + confidence) and [`RenderContext`] executes the draw
//! sequence. What lives here is the pipeline between them: the
//! recognizer-to-pixel coordinate flip, the single-flight recognition cache,
//! lenient word-level matching, the aspect-fit render transform, and the
//! highlight composition rules.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use text_highlight::{HighlightPipeline, SourceImage, TextRecognizer};
//! # async fn demo(recognizer: Arc<dyn TextRecognizer>, ctx: &mut impl text_highlight::RenderContext) {
//! let image = SourceImage::open("screenshot.png").unwrap();
//! let pipeline = HighlightPipeline::new(image, recognizer);
//! pipeline.prepare().await;
//! pipeline.render(ctx, (800.0, 600.0), "invoice");
//! # }
//! ```

pub mod compose;
pub mod config;
pub mod geometry;
pub mod matcher;
pub mod pipeline;
pub mod recognize;
pub mod source;

pub use compose::{default_suppress, Effect, HighlightCompositor, RenderContext};
pub use config::{load_settings, save_settings, HighlightSettings};
pub use geometry::{NormalizedBox, Rect, RenderTransform};
pub use matcher::{match_regions, FilterQuery};
pub use pipeline::HighlightPipeline;
pub use recognize::{
    RawObservation, RecognitionError, RecognitionSession, RecognizedCandidate, TextRecognizer,
    TextRegion, DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use source::{ImageError, SourceImage};
