//! Highlight Pipeline
//!
//! Ties the pieces together: owns the recognition session and settings,
//! matches cached regions against the current filter string, and drives the
//! compositor. Recognition runs in the background; rendering never waits on
//! it and works from whatever has been cached so far.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::compose::{default_suppress, HighlightCompositor, RenderContext};
use crate::config::HighlightSettings;
use crate::geometry::Rect;
use crate::matcher::{match_regions, FilterQuery};
use crate::recognize::{RecognitionError, RecognitionSession, TextRecognizer, TextRegion};
use crate::source::SourceImage;

/// Highlights text regions of one image that match a filter string.
pub struct HighlightPipeline {
    session: Arc<RecognitionSession>,
    settings: HighlightSettings,
    compositor: HighlightCompositor,
}

impl HighlightPipeline {
    /// Create a pipeline with default settings.
    pub fn new(image: SourceImage, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self::with_settings(image, recognizer, HighlightSettings::default())
    }

    /// Create a pipeline with custom settings.
    pub fn with_settings(
        image: SourceImage,
        recognizer: Arc<dyn TextRecognizer>,
        settings: HighlightSettings,
    ) -> Self {
        let compositor = HighlightCompositor::new(&settings);
        Self {
            session: Arc::new(RecognitionSession::new(image, recognizer)),
            settings,
            compositor,
        }
    }

    /// The underlying recognition session.
    pub fn session(&self) -> &Arc<RecognitionSession> {
        &self.session
    }

    /// Run recognition ahead of rendering.
    ///
    /// Failure is logged, not propagated: the view still renders, just
    /// without highlights, and the session cache stays empty so a later call
    /// retries.
    pub async fn prepare(&self) {
        match self.session.regions().await {
            Ok(regions) => debug!("recognition ready: {} regions", regions.len()),
            Err(err) => warn!("text recognition failed: {err}"),
        }
    }

    /// Joined text of all confident regions, e.g. for an accessibility
    /// label describing the image.
    pub async fn recognized_text(&self) -> Result<String, RecognitionError> {
        self.session
            .text(self.settings.recognition.confidence_threshold, " ")
            .await
    }

    /// Draw one frame with the default grayscale suppression.
    ///
    /// The filter string is read fresh on every render.
    pub fn render<C: RenderContext>(&self, ctx: &mut C, dest_size: (f64, f64), filter: &str) {
        self.render_with(ctx, dest_size, filter, default_suppress)
    }

    /// Draw one frame with a custom suppression effect for the background
    /// pass. Matched regions are always drawn from the unsuppressed image.
    ///
    /// Until recognition has completed successfully (still pending, or
    /// failed) there is no region list to match against, so the image draws
    /// fully unsuppressed even when a filter is set. Once regions exist, a
    /// non-matching filter suppresses the whole image.
    pub fn render_with<C, F>(&self, ctx: &mut C, dest_size: (f64, f64), filter: &str, suppress: F)
    where
        C: RenderContext,
        F: Fn(&mut C, Rect, (u32, u32)),
    {
        let image_size = self.session.image().dimensions();
        let query = FilterQuery::parse(filter);

        let matched = match self.session.cached() {
            Some(regions) if !query.is_empty() => {
                let threshold = self.settings.recognition.confidence_threshold;
                let confident: Vec<TextRegion> = regions
                    .iter()
                    .filter(|region| region.confidence >= threshold)
                    .cloned()
                    .collect();
                Some(match_regions(&confident, &query))
            }
            // No filter, or no recognition result for this frame: plain draw.
            _ => None,
        };

        match matched {
            Some(matched) => {
                self.compositor
                    .render(ctx, image_size, dest_size, &matched, true, suppress)
            }
            None => self
                .compositor
                .render(ctx, image_size, dest_size, &[], false, suppress),
        }
    }
}
