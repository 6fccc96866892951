//! Highlight Composition
//!
//! Drives a client drawing surface through the highlight draw sequence:
//! aspect-fit transform, suppressed background pass, a masked "window" pass
//! per matched region, and dual-stroke outlines on regions that are large
//! enough on screen.

use tracing::trace;

use crate::config::HighlightSettings;
use crate::geometry::{Rect, RenderTransform};
use crate::recognize::TextRegion;

/// Visual effect a drawing surface can apply to the current pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Desaturate by `amount` in `[0, 1]`.
    Grayscale(f64),
    /// Gaussian blur with the given radius, in source pixels.
    Blur(f64),
}

/// Drawing surface contract.
///
/// The concrete surface (a GPU canvas, a software rasterizer, a test
/// recorder) lives outside this crate. `save`/`restore` bracket transform,
/// clip and effect state the way canvas APIs do; every rectangle passed after
/// the initial translate/scale is in source-image pixel space.
pub trait RenderContext {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, factor: f64);
    /// Restrict subsequent drawing to `rect`.
    fn clip_rect(&mut self, rect: Rect);
    /// Apply an effect to subsequent drawing in the current state.
    fn apply_effect(&mut self, effect: Effect);
    /// Draw the session's image into `dest`.
    fn draw_image(&mut self, dest: Rect);
    /// Stroke the outline of `rect`. `gray` is a grayscale level, 0.0 black
    /// to 1.0 white.
    fn stroke_rect(&mut self, rect: Rect, width: f64, gray: f64);
}

/// Default suppression effect: fully desaturate the background pass.
pub fn default_suppress<C: RenderContext>(ctx: &mut C, _target: Rect, _image_size: (u32, u32)) {
    ctx.apply_effect(Effect::Grayscale(1.0));
}

/// Orchestrates the highlight draw sequence.
#[derive(Debug, Clone)]
pub struct HighlightCompositor {
    outset_ratio: f64,
    outline_min_height: f64,
    outline_outer_width: f64,
    outline_inner_width: f64,
}

impl HighlightCompositor {
    pub fn new(settings: &HighlightSettings) -> Self {
        Self {
            outset_ratio: settings.highlight.outset_ratio,
            outline_min_height: settings.highlight.outline_min_height,
            outline_outer_width: settings.highlight.outline_outer_width,
            outline_inner_width: settings.highlight.outline_inner_width,
        }
    }

    /// The clip window for a matched region: its rect expanded on all sides
    /// by a margin proportional to its height, so windows grow with text
    /// size.
    pub fn outset_rect(&self, region: &TextRegion) -> Rect {
        region.rect.outset(region.rect.height * self.outset_ratio)
    }

    /// Draw one frame.
    ///
    /// `matched` is the set of regions to reveal. Pass `filter_active =
    /// false` to draw the plain image: either the filter is empty or no
    /// recognition result is available for this frame.
    pub fn render<C, F>(
        &self,
        ctx: &mut C,
        image_size: (u32, u32),
        dest_size: (f64, f64),
        matched: &[TextRegion],
        filter_active: bool,
        suppress: F,
    ) where
        C: RenderContext,
        F: Fn(&mut C, Rect, (u32, u32)),
    {
        let transform = RenderTransform::compute(image_size, dest_size);
        ctx.translate(transform.offset_x, transform.offset_y);
        ctx.scale(transform.scale);

        let target = Rect::from_size(image_size.0 as f64, image_size.1 as f64);

        if !filter_active {
            ctx.draw_image(target);
            return;
        }

        // Background pass: the whole image, suppressed.
        ctx.save();
        ctx.clip_rect(target);
        suppress(ctx, target, image_size);
        ctx.draw_image(target);
        ctx.restore();

        trace!("compositing {} matched regions", matched.len());

        for region in matched {
            let window = self.outset_rect(region);

            // Window pass: reveal this region from the unsuppressed image.
            ctx.save();
            ctx.clip_rect(window);
            ctx.draw_image(target);
            ctx.restore();

            // Outline only regions that are large enough on screen; a wide
            // light stroke under a thin dark one stays visible against both
            // light and dark content.
            if window.height * transform.scale > self.outline_min_height {
                ctx.stroke_rect(window, self.outline_outer_width, 1.0);
                ctx.stroke_rect(window, self.outline_inner_width, 0.0);
            }
        }
    }
}
