//! Geometry for region highlighting
//!
//! Converts the recognizer's normalized, bottom-left-origin bounding boxes
//! into top-left-origin image pixel space, and computes the aspect-fit
//! transform that maps source image space onto a destination canvas.

/// Axis-aligned rectangle in image pixel space (top-left origin, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `width` x `height`.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Expand symmetrically by `margin` on all four sides.
    pub fn outset(&self, margin: f64) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// Inverse of [`NormalizedBox::to_pixel_rect`].
    pub fn to_normalized(&self, image_size: (u32, u32)) -> NormalizedBox {
        let (w, h) = (image_size.0 as f64, image_size.1 as f64);
        NormalizedBox {
            min_x: self.x / w,
            min_y: 1.0 - (self.y + self.height) / h,
            width: self.width / w,
            height: self.height / h,
        }
    }
}

/// Normalized bounding box as reported by the recognizer: all components in
/// `[0, 1]`, origin bottom-left, y increasing upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Convert to image pixel space.
    ///
    /// The vertical flip is mandatory: the recognizer's y axis points up
    /// while image pixel coordinates point down. Omitting it mirrors every
    /// highlight placement.
    pub fn to_pixel_rect(&self, image_size: (u32, u32)) -> Rect {
        let (w, h) = (image_size.0 as f64, image_size.1 as f64);
        Rect {
            x: self.min_x * w,
            y: h - (self.min_y * h) - (self.height * h),
            width: self.width * w,
            height: self.height * h,
        }
    }
}

/// Aspect-fit mapping from source image space to a destination canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation centering the scaled image.
    pub offset_x: f64,
    /// Vertical translation centering the scaled image.
    pub offset_y: f64,
}

impl RenderTransform {
    /// Compute the transform for the current destination size.
    ///
    /// This is recomputed on every draw; the destination may change between
    /// frames, so the result must never be cached keyed on source size alone.
    pub fn compute(source_size: (u32, u32), dest_size: (f64, f64)) -> Self {
        let (src_w, src_h) = (source_size.0 as f64, source_size.1 as f64);
        let (dst_w, dst_h) = dest_size;

        if src_w <= 0.0 || src_h <= 0.0 {
            // A degenerate source has nothing to fit; fall back to identity.
            return Self {
                scale: 1.0,
                offset_x: 0.0,
                offset_y: 0.0,
            };
        }

        let scale = (dst_w / src_w).min(dst_h / src_h);
        Self {
            scale,
            offset_x: (dst_w - src_w * scale) / 2.0,
            offset_y: (dst_h - src_h * scale) / 2.0,
        }
    }
}
