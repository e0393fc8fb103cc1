//! Raster canvas and frame rendering.

use image::RgbaImage;

use crate::error::FrameError;
use crate::frame::{Color, FrameSpec};
use crate::layout::{
    slot_rects, Rect, CANVAS_HEIGHT, CANVAS_RECT, CANVAS_WIDTH, INNER_RECT, MARKER_DIAMETER,
    SLOT_OUTLINE_WIDTH,
};

/// An RGBA raster the frame is drawn into.
///
/// Drawing operations overwrite pixels; they never blend with what is
/// already there. Everything is clipped to the canvas bounds.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a fully transparent canvas of the fixed frame size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Allocate a fully transparent canvas of arbitrary size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, Color::TRANSPARENT.into()) }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying image buffer.
    #[must_use]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fill `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let right = rect.right().min(self.width());
        let bottom = rect.bottom().min(self.height());
        let px: image::Rgba<u8> = color.into();
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Draw an outline of `stroke` pixels along the inside edge of `rect`.
    pub fn outline_rect(&mut self, rect: Rect, color: Color, stroke: u32) {
        let sx = stroke.min(rect.width);
        let sy = stroke.min(rect.height);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, sy), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - sy, rect.width, sy), color);
        self.fill_rect(Rect::new(rect.x, rect.y, sx, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - sx, rect.y, sx, rect.height), color);
    }

    /// Fill a disk of `diameter` pixels centred on the pixel corner `center`.
    ///
    /// A pixel is covered when its centre lies inside the circle, so an even
    /// diameter spans exactly `diameter` columns and rows.
    pub fn fill_circle(&mut self, center: (u32, u32), diameter: u32, color: Color) {
        let (cx, cy) = center;
        let radius = diameter.div_ceil(2);
        let d2 = i64::from(diameter) * i64::from(diameter);
        let px: image::Rgba<u8> = color.into();

        let x_end = (cx + radius).min(self.width());
        let y_end = (cy + radius).min(self.height());
        for y in cy.saturating_sub(radius)..y_end {
            let dy = 2 * i64::from(y) + 1 - 2 * i64::from(cy);
            for x in cx.saturating_sub(radius)..x_end {
                let dx = 2 * i64::from(x) + 1 - 2 * i64::from(cx);
                if dx * dx + dy * dy <= d2 {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Canvas {
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color(p.0))
    }
}

/// Render `spec` into a fresh canvas.
///
/// # Errors
///
/// Returns [`FrameError::InvalidFrame`] if the frame cannot produce
/// non-degenerate slots.
pub fn render_frame(spec: &FrameSpec) -> Result<Canvas, FrameError> {
    spec.validate()?;

    let mut canvas = Canvas::new();
    canvas.fill_rect(CANVAS_RECT, spec.border_color);
    canvas.fill_rect(INNER_RECT, spec.frame_color);

    for slot in slot_rects(spec.cut_count) {
        log::debug!(
            "{}: slot at ({}, {}) {}x{}",
            spec.internal_name,
            slot.x,
            slot.y,
            slot.width,
            slot.height
        );
        canvas.fill_rect(slot, Color::SLOT_FILL);
        canvas.outline_rect(slot, Color::SLOT_ACCENT, SLOT_OUTLINE_WIDTH);
        canvas.fill_circle(slot.center(), MARKER_DIAMETER, Color::SLOT_ACCENT);
    }

    Ok(canvas)
}
