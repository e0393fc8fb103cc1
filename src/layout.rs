//! Fixed frame geometry and photo-slot placement.
//!
//! All rectangles are half-open: a rectangle at `(x, y)` with size
//! `width × height` covers columns `x..x + width` and rows `y..y + height`.

use serde::Serialize;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;
/// Width of the outer border band.
pub const BORDER_WIDTH: u32 = 20;
/// Distance from the canvas edge to the photo slots.
pub const SLOT_MARGIN: u32 = 30;
/// Vertical gap between adjacent slots.
pub const SLOT_SPACING: u32 = 15;
/// Stroke width of the slot outline.
pub const SLOT_OUTLINE_WIDTH: u32 = 2;
/// Diameter of the placeholder marker drawn in each slot.
pub const MARKER_DIAMETER: u32 = 20;

/// Width shared by every slot.
pub const SLOT_WIDTH: u32 = CANVAS_WIDTH - 2 * SLOT_MARGIN;

/// An axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// One past the right-most column.
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom row.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Pixel centre of the rectangle, rounded down.
    #[must_use]
    pub const fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

#[cfg(test)]
impl Rect {
    pub(crate) const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub(crate) const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The whole canvas.
pub const CANVAS_RECT: Rect = Rect::new(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT);

/// The region inside the border band, filled with the frame color.
pub const INNER_RECT: Rect = Rect::new(
    BORDER_WIDTH,
    BORDER_WIDTH,
    CANVAS_WIDTH - 2 * BORDER_WIDTH,
    CANVAS_HEIGHT - 2 * BORDER_WIDTH,
);

/// Height of each slot when `cut_count` slots are stacked, or `None` if
/// the slots do not fit with a positive height.
#[must_use]
pub fn slot_height(cut_count: u32) -> Option<u32> {
    if cut_count == 0 {
        return None;
    }
    let gaps = (cut_count - 1).checked_mul(SLOT_SPACING)?;
    let available = (CANVAS_HEIGHT - 2 * SLOT_MARGIN).checked_sub(gaps)?;
    Some(available / cut_count).filter(|&h| h > 0)
}

/// Rectangles of the `cut_count` photo slots, top to bottom.
///
/// Returns an empty list when [`slot_height`] rejects the count.
#[must_use]
pub fn slot_rects(cut_count: u32) -> Vec<Rect> {
    let Some(height) = slot_height(cut_count) else {
        return Vec::new();
    };
    (0..cut_count)
        .map(|i| Rect::new(SLOT_MARGIN, SLOT_MARGIN + i * (height + SLOT_SPACING), SLOT_WIDTH, height))
        .collect()
}
