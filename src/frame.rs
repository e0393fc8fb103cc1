//! Frame specifications and the built-in catalogue.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::layout::slot_height;

/// An RGBA color, serialized as a four-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Fully transparent black, the initial canvas fill.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    /// Slot fill: translucent white.
    pub const SLOT_FILL: Self = Self([255, 255, 255, 100]);
    /// Slot outline and marker: translucent gray.
    pub const SLOT_ACCENT: Self = Self([200, 200, 200, 150]);

    /// Create an opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba(color.0)
    }
}

/// Characters rejected in file stems on at least one supported platform.
const RESERVED_CHARS: [char; 9] = ['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// A single frame design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Filename stem of the generated image.
    pub internal_name: String,
    /// Descriptive name shown to users.
    pub display_name: String,
    /// Number of photo slots.
    pub cut_count: u32,
    /// Background fill inside the border.
    pub frame_color: Color,
    /// Color of the outer border band.
    pub border_color: Color,
}

impl FrameSpec {
    /// Create a frame specification.
    #[must_use]
    pub fn new(
        internal_name: impl Into<String>,
        display_name: impl Into<String>,
        cut_count: u32,
        frame_color: Color,
        border_color: Color,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            display_name: display_name.into(),
            cut_count,
            frame_color,
            border_color,
        }
    }

    /// Check that the frame yields at least one slot of positive height.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidFrame`] if `cut_count` is zero or too
    /// large for the slots to fit, or if the name is not usable as a file stem.
    pub fn validate(&self) -> Result<(), FrameError> {
        let invalid = |reason: String| FrameError::InvalidFrame {
            name: self.internal_name.clone(),
            reason,
        };

        let reserved = |c: char| c.is_control() || RESERVED_CHARS.contains(&c);
        if self.internal_name.is_empty()
            || self.internal_name.starts_with('.')
            || self.internal_name.chars().any(reserved)
        {
            return Err(invalid("internal name must be a plain file stem".to_string()));
        }
        if self.cut_count == 0 {
            return Err(invalid("cut_count must be at least 1".to_string()));
        }
        if slot_height(self.cut_count).is_none() {
            return Err(invalid(format!(
                "{} cuts leave no room for a slot of positive height",
                self.cut_count
            )));
        }
        Ok(())
    }
}

/// The four frames shipped with the photo booth, in generation order.
#[must_use]
pub fn builtin_frames() -> Vec<FrameSpec> {
    vec![
        FrameSpec::new(
            "classic_4cut",
            "Classic",
            4,
            Color::opaque(255, 255, 255),
            Color::opaque(180, 180, 180),
        ),
        FrameSpec::new(
            "romantic_6cut",
            "Romantic",
            6,
            Color::opaque(255, 240, 245),
            Color::opaque(255, 182, 193),
        ),
        FrameSpec::new(
            "vintage_4cut",
            "Vintage",
            4,
            Color::opaque(255, 248, 220),
            Color::opaque(139, 69, 19),
        ),
        FrameSpec::new(
            "modern_6cut",
            "Modern",
            6,
            Color::opaque(245, 245, 245),
            Color::opaque(64, 64, 64),
        ),
    ]
}

/// Validate every frame of a catalogue and reject repeated names.
///
/// # Errors
///
/// Returns [`FrameError::InvalidFrame`] for the first invalid or repeated frame.
pub fn validate_catalogue(frames: &[FrameSpec]) -> Result<(), FrameError> {
    for (i, spec) in frames.iter().enumerate() {
        spec.validate()?;
        if frames[..i].iter().any(|f| f.internal_name == spec.internal_name) {
            return Err(FrameError::InvalidFrame {
                name: spec.internal_name.clone(),
                reason: "internal name is used by more than one frame".to_string(),
            });
        }
    }
    Ok(())
}

/// Restrict `frames` to the entries named in `only`, keeping catalogue order.
///
/// An empty `only` selects everything.
///
/// # Errors
///
/// Returns [`FrameError::InvalidArgument`] if a requested name is not in the catalogue.
pub fn select_frames(
    frames: Vec<FrameSpec>,
    only: &[String],
) -> Result<Vec<FrameSpec>, FrameError> {
    if only.is_empty() {
        return Ok(frames);
    }
    let is_known = |name: &String| frames.iter().any(|f| &f.internal_name == name);
    if let Some(missing) = only.iter().find(|name| !is_known(name)) {
        let known: Vec<&str> = frames.iter().map(|f| f.internal_name.as_str()).collect();
        return Err(FrameError::InvalidArgument(format!(
            "Unknown frame '{missing}'. Known: {known:?}"
        )));
    }
    Ok(frames.into_iter().filter(|f| only.contains(&f.internal_name)).collect())
}
