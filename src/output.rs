//! Output paths, PNG persistence, and the slot manifest.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::Serialize;

use crate::error::FrameError;
use crate::frame::FrameSpec;
use crate::layout::{slot_rects, Rect, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::render::Canvas;

/// Directory frames are written to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/frames";

/// File name of the slot manifest inside the output directory.
pub const MANIFEST_FILE: &str = "frames.json";

/// Path of the PNG file for `spec` inside `dir`.
#[must_use]
pub fn frame_path(dir: &Path, spec: &FrameSpec) -> PathBuf {
    dir.join(format!("{}.png", spec.internal_name))
}

/// Encode `canvas` as PNG and write it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`FrameError::Io`] if the file cannot be created or flushed, and
/// [`FrameError::Encode`] if PNG encoding fails.
pub fn persist(canvas: &Canvas, path: &Path) -> Result<(), FrameError> {
    let mut writer = BufWriter::new(File::create(path)?);
    canvas.as_image().write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;
    Ok(())
}

/// Description of one generated frame for consumers that composite photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Filename stem.
    pub internal_name: String,
    /// Descriptive name.
    pub display_name: String,
    /// Number of photo slots.
    pub cut_count: u32,
    /// File name of the PNG, relative to the manifest.
    pub file: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Photo slot rectangles, top to bottom.
    pub slots: Vec<Rect>,
}

impl ManifestEntry {
    /// Build the manifest entry for a frame.
    #[must_use]
    pub fn for_frame(spec: &FrameSpec) -> Self {
        Self {
            internal_name: spec.internal_name.clone(),
            display_name: spec.display_name.clone(),
            cut_count: spec.cut_count,
            file: format!("{}.png", spec.internal_name),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            slots: slot_rects(spec.cut_count),
        }
    }
}

/// Write the manifest for `frames` into `dir` and return its path.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_manifest(dir: &Path, frames: &[FrameSpec]) -> Result<PathBuf, FrameError> {
    let entries: Vec<ManifestEntry> = frames.iter().map(ManifestEntry::for_frame).collect();
    let json = serde_json::to_string_pretty(&entries)?;
    let path = dir.join(MANIFEST_FILE);
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::builtin_frames;
    use crate::render::render_frame;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn frame_path_uses_internal_name() {
        let spec = &builtin_frames()[2];
        let path = frame_path(Path::new(DEFAULT_OUTPUT_DIR), spec);
        assert_eq!(path, PathBuf::from("assets/frames/vintage_4cut.png"));
    }

    #[test]
    fn persist_round_trip() {
        let dir = temp_dir("framegen_output_round_trip");
        let spec = &builtin_frames()[0];
        let canvas = render_frame(spec).unwrap();
        let path = frame_path(&dir, spec);

        persist(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (400, 600));
        assert_eq!(decoded.get_pixel(0, 0).0, spec.border_color.0);
        assert_eq!(decoded.get_pixel(25, 300).0, spec.frame_color.0);
        assert_eq!(&decoded, canvas.as_image());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn persist_overwrites_existing_file() {
        let dir = temp_dir("framegen_output_overwrite");
        let path = dir.join("frame.png");
        std::fs::write(&path, b"not a png").unwrap();

        persist(&render_frame(&builtin_frames()[1]).unwrap(), &path).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn persist_into_missing_directory_fails() {
        let canvas = Canvas::new();
        let path = Path::new("/nonexistent/framegen/dir/frame.png");
        assert!(matches!(persist(&canvas, path), Err(FrameError::Io(_))));
    }

    #[test]
    fn manifest_describes_slots() {
        let dir = temp_dir("framegen_output_manifest");
        let frames = builtin_frames();

        let path = write_manifest(&dir, &frames).unwrap();
        assert_eq!(path, dir.join(MANIFEST_FILE));

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1]["internal_name"], "romantic_6cut");
        assert_eq!(entries[1]["file"], "romantic_6cut.png");
        assert_eq!(entries[1]["slots"].as_array().unwrap().len(), 6);
        assert_eq!(entries[0]["slots"][1]["y"], 168);
        assert_eq!(entries[0]["slots"][1]["height"], 123);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
