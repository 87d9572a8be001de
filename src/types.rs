use std::path::{Path, PathBuf};

// Supported image formats
pub const IMG_FORMATS: &[&str] = &["jpg", "png"];

// Half-width of the box derived from a single click, in pixels
pub const CLICK_MARGIN: i64 = 15;

/// An axis-aligned bounding box in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

impl BBox {
    /// Convert a click point into a bounding box with the point as center.
    ///
    /// Coordinates are truncated to integers before the fixed margin is
    /// expanded, then clamped to `[0, width] x [0, height]`.
    pub fn from_point(x: f64, y: f64, width: u32, height: u32) -> Self {
        let px = x as i64;
        let py = y as i64;

        BBox {
            x_min: (px - CLICK_MARGIN).max(0),
            y_min: (py - CLICK_MARGIN).max(0),
            x_max: (px + CLICK_MARGIN).min(width as i64),
            y_max: (py + CLICK_MARGIN).min(height as i64),
        }
    }

    /// Center of the box, used for the point marker when drawing.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) as f64 / 2.0,
            (self.y_min + self.y_max) as f64 / 2.0,
        )
    }
}

/// The folder layout the tools operate on, all under one data root.
#[derive(Debug, Clone)]
pub struct DataDirs {
    pub unlabeled: PathBuf,
    pub labeled: PathBuf,
    pub tmp: PathBuf,
    pub train: PathBuf,
    pub test: PathBuf,
}

impl DataDirs {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        DataDirs {
            unlabeled: root.join("unlabeled"),
            labeled: root.join("labeled"),
            tmp: root.join("tmp"),
            train: root.join("train"),
            test: root.join("test"),
        }
    }
}
