use glob::glob;
use ndarray::Array2;
use ndarray_npy::write_npy;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{BBox, IMG_FORMATS};

/// List all image files in a directory, lexicographically sorted.
pub fn list_images(dir: &Path) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = IMG_FORMATS
        .iter()
        .flat_map(|ext| {
            let pattern = format!("{}/*.{}", dir.display(), ext);
            glob(&pattern)
                .expect("Failed to read image glob pattern")
                .filter_map(|entry| entry.ok())
                .collect::<Vec<_>>()
        })
        .collect();
    images.sort();
    images
}

/// List all `.npy` annotation files in a directory, lexicographically sorted.
pub fn list_annotations(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/*.npy", dir.display());
    let mut annotations: Vec<PathBuf> = glob(&pattern)
        .expect("Failed to read annotation glob pattern")
        .filter_map(|entry| entry.ok())
        .collect();
    annotations.sort();
    annotations
}

/// Next sequential image ID, from a fresh count of the labeled folder.
///
/// Assumes single-process, sequential annotation; concurrent sessions would
/// race on the same ID.
pub fn next_image_id(labeled_dir: &Path) -> usize {
    list_images(labeled_dir).len() + 1
}

/// Write an annotation set as an Nx4 int64 `.npy` array.
pub fn write_boxes(path: &Path, boxes: &[BBox]) -> io::Result<()> {
    let mut array = Array2::<i64>::zeros((boxes.len(), 4));
    for (i, bbox) in boxes.iter().enumerate() {
        array[[i, 0]] = bbox.x_min;
        array[[i, 1]] = bbox.y_min;
        array[[i, 2]] = bbox.x_max;
        array[[i, 3]] = bbox.y_max;
    }
    write_npy(path, &array).map_err(|e| io::Error::other(e.to_string()))
}
