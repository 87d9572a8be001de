use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::{next_image_id, write_boxes};
use crate::types::{BBox, DataDirs};

/// The annotation state for a single image session.
///
/// Boxes accumulate in click order; undo removes the most recent one. At
/// session end, `finish` either persists the image into the labeled folder
/// or leaves it untouched when nothing was annotated.
pub struct AnnotationSession {
    img_file: PathBuf,
    dirs: DataDirs,
    width: u32,
    height: u32,
    boxes: Vec<BBox>,
}

impl AnnotationSession {
    /// Start a session for an image of the given pixel dimensions.
    ///
    /// Panics if the image does not reside in the unlabeled folder.
    pub fn new(img_file: &Path, dirs: &DataDirs, width: u32, height: u32) -> Self {
        assert!(
            img_file.starts_with(&dirs.unlabeled),
            "Img not in unlabeled folder: {}",
            img_file.display()
        );

        AnnotationSession {
            img_file: img_file.to_path_buf(),
            dirs: dirs.clone(),
            width,
            height,
            boxes: Vec::new(),
        }
    }

    pub fn img_file(&self) -> &Path {
        &self.img_file
    }

    pub fn boxes(&self) -> &[BBox] {
        &self.boxes
    }

    /// Record a click: derive the fixed-margin box and append it.
    pub fn click(&mut self, x: f64, y: f64) -> BBox {
        let bbox = BBox::from_point(x, y, self.width, self.height);
        self.boxes.push(bbox);
        bbox
    }

    /// Remove the most recently added box.
    ///
    /// Panics if there is nothing to undo; callers must not offer undo on an
    /// empty set.
    pub fn undo(&mut self) {
        assert!(!self.boxes.is_empty(), "No bboxes to undo");
        self.boxes.pop();
    }

    /// End the session: persist the image and its sidecar if any boxes were
    /// recorded, otherwise leave the unlabeled file untouched.
    ///
    /// Returns the new image path when the annotation was saved.
    pub fn finish(&mut self) -> io::Result<Option<PathBuf>> {
        if self.boxes.is_empty() {
            info!("No annotation saved for image: {}", self.img_file.display());
            return Ok(None);
        }

        let id = next_image_id(&self.dirs.labeled);
        let new_img_file = self.dirs.labeled.join(format!("{}.png", id));
        let annotation_file = self.dirs.labeled.join(format!("{}.npy", id));

        fs::rename(&self.img_file, &new_img_file)?;
        write_boxes(&annotation_file, &self.boxes)?;

        info!("Annotated image saved to: {}", new_img_file.display());
        Ok(Some(new_img_file))
    }
}
