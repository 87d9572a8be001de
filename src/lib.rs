//! Point-click bounding box annotation tool
//!
//! This library provides the two halves of a small image-labeling workflow:
//! an interactive annotator that turns mouse clicks into fixed-margin
//! bounding boxes, and a splitter that partitions the labeled pool into
//! train and test folders.

pub mod config;
pub mod io;
pub mod relabel;
pub mod session;
pub mod split;
pub mod types;
pub mod ui;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{AnnotateArgs, SplitArgs};
pub use io::{list_annotations, list_images, next_image_id, write_boxes};
pub use relabel::relabel;
pub use session::AnnotationSession;
pub use split::{run_split, split_pairs, SplitData};
pub use types::{BBox, DataDirs};
