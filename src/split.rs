use log::{error, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::{list_annotations, list_images};
use crate::types::DataDirs;
use crate::utils::{create_output_directory, create_progress_bar};

/// The train/test partition of (image, annotation) pairs.
pub struct SplitData {
    pub train_pairs: Vec<(PathBuf, PathBuf)>,
    pub test_pairs: Vec<(PathBuf, PathBuf)>,
}

/// Split sorted image and annotation lists into train and test sets.
///
/// Pairing is positional: the Nth sorted image is assumed to belong to the
/// Nth sorted annotation file. No integrity check is performed; a count
/// mismatch silently drops the unpaired tail.
pub fn split_pairs<R: Rng + ?Sized>(
    images: Vec<PathBuf>,
    annotations: Vec<PathBuf>,
    test_size: f32,
    rng: &mut R,
) -> SplitData {
    let mut pairs: Vec<(PathBuf, PathBuf)> = images.into_iter().zip(annotations).collect();
    pairs.shuffle(rng);

    let test_count = (pairs.len() as f32 * test_size).ceil() as usize;
    let test_pairs = pairs.drain(0..test_count).collect();

    SplitData {
        train_pairs: pairs,
        test_pairs,
    }
}

/// Copy each pair into the destination folder, preserving filenames.
fn copy_pairs(pairs: &[(PathBuf, PathBuf)], dest: &Path, label: &str) {
    let pb = create_progress_bar(pairs.len() as u64, label);
    pairs.par_iter().for_each(|(img, annotation)| {
        for file in [img, annotation] {
            let dest_file = dest.join(file.file_name().expect("File without a name"));
            if let Err(e) = fs::copy(file, &dest_file) {
                error!("Failed to copy {}: {}", file.display(), e);
            }
        }
        pb.inc(1);
    });
    pb.finish_with_message(format!("{} copy complete", label));
}

/// Partition the labeled folder into freshly recreated train and test folders.
pub fn run_split(dirs: &DataDirs, test_size: f32, seed: Option<u64>) -> io::Result<()> {
    let images = list_images(&dirs.labeled);
    let annotations = list_annotations(&dirs.labeled);
    info!(
        "Found {} labeled images and {} annotation files.",
        images.len(),
        annotations.len()
    );

    // Reset the train and test folders to have no data
    create_output_directory(&dirs.train)?;
    create_output_directory(&dirs.test)?;

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let split_data = split_pairs(images, annotations, test_size, &mut rng);

    info!(
        "Splitting into {} train and {} test pairs.",
        split_data.train_pairs.len(),
        split_data.test_pairs.len()
    );
    copy_pairs(&split_data.train_pairs, &dirs.train, "Train");
    copy_pairs(&split_data.test_pairs, &dirs.test, "Test");

    Ok(())
}
