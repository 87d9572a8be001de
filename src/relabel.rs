use log::info;
use std::fs;
use std::io::{self, BufRead, Write};

use crate::io::list_images;
use crate::types::DataDirs;

/// Discard all annotations and return every image to the unlabeled pool
/// under fresh sequential names.
///
/// Gated by a y/n confirmation read from `input`. Moves labeled then
/// unlabeled images into the tmp folder as `0.png`, `1.png`, ..., deletes
/// the labeled folder with its `.npy` sidecars, recreates it empty, and
/// renames the tmp folder to become the new unlabeled folder.
///
/// Not transactional: a failure partway through leaves images split across
/// folders.
///
/// Returns whether the reset was confirmed and performed.
pub fn relabel<R: BufRead>(dirs: &DataDirs, mut input: R) -> io::Result<bool> {
    println!("Are you sure you want to relabel already labeled images? (y/n)");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if answer.trim().to_lowercase() != "y" {
        return Ok(false);
    }

    let mut all_imgs = list_images(&dirs.labeled);
    all_imgs.extend(list_images(&dirs.unlabeled));

    fs::create_dir(&dirs.tmp)?;
    for (i, img) in all_imgs.iter().enumerate() {
        fs::rename(img, dirs.tmp.join(format!("{}.png", i)))?;
    }

    fs::remove_dir_all(&dirs.labeled)?;
    fs::create_dir(&dirs.labeled)?;

    // The unlabeled folder is empty at this point, so the rename replaces it
    fs::rename(&dirs.tmp, &dirs.unlabeled)?;

    info!(
        "Moved {} images back to the unlabeled folder.",
        all_imgs.len()
    );
    Ok(true)
}
