use clap::Parser;

use log::{error, info};
use std::io;

use clicklabel::io::list_images;
use clicklabel::ui::run_annotation_batch;
use clicklabel::{relabel, AnnotateArgs, DataDirs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = AnnotateArgs::parse();

    let dirs = DataDirs::new(&args.data_dir);

    // If the relabel flag is set, move all images back to the unlabeled folder
    if args.relabel {
        match relabel(&dirs, io::stdin().lock()) {
            Ok(true) => info!("Relabel reset complete."),
            Ok(false) => info!("Relabel reset declined."),
            Err(e) => {
                error!("Relabel reset failed: {}", e);
                return;
            }
        }
    }

    let img_files = list_images(&dirs.unlabeled);
    if img_files.is_empty() {
        info!(
            "No unlabeled images found in {}.",
            dirs.unlabeled.display()
        );
        return;
    }

    info!("Found {} unlabeled images.", img_files.len());
    if let Err(e) = run_annotation_batch(&dirs, img_files) {
        error!("Annotation session failed: {}", e);
    }
}
