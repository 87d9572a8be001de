use clap::Parser;

use log::{error, info};

use clicklabel::{run_split, DataDirs, SplitArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SplitArgs::parse();

    let dirs = DataDirs::new(&args.data_dir);
    if !dirs.labeled.exists() {
        error!(
            "The labeled folder does not exist: {}",
            dirs.labeled.display()
        );
        return;
    }

    info!("Splitting labeled dataset into train and test folders...");
    match run_split(&dirs, args.test_size, args.seed) {
        Ok(()) => info!("Split complete."),
        Err(e) => error!("Failed to split dataset: {}", e),
    }
}
