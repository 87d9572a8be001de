use clap::Parser;
use std::str::FromStr;

/// Command-line arguments for the interactive annotator.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct AnnotateArgs {
    /// Root directory holding the unlabeled/labeled image folders
    #[arg(short = 'd', long = "data_dir", default_value = "imgs")]
    pub data_dir: String,

    /// Flag used to relabel images already in the labeled folder
    #[arg(long = "relabel", default_value_t = false)]
    pub relabel: bool,
}

/// Command-line arguments for the train/test splitter.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct SplitArgs {
    /// Root directory holding the labeled image folder
    #[arg(short = 'd', long = "data_dir", default_value = "imgs")]
    pub data_dir: String,

    /// Proportion of the dataset to use for testing
    #[arg(long = "test_size", default_value_t = 0.25, value_parser = validate_size)]
    pub test_size: f32,

    /// Seed for random shuffling; omitted means a fresh split every run
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

// Validate that the size is between 0.0 and 1.0
pub fn validate_size(s: &str) -> Result<f32, String> {
    match f32::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SIZE must be between 0.0 and 1.0".to_string()),
    }
}
