pub mod classifier;
pub mod config;
pub mod scanner;
pub mod stats;
pub mod uploader;
pub mod utils;
