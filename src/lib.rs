mod engine;
mod interface;

pub mod errors;
pub mod storage;

pub use engine::{classifier, config, scanner, stats, uploader, utils};
pub use interface::cli;
