mod downloader;
pub use downloader::*;
mod utils;
pub use utils::*;
