mod ffmetadata;
pub use ffmetadata::*;
