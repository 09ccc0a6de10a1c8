mod chapters;
pub use chapters::*;
mod extractor;
pub use extractor::*;
pub mod selectors;
mod timecode;
pub use timecode::*;
