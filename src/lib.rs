//! Fetches a DJ set tracklist page and turns it into FFMETADATA chapter markers.

pub mod command_handlers;
pub mod download;
pub mod metadata;
pub mod models;
pub mod tracklist;
pub mod utils;
