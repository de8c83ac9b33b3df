//! Parsers for the channel listing page
//!
//! Contains modules for locating the embedded data blob and walking its
//! video grid.

pub mod initial_data;
pub mod videos;

pub use initial_data::{extract_channel_name, extract_initial_data};
pub use videos::{Extraction, extract_channel_videos};
