//! CLI library components for the PFM report reshaper.

pub mod logging;
pub mod pipeline;
pub mod types;
