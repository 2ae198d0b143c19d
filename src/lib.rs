//! Rasterkit - pixel-buffer processing from the command line.
//!
//! Wraps the `raster-ops` transforms with file codecs and a step pipeline.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod pipeline;
