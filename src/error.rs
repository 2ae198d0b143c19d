use std::path::PathBuf;

use raster_ops::RasterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TGA error: {0}")]
    Tga(#[from] image::ImageError),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid raster: {0}")]
    Raster(#[from] RasterError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid argument for {op}: {reason}")]
    InvalidArgument { op: String, reason: String },

    #[error("Pipeline has no {0} image")]
    MissingPath(&'static str),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Step {index} ({op}) failed: {source}")]
    Step {
        index: usize,
        op: &'static str,
        #[source]
        source: RasterError,
    },
}

impl PipelineError {
    pub(crate) fn invalid(op: &str, reason: impl Into<String>) -> Self {
        PipelineError::InvalidArgument {
            op: op.to_string(),
            reason: reason.into(),
        }
    }
}
