//! Step pipelines: an input image, a list of [`Operation`]s, an output.
//!
//! A pipeline file is YAML:
//!
//! ```yaml
//! input: photo.png
//! output: photo-dithered.tga
//! steps:
//!   - op: quant-pop
//!   - op: filter-gaussian
//!   - op: dither-color
//! ```
//!
//! Relative paths in a pipeline file (input, output and the second image of
//! two-buffer steps) are taken relative to the file's own directory.

mod operation;

pub use operation::{Operation, OperationInfo, OPERATIONS};

use std::path::{Path, PathBuf};

use raster_ops::PixelBuffer;
use serde::Deserialize;

use crate::codec;
use crate::error::PipelineError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub steps: Vec<Operation>,
}

impl Pipeline {
    pub fn new(input: PathBuf, output: PathBuf, steps: Vec<Operation>) -> Self {
        Self {
            input: Some(input),
            output: Some(output),
            steps,
        }
    }

    /// Parse a pipeline from YAML text. Paths are kept as written.
    pub fn from_yaml(yaml: &str) -> Result<Self, PipelineError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a pipeline file, resolving relative paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut pipeline = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            pipeline.rebase(base);
        }
        tracing::info!(
            path = %path.display(),
            steps = pipeline.steps.len(),
            "Loaded pipeline"
        );
        Ok(pipeline)
    }

    fn rebase(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        self.input.iter_mut().for_each(resolve);
        self.output.iter_mut().for_each(resolve);
        self.steps
            .iter_mut()
            .filter_map(Operation::second_image_mut)
            .for_each(resolve);
    }

    /// Apply every step to `image` in order, stopping at the first failure.
    ///
    /// A failing step leaves `image` in whatever state that step left it
    /// (cleared, for the reserved operations).
    pub fn apply(&self, image: &mut PixelBuffer) -> Result<(), PipelineError> {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::info!(step = index, op = step.name(), "Applying");
            step.apply(index, image)?;
        }
        Ok(())
    }

    /// Load the input, apply all steps and save the output.
    ///
    /// Nothing is written when a step fails.
    pub fn run(&self) -> Result<PixelBuffer, PipelineError> {
        let input = self
            .input
            .as_ref()
            .ok_or(PipelineError::MissingPath("input"))?;
        let output = self
            .output
            .as_ref()
            .ok_or(PipelineError::MissingPath("output"))?;

        let mut image = codec::load(input)?;
        self.apply(&mut image)?;
        codec::save(&image, output)?;
        Ok(image)
    }
}
