//! Named image operations, parsed from CLI tokens or pipeline YAML.

use std::path::PathBuf;
use std::str::FromStr;

use raster_ops::{DitherMethod, FilterKind, PixelBuffer, RasterError, Stroke};
use serde::Deserialize;

use crate::codec;
use crate::error::PipelineError;

/// One step of a pipeline.
///
/// In YAML each step is a map tagged by `op`:
///
/// ```yaml
/// - op: dither-rand
///   seed: 7
/// - op: stroke
///   radius: 3
///   x: 10
///   y: 12
///   color: [255, 0, 0, 255]
/// ```
///
/// On the command line the same step is a single token, `name` or
/// `name=arg,arg,...` (see [`OPERATIONS`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    Gray,
    QuantUnif,
    QuantPop,
    DitherThresh,
    DitherRand {
        #[serde(default)]
        seed: Option<u64>,
    },
    DitherFs,
    DitherBright,
    DitherCluster,
    DitherColor,
    FilterBox,
    FilterBartlett,
    FilterGaussian,
    FilterGaussianN {
        size: u32,
    },
    FilterEdge,
    FilterEnhance,
    NprPaint,
    Half,
    Double,
    Resize {
        factor: f32,
    },
    Rotate {
        angle: f32,
    },
    CompOver {
        with: PathBuf,
    },
    CompIn {
        with: PathBuf,
    },
    CompOut {
        with: PathBuf,
    },
    CompAtop {
        with: PathBuf,
    },
    CompXor {
        with: PathBuf,
    },
    Diff {
        with: PathBuf,
    },
    Stroke {
        radius: u32,
        x: u32,
        y: u32,
        color: [u8; 4],
    },
}

/// Usage line for one operation, as listed by `rasterkit ops`.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub name: &'static str,
    pub args: &'static str,
    pub about: &'static str,
}

const fn info(name: &'static str, args: &'static str, about: &'static str) -> OperationInfo {
    OperationInfo { name, args, about }
}

/// Every operation name with its arguments.
pub const OPERATIONS: &[OperationInfo] = &[
    info("gray", "", "convert to BT.601 grayscale"),
    info("quant-unif", "", "uniform 3-3-2 bit quantization"),
    info("quant-pop", "", "populosity quantization to 256 colors"),
    info("dither-thresh", "", "threshold at mid gray"),
    info("dither-rand", "[SEED]", "threshold after random noise"),
    info("dither-fs", "", "Floyd-Steinberg to black and white"),
    info("dither-bright", "", "brightness-preserving threshold"),
    info("dither-cluster", "", "4x4 clustered-dot ordered dither"),
    info("dither-color", "", "Floyd-Steinberg to an 8-8-4 color cube"),
    info("filter-box", "", "5x5 box blur"),
    info("filter-bartlett", "", "5x5 Bartlett blur"),
    info("filter-gaussian", "", "5x5 Gaussian blur"),
    info("filter-gaussian-n", "SIZE", "N x N Gaussian blur (reserved)"),
    info("filter-edge", "", "edge detection (reserved)"),
    info("filter-enhance", "", "edge enhancement (reserved)"),
    info("npr-paint", "", "painterly rendering (reserved)"),
    info("half", "", "halve width and height"),
    info("double", "", "double width and height"),
    info("resize", "FACTOR", "scale by a factor (reserved)"),
    info("rotate", "DEGREES", "rotate in place (reserved)"),
    info("comp-over", "IMAGE", "composite over IMAGE (reserved)"),
    info("comp-in", "IMAGE", "composite in IMAGE (reserved)"),
    info("comp-out", "IMAGE", "composite out IMAGE (reserved)"),
    info("comp-atop", "IMAGE", "composite atop IMAGE (reserved)"),
    info("comp-xor", "IMAGE", "composite xor IMAGE (reserved)"),
    info("diff", "IMAGE", "absolute difference with IMAGE"),
    info("stroke", "RADIUS,X,Y,R,G,B[,A]", "stamp a filled disc"),
];

impl Operation {
    /// The kebab-case name used on the command line and in YAML.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Gray => "gray",
            Operation::QuantUnif => "quant-unif",
            Operation::QuantPop => "quant-pop",
            Operation::DitherThresh => "dither-thresh",
            Operation::DitherRand { .. } => "dither-rand",
            Operation::DitherFs => "dither-fs",
            Operation::DitherBright => "dither-bright",
            Operation::DitherCluster => "dither-cluster",
            Operation::DitherColor => "dither-color",
            Operation::FilterBox => "filter-box",
            Operation::FilterBartlett => "filter-bartlett",
            Operation::FilterGaussian => "filter-gaussian",
            Operation::FilterGaussianN { .. } => "filter-gaussian-n",
            Operation::FilterEdge => "filter-edge",
            Operation::FilterEnhance => "filter-enhance",
            Operation::NprPaint => "npr-paint",
            Operation::Half => "half",
            Operation::Double => "double",
            Operation::Resize { .. } => "resize",
            Operation::Rotate { .. } => "rotate",
            Operation::CompOver { .. } => "comp-over",
            Operation::CompIn { .. } => "comp-in",
            Operation::CompOut { .. } => "comp-out",
            Operation::CompAtop { .. } => "comp-atop",
            Operation::CompXor { .. } => "comp-xor",
            Operation::Diff { .. } => "diff",
            Operation::Stroke { .. } => "stroke",
        }
    }

    /// Path of the second image for two-buffer operations.
    pub fn second_image(&self) -> Option<&PathBuf> {
        match self {
            Operation::CompOver { with }
            | Operation::CompIn { with }
            | Operation::CompOut { with }
            | Operation::CompAtop { with }
            | Operation::CompXor { with }
            | Operation::Diff { with } => Some(with),
            _ => None,
        }
    }

    pub(crate) fn second_image_mut(&mut self) -> Option<&mut PathBuf> {
        match self {
            Operation::CompOver { with }
            | Operation::CompIn { with }
            | Operation::CompOut { with }
            | Operation::CompAtop { with }
            | Operation::CompXor { with }
            | Operation::Diff { with } => Some(with),
            _ => None,
        }
    }

    /// Apply this operation to `image` as step `index` of a pipeline.
    ///
    /// Two-buffer operations load their second image first; a failing
    /// transform is reported as [`PipelineError::Step`].
    pub fn apply(&self, index: usize, image: &mut PixelBuffer) -> Result<(), PipelineError> {
        let step = |source: RasterError| PipelineError::Step {
            index,
            op: self.name(),
            source,
        };
        match self {
            Operation::Gray => image.to_grayscale(),
            Operation::QuantUnif => image.quantize_uniform(),
            Operation::QuantPop => image.quantize_populosity(),
            Operation::DitherThresh => image.dither(DitherMethod::Threshold),
            Operation::DitherRand { seed } => image.dither(DitherMethod::Random { seed: *seed }),
            Operation::DitherFs => image.dither(DitherMethod::FloydSteinberg),
            Operation::DitherBright => image.dither(DitherMethod::BrightnessPreserving),
            Operation::DitherCluster => image.dither(DitherMethod::Ordered),
            Operation::DitherColor => image.dither(DitherMethod::ColorFloydSteinberg),
            Operation::FilterBox => image.filter(FilterKind::Box),
            Operation::FilterBartlett => image.filter(FilterKind::Bartlett),
            Operation::FilterGaussian => image.filter(FilterKind::Gaussian),
            Operation::FilterGaussianN { size } => image.filter_gaussian_n(*size).map_err(step)?,
            Operation::FilterEdge => image.filter_edge().map_err(step)?,
            Operation::FilterEnhance => image.filter_enhance().map_err(step)?,
            Operation::NprPaint => image.paint_painterly().map_err(step)?,
            Operation::Half => image.half_size(),
            Operation::Double => image.double_size(),
            Operation::Resize { factor } => image.resize(*factor).map_err(step)?,
            Operation::Rotate { angle } => image.rotate(*angle).map_err(step)?,
            Operation::CompOver { with } => {
                image.composite_over(&codec::load(with)?).map_err(step)?
            }
            Operation::CompIn { with } => image.composite_in(&codec::load(with)?).map_err(step)?,
            Operation::CompOut { with } => image.composite_out(&codec::load(with)?).map_err(step)?,
            Operation::CompAtop { with } => {
                image.composite_atop(&codec::load(with)?).map_err(step)?
            }
            Operation::CompXor { with } => image.composite_xor(&codec::load(with)?).map_err(step)?,
            Operation::Diff { with } => image.difference(&codec::load(with)?).map_err(step)?,
            Operation::Stroke {
                radius,
                x,
                y,
                color,
            } => image.paint_stroke(&Stroke::new(*radius, *x, *y, *color)),
        }
        Ok(())
    }
}

/// Comma-separated arguments of one CLI token.
struct Args<'a> {
    op: &'a str,
    raw: Option<&'a str>,
    values: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn new(op: &'a str, raw: Option<&'a str>) -> Self {
        let values = match raw {
            Some(raw) if !raw.trim().is_empty() => raw.split(',').map(str::trim).collect(),
            _ => Vec::new(),
        };
        Self { op, raw, values }
    }

    fn count(&self, min: usize, max: usize) -> Result<(), PipelineError> {
        let n = self.values.len();
        if n < min || n > max {
            let expected = if min == max {
                format!("{}", min)
            } else {
                format!("{} to {}", min, max)
            };
            return Err(PipelineError::invalid(
                self.op,
                format!("expected {} argument(s), got {}", expected, n),
            ));
        }
        Ok(())
    }

    fn get<T: FromStr>(&self, i: usize) -> Result<T, PipelineError> {
        let value = self.values[i];
        value
            .parse()
            .map_err(|_| PipelineError::invalid(self.op, format!("cannot parse {:?}", value)))
    }

    /// The whole argument as one path; commas are kept.
    fn path(&self) -> Result<PathBuf, PipelineError> {
        match self.raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Ok(PathBuf::from(raw)),
            _ => Err(PipelineError::invalid(self.op, "expected an image path")),
        }
    }
}

impl FromStr for Operation {
    type Err = PipelineError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, raw) = match token.split_once('=') {
            Some((name, raw)) => (name.trim(), Some(raw)),
            None => (token.trim(), None),
        };
        let args = Args::new(name, raw);
        let unit = |op: Operation| args.count(0, 0).map(|_| op);

        match name {
            "gray" => unit(Operation::Gray),
            "quant-unif" => unit(Operation::QuantUnif),
            "quant-pop" => unit(Operation::QuantPop),
            "dither-thresh" => unit(Operation::DitherThresh),
            "dither-rand" => {
                args.count(0, 1)?;
                let seed = if args.values.is_empty() {
                    None
                } else {
                    Some(args.get(0)?)
                };
                Ok(Operation::DitherRand { seed })
            }
            "dither-fs" => unit(Operation::DitherFs),
            "dither-bright" => unit(Operation::DitherBright),
            "dither-cluster" => unit(Operation::DitherCluster),
            "dither-color" => unit(Operation::DitherColor),
            "filter-box" => unit(Operation::FilterBox),
            "filter-bartlett" => unit(Operation::FilterBartlett),
            "filter-gaussian" => unit(Operation::FilterGaussian),
            "filter-gaussian-n" => {
                args.count(1, 1)?;
                Ok(Operation::FilterGaussianN { size: args.get(0)? })
            }
            "filter-edge" => unit(Operation::FilterEdge),
            "filter-enhance" => unit(Operation::FilterEnhance),
            "npr-paint" => unit(Operation::NprPaint),
            "half" => unit(Operation::Half),
            "double" => unit(Operation::Double),
            "resize" => {
                args.count(1, 1)?;
                Ok(Operation::Resize { factor: args.get(0)? })
            }
            "rotate" => {
                args.count(1, 1)?;
                Ok(Operation::Rotate { angle: args.get(0)? })
            }
            "comp-over" => Ok(Operation::CompOver { with: args.path()? }),
            "comp-in" => Ok(Operation::CompIn { with: args.path()? }),
            "comp-out" => Ok(Operation::CompOut { with: args.path()? }),
            "comp-atop" => Ok(Operation::CompAtop { with: args.path()? }),
            "comp-xor" => Ok(Operation::CompXor { with: args.path()? }),
            "diff" => Ok(Operation::Diff { with: args.path()? }),
            "stroke" => {
                args.count(6, 7)?;
                let alpha = if args.values.len() == 7 { args.get(6)? } else { 255 };
                Ok(Operation::Stroke {
                    radius: args.get(0)?,
                    x: args.get(1)?,
                    y: args.get(2)?,
                    color: [args.get(3)?, args.get(4)?, args.get(5)?, alpha],
                })
            }
            _ => Err(PipelineError::UnknownOperation(name.to_string())),
        }
    }
}
