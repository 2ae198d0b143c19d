use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rasterkit::pipeline::{Operation, Pipeline, OPERATIONS};

#[derive(Parser)]
#[command(name = "rasterkit")]
#[command(about = "Quantize, dither, filter and resample TGA and PNG images")]
struct Cli {
    /// Log per-operation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply operations to an image, in the order given
    Apply {
        /// Input image (.tga or .png)
        #[arg(short, long)]
        input: PathBuf,

        /// Output image (.tga or .png)
        #[arg(short, long)]
        output: PathBuf,

        /// Operations as `name` or `name=arg,arg,...` (see `rasterkit ops`)
        #[arg(required = true)]
        ops: Vec<Operation>,
    },
    /// Run a YAML pipeline file
    Run {
        /// Pipeline file
        pipeline: PathBuf,

        /// Override the pipeline's input image
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Override the pipeline's output image
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available operations
    Ops,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Apply { input, output, ops } => {
            let pipeline = Pipeline::new(input, output, ops);
            run_pipeline(&pipeline)
        }
        Commands::Run {
            pipeline,
            input,
            output,
        } => {
            let mut loaded = Pipeline::load(&pipeline)
                .with_context(|| format!("Failed to load pipeline {}", pipeline.display()))?;
            if input.is_some() {
                loaded.input = input;
            }
            if output.is_some() {
                loaded.output = output;
            }
            run_pipeline(&loaded)
        }
        Commands::Ops => {
            print_operations();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "rasterkit=debug,raster_ops=debug"
    } else {
        "rasterkit=info,raster_ops=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_pipeline(pipeline: &Pipeline) -> anyhow::Result<()> {
    let image = pipeline.run().context("Pipeline failed")?;
    let (width, height) = image.dimensions();
    println!(
        "Wrote {}x{} image to {}",
        width,
        height,
        pipeline
            .output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );
    Ok(())
}

fn print_operations() {
    let width = OPERATIONS
        .iter()
        .map(|op| usage(op.name, op.args).len())
        .max()
        .unwrap_or(0);
    for op in OPERATIONS {
        println!("  {:<width$}  {}", usage(op.name, op.args), op.about, width = width);
    }
}

fn usage(name: &str, args: &str) -> String {
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{}={}", name, args)
    }
}
