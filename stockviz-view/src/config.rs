//! Run configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Where the embedding file lives unless told otherwise.
pub const DEFAULT_INPUT_PATH: &str = "stock2vec/sentences.refined.vectors.txt";

/// Default PNG output path for the `png` backend.
pub const DEFAULT_OUTPUT_PATH: &str = "stock_pca.png";

/// 10 x 7 inch figure at 100 dpi.
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 700;

/// How the finished figure is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayBackend {
    /// Interactive window; blocks until the user closes it
    #[default]
    Window,
    /// Render to a PNG file and return
    Png { path: PathBuf },
}

/// Explicit configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub input_path: PathBuf,
    pub display_backend: DisplayBackend,
    pub width: u32,
    pub height: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            display_backend: DisplayBackend::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Window,
    Png,
}

#[derive(Parser, Debug)]
#[command(name = "stockviz")]
#[command(about = "3D PCA view of stock embeddings")]
#[command(version)]
pub struct Args {
    /// Embedding file: one `<identifier> <float>...` record per line
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Display backend
    #[arg(short, long, value_enum, default_value = "window")]
    pub backend: BackendArg,

    /// Output file for the png backend
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Figure width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn into_config(self) -> ViewConfig {
        let display_backend = match self.backend {
            BackendArg::Window => DisplayBackend::Window,
            BackendArg::Png => DisplayBackend::Png { path: self.output },
        };

        ViewConfig {
            input_path: self.input,
            display_backend,
            width: self.width,
            height: self.height,
        }
    }
}
