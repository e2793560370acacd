//! Stockviz viewer
//!
//! Loads stock embeddings, projects them with PCA and shows the labelled 3D
//! scatter plot, either in an interactive window or as a PNG file.
//!
//! ## Module Structure
//!
//! - `config` - Run configuration and command-line arguments
//! - `render` - plotters drawing of a [`Scene`](stockviz_core::Scene)
//! - `display` - Window and PNG display backends
//! - `pipeline` - Load → reduce → render sequence

pub mod config;
pub mod display;
pub mod pipeline;
pub mod render;

pub use config::{Args, DisplayBackend, ViewConfig};
pub use pipeline::{prepare_scene, run};
pub use render::{Camera, RenderError};
