//! # Stockviz Core
//!
//! Everything needed to turn a stock embedding file into a drawable 3D scene,
//! without touching a display:
//! - **loader**: whitespace-delimited `<identifier> <float>...` parsing
//! - **matrix**: rectangular record matrix, validated at construction
//! - **reduce**: PCA projection onto the top three principal components
//! - **scene**: markers, labels, axis ranges and fixed styling for a renderer
//! - **error**: error taxonomy shared by all stages
//! - **tracing**: logging setup with stage prefixes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockviz_core::{load_embeddings, DimensionReducer, EmbeddingMatrix, Pca, Scene};
//!
//! let set = load_embeddings("stock2vec/sentences.refined.vectors.txt")?;
//! let matrix = EmbeddingMatrix::from_set(set)?;
//! let projection = Pca::default().reduce(&matrix)?;
//! let scene = Scene::from_points(&projection.points);
//! ```

pub mod error;
pub mod loader;
pub mod matrix;
pub mod reduce;
pub mod scene;
pub mod tracing;

pub use error::{Result, StockvizError};
pub use loader::{load_embeddings, parse_embeddings, EmbeddingRecord, EmbeddingSet};
pub use matrix::EmbeddingMatrix;
pub use reduce::{DimensionReducer, Pca, ProjectedPoint, Projection, N_COMPONENTS};
pub use scene::{AxisRange, Marker, MarkerShape, MarkerStyle, Rgb, Scene};
