//! Load → reduce → render.

use crate::config::ViewConfig;
use crate::display;
use std::error::Error;
use std::path::Path;
use stockviz_core::{load_embeddings, DimensionReducer, EmbeddingMatrix, Pca, Scene};
use tracing::info;

/// Build the scene for the embedding file at `path` without displaying it.
pub fn prepare_scene(
    path: &Path,
    reducer: &dyn DimensionReducer,
) -> stockviz_core::Result<Scene> {
    let set = load_embeddings(path)?;
    let matrix = EmbeddingMatrix::from_set(set)?;
    info!(
        "reducing {} x {} matrix with {}",
        matrix.n_records(),
        matrix.dimensions(),
        reducer.name()
    );
    let projection = reducer.reduce(&matrix)?;
    Ok(Scene::from_points(&projection.points))
}

/// Run the whole pipeline once. Any failure stops before later stages.
pub fn run(config: &ViewConfig) -> Result<(), Box<dyn Error>> {
    let scene = prepare_scene(&config.input_path, &Pca::new())?;
    display::show(&scene, config)?;
    Ok(())
}
