//! Dimensionality reduction.
//!
//! [`Pca`] is the native backend: it centers the matrix and projects every
//! record onto the three directions of maximum variance. Axis signs are made
//! deterministic here (largest-magnitude score positive) but are not
//! comparable with other PCA libraries, which pick their own orientation.

use crate::error::{Result, StockvizError};
use crate::matrix::EmbeddingMatrix;
use crate::tracing::prefix;
use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{Array2, ArrayView2};
use std::time::Instant;
use tracing::{debug, info};

/// Number of output dimensions.
pub const N_COMPONENTS: usize = 3;

/// One record placed in the projected space.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub identifier: String,
    pub coordinates: [f64; N_COMPONENTS],
}

/// Output of a reduction: points in input order plus per-axis variance.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<ProjectedPoint>,
    /// Variance captured by each axis
    pub explained_variance: [f64; N_COMPONENTS],
    /// Fraction of the total variance captured by each axis
    pub explained_variance_ratio: [f64; N_COMPONENTS],
}

impl Projection {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Contract for dimensionality reduction backends.
pub trait DimensionReducer {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Project every row of `matrix` to [`N_COMPONENTS`] coordinates.
    fn reduce(&self, matrix: &EmbeddingMatrix) -> Result<Projection>;
}

/// Which symmetric matrix gets eigen-decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// D×D covariance; used when dimensions <= records
    Covariance,
    /// N×N Gram matrix; used when dimensions > records
    Gram,
}

impl Strategy {
    fn for_shape(n_records: usize, dimensions: usize) -> Self {
        if dimensions <= n_records {
            Strategy::Covariance
        } else {
            Strategy::Gram
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Strategy::Covariance => "covariance",
            Strategy::Gram => "gram",
        }
    }
}

/// Principal component analysis onto the top three components.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pca;

impl Pca {
    pub fn new() -> Self {
        Self
    }
}

impl DimensionReducer for Pca {
    fn name(&self) -> &'static str {
        "pca"
    }

    fn reduce(&self, matrix: &EmbeddingMatrix) -> Result<Projection> {
        let start = Instant::now();
        let strategy = Strategy::for_shape(matrix.n_records(), matrix.dimensions());
        debug!(
            "{} pca: {} records x {} dims via {}",
            prefix::REDUCE,
            matrix.n_records(),
            matrix.dimensions(),
            strategy.as_str()
        );

        let centered = matrix.centered();
        let decomposition = decompose(centered.view(), strategy)?;

        let points = matrix
            .identifiers()
            .iter()
            .zip(decomposition.scores.rows())
            .map(|(identifier, row)| ProjectedPoint {
                identifier: identifier.clone(),
                coordinates: [row[0], row[1], row[2]],
            })
            .collect::<Vec<_>>();

        let projection = Projection {
            points,
            explained_variance: decomposition.variance,
            explained_variance_ratio: decomposition.ratio,
        };

        info!(
            "{} pca complete: {} points in {}ms, explained variance ratio [{:.3}, {:.3}, {:.3}]",
            prefix::REDUCE,
            projection.len(),
            start.elapsed().as_millis(),
            projection.explained_variance_ratio[0],
            projection.explained_variance_ratio[1],
            projection.explained_variance_ratio[2]
        );

        Ok(projection)
    }
}

struct Decomposition {
    /// N × N_COMPONENTS
    scores: Array2<f64>,
    variance: [f64; N_COMPONENTS],
    ratio: [f64; N_COMPONENTS],
}

/// Eigen-decompose the centered data and project onto the top components.
fn decompose(centered: ArrayView2<'_, f64>, strategy: Strategy) -> Result<Decomposition> {
    let n = centered.nrows();
    let denom = (n.saturating_sub(1)).max(1) as f64;

    let symmetric = match strategy {
        Strategy::Covariance => centered.t().dot(&centered) / denom,
        Strategy::Gram => centered.dot(&centered.t()),
    };
    let size = symmetric.nrows();
    let eigen = SymmetricEigen::new(DMatrix::from_fn(size, size, |i, j| symmetric[[i, j]]));

    if eigen.eigenvalues.iter().any(|v| !v.is_finite()) {
        return Err(StockvizError::Numeric(
            "eigen-decomposition produced non-finite eigenvalues".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..size).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let total_variance = centered.iter().map(|v| v * v).sum::<f64>() / denom;

    let mut scores = Array2::<f64>::zeros((n, N_COMPONENTS));
    let mut variance = [0.0; N_COMPONENTS];
    let mut ratio = [0.0; N_COMPONENTS];

    for (k, &idx) in order.iter().take(N_COMPONENTS).enumerate() {
        // Round-off can leave tiny negative eigenvalues on rank-deficient data
        let eigenvalue = eigen.eigenvalues[idx].max(0.0);
        let vector = eigen.eigenvectors.column(idx);

        match strategy {
            Strategy::Covariance => {
                variance[k] = eigenvalue;
                for (i, row) in centered.rows().into_iter().enumerate() {
                    scores[[i, k]] = row.iter().zip(vector.iter()).map(|(x, v)| x * v).sum();
                }
            }
            Strategy::Gram => {
                variance[k] = eigenvalue / denom;
                let singular = eigenvalue.sqrt();
                for i in 0..n {
                    scores[[i, k]] = vector[i] * singular;
                }
            }
        }

        ratio[k] = if total_variance > 0.0 {
            variance[k] / total_variance
        } else {
            0.0
        };
    }

    orient(&mut scores);

    if scores.iter().any(|v| !v.is_finite()) {
        return Err(StockvizError::Numeric(
            "projection produced non-finite coordinates".to_string(),
        ));
    }

    Ok(Decomposition {
        scores,
        variance,
        ratio,
    })
}

/// Flip each axis so its largest-magnitude score is positive.
fn orient(scores: &mut Array2<f64>) {
    for mut column in scores.columns_mut() {
        let pivot = column
            .iter()
            .copied()
            .max_by(|a, b| a.abs().total_cmp(&b.abs()))
            .unwrap_or(0.0);
        if pivot < 0.0 {
            column.mapv_inplace(|v| -v);
        }
    }
}
