//! Fixed-shape record matrix.

use crate::error::{Result, StockvizError};
use crate::loader::EmbeddingSet;
use crate::reduce::N_COMPONENTS;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Embedding vectors stacked row-wise (rows = records, columns = dimensions).
///
/// Construction validates the shape, so anything holding an
/// `EmbeddingMatrix` can rely on at least [`N_COMPONENTS`] rows and columns.
#[derive(Debug, Clone)]
pub struct EmbeddingMatrix {
    identifiers: Vec<String>,
    data: Array2<f64>,
}

impl EmbeddingMatrix {
    /// Stack an [`EmbeddingSet`], consuming it.
    pub fn from_set(set: EmbeddingSet) -> Result<Self> {
        let records = set.into_records();

        let n_records = records.len();
        let dimensions = records.first().map_or(0, |r| r.vector.len());

        if let Some(bad) = records.iter().find(|r| r.vector.len() != dimensions) {
            return Err(StockvizError::DimensionMismatch {
                line: bad.line,
                expected: dimensions,
                found: bad.vector.len(),
            });
        }

        if n_records < N_COMPONENTS {
            return Err(StockvizError::InsufficientData {
                found: n_records,
                required: N_COMPONENTS,
            });
        }

        if dimensions < N_COMPONENTS {
            return Err(StockvizError::InsufficientDimensions {
                found: dimensions,
                required: N_COMPONENTS,
            });
        }

        let mut identifiers = Vec::with_capacity(n_records);
        let mut flat = Vec::with_capacity(n_records * dimensions);
        for record in records {
            identifiers.push(record.identifier);
            flat.extend(record.vector);
        }

        let data = Array2::from_shape_vec((n_records, dimensions), flat)
            .map_err(|e| StockvizError::Numeric(format!("matrix shape: {}", e)))?;

        Ok(Self { identifiers, data })
    }

    pub fn n_records(&self) -> usize {
        self.data.nrows()
    }

    pub fn dimensions(&self) -> usize {
        self.data.ncols()
    }

    /// Identifiers in row order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Per-dimension mean across all records.
    pub fn column_means(&self) -> Array1<f64> {
        // Non-empty by construction, so mean_axis always returns Some
        self.data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.dimensions()))
    }

    /// Copy of the data with each column's mean subtracted.
    pub fn centered(&self) -> Array2<f64> {
        &self.data - &self.column_means()
    }
}
