//! Drawable scene for the 3D scatter plot.
//!
//! Pure data: a renderer turns a [`Scene`] into pixels, nothing here touches
//! a display.

use crate::reduce::{ProjectedPoint, N_COMPONENTS};

/// Figure title.
pub const TITLE: &str = "3D PCA Visualization of Stock Embeddings";

/// Axis labels, in x, y, z order.
pub const AXIS_LABELS: [&str; N_COMPONENTS] = ["PCA 1", "PCA 2", "PCA 3"];

/// Label font size in points.
pub const LABEL_FONT_SIZE: f64 = 8.0;

/// Fraction of each axis span added on both sides.
const AXIS_PADDING: f64 = 0.05;

/// Half-width given to an axis whose points all share one value.
const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
}

/// Uniform style shared by every marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Marker area in pt²
    pub size: f64,
    pub color: Rgb,
}

impl MarkerStyle {
    /// Radius in points of a circle with this style's area.
    pub fn radius(&self) -> f64 {
        (self.size / std::f64::consts::PI).sqrt()
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::Circle,
            size: 40.0,
            color: Rgb::BLUE,
        }
    }
}

/// A labelled point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub position: [f64; N_COMPONENTS],
}

/// Closed interval for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Padded range covering `values`; `[-0.5, 0.5]` when empty.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        let span = hi - lo;
        if span <= f64::EPSILON * lo.abs().max(hi.abs()).max(1.0) {
            let mid = (lo + hi) / 2.0;
            return Self {
                min: mid - DEGENERATE_HALF_WIDTH,
                max: mid + DEGENERATE_HALF_WIDTH,
            };
        }

        Self {
            min: lo - span * AXIS_PADDING,
            max: hi + span * AXIS_PADDING,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Everything a renderer needs to draw the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub axis_labels: [String; N_COMPONENTS],
    pub markers: Vec<Marker>,
    pub style: MarkerStyle,
    pub label_font_size: f64,
    pub bounds: [AxisRange; N_COMPONENTS],
}

impl Scene {
    /// One marker per point, labelled with its identifier, in input order.
    pub fn from_points(points: &[ProjectedPoint]) -> Self {
        let markers: Vec<Marker> = points
            .iter()
            .map(|p| Marker {
                label: p.identifier.clone(),
                position: p.coordinates,
            })
            .collect();

        let bounds = [0, 1, 2].map(|axis| {
            AxisRange::covering(markers.iter().map(|m| m.position[axis]))
        });

        Self {
            title: TITLE.to_string(),
            axis_labels: AXIS_LABELS.map(str::to_string),
            markers,
            style: MarkerStyle::default(),
            label_font_size: LABEL_FONT_SIZE,
            bounds,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.markers.iter().map(|m| m.label.as_str()).collect()
    }
}
