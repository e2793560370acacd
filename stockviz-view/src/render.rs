//! plotters drawing of a scene.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::f64::consts::FRAC_PI_2;
use stockviz_core::{Rgb, Scene};
use thiserror::Error;

/// Figure resolution; scene sizes are in points.
const PIXELS_PER_POINT: f64 = 100.0 / 72.0;

const TITLE_FONT_SIZE: f64 = 12.0;
const AXIS_LABEL_FONT_SIZE: f64 = 10.0;
const FONT_FAMILY: &str = "sans-serif";

/// Offset of a marker's label from its center, in pixels.
const LABEL_OFFSET: (i32, i32) = (5, -5);

/// Errors raised while drawing or displaying a scene
#[derive(Debug, Error)]
pub enum RenderError {
    /// plotters failed to draw
    #[error("draw error: {0}")]
    Draw(String),

    /// Window could not be created or updated
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    /// Frame dimensions are unusable
    #[error("invalid frame size {width}x{height}")]
    FrameSize { width: u32, height: u32 },
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Viewing angle of the 3D chart, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.7,
            pitch: 0.3,
            scale: 0.85,
        }
    }
}

impl Camera {
    /// Rotate by the given deltas. Pitch stays within ±π/2 so the view never flips.
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f64::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn points_to_pixels(points: f64) -> f64 {
    points * PIXELS_PER_POINT
}

/// Draw `scene` onto `root`: caption, axes, one marker and label per point,
/// and the axis labels at the far end of each axis.
pub fn draw_scene<DB: DrawingBackend>(
    scene: &Scene,
    root: &DrawingArea<DB, Shift>,
    camera: &Camera,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_err)?;

    let [x, y, z] = scene.bounds;
    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, (FONT_FAMILY, points_to_pixels(TITLE_FONT_SIZE)))
        .margin(20)
        .build_cartesian_3d(x.min..x.max, y.min..y.max, z.min..z.max)
        .map_err(draw_err)?;

    let camera = *camera;
    chart.with_projection(|mut pb| {
        pb.yaw = camera.yaw;
        pb.pitch = camera.pitch;
        pb.scale = camera.scale;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(draw_err)?;

    let marker_color = color(scene.style.color);
    let radius = points_to_pixels(scene.style.radius()).round().max(1.0) as i32;
    let label_font = (FONT_FAMILY, points_to_pixels(scene.label_font_size))
        .into_font()
        .color(&BLACK);

    chart
        .draw_series(scene.markers.iter().map(|marker| {
            let [px, py, pz] = marker.position;
            EmptyElement::at((px, py, pz))
                + Circle::new((0, 0), radius, marker_color.filled())
                + Text::new(marker.label.clone(), LABEL_OFFSET, label_font.clone())
        }))
        .map_err(draw_err)?;

    let axis_font = (FONT_FAMILY, points_to_pixels(AXIS_LABEL_FONT_SIZE))
        .into_font()
        .color(&BLACK);
    let axis_ends = [
        (x.max, y.min, z.min),
        (x.min, y.max, z.min),
        (x.min, y.min, z.max),
    ];
    chart
        .draw_series(
            scene
                .axis_labels
                .iter()
                .zip(axis_ends)
                .map(|(label, end)| Text::new(label.clone(), end, axis_font.clone())),
        )
        .map_err(draw_err)?;

    Ok(())
}

/// Render `scene` into a `0RGB` pixel buffer of `width * height` entries.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
) -> Result<Vec<u32>, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::FrameSize { width, height });
    }

    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        draw_scene(scene, &root, camera)?;
        root.present().map_err(draw_err)?;
    }

    Ok(rgb_to_0rgb(&rgb))
}

/// Pack an RGB byte buffer into `0RGB` words.
pub fn rgb_to_0rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockviz_core::ProjectedPoint;

    fn scene() -> Scene {
        Scene::from_points(&[
            ProjectedPoint {
                identifier: "AAA".to_string(),
                coordinates: [1.0, -0.5, 0.2],
            },
            ProjectedPoint {
                identifier: "BBB".to_string(),
                coordinates: [-1.0, 0.5, -0.2],
            },
            ProjectedPoint {
                identifier: "CCC".to_string(),
                coordinates: [0.0, 0.0, 0.0],
            },
        ])
    }

    #[test]
    fn packs_rgb_triplets() {
        let packed = rgb_to_0rgb(&[0xff, 0x00, 0x80, 0x01, 0x02, 0x03]);
        assert_eq!(packed, vec![0x00ff0080, 0x00010203]);
    }

    #[test]
    fn trailing_partial_pixel_ignored() {
        assert_eq!(rgb_to_0rgb(&[1, 2, 3, 4]).len(), 1);
    }

    #[test]
    fn camera_pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.rotate(0.0, 10.0);
        assert_eq!(camera.pitch, FRAC_PI_2);
        camera.rotate(0.0, -20.0);
        assert_eq!(camera.pitch, -FRAC_PI_2);
    }

    #[test]
    fn camera_yaw_wraps() {
        let mut camera = Camera {
            yaw: 6.0,
            ..Camera::default()
        };
        camera.rotate(1.0, 0.0);
        assert!(camera.yaw >= 0.0 && camera.yaw < std::f64::consts::TAU);
        assert!((camera.yaw - (7.0 - std::f64::consts::TAU)).abs() < 1e-12);
    }

    #[test]
    fn zero_sized_frame_rejected() {
        let err = render_frame(&scene(), &Camera::default(), 0, 100).unwrap_err();
        assert!(matches!(err, RenderError::FrameSize { width: 0, .. }));
    }

    #[test]
    fn frame_has_blue_markers() {
        let frame = render_frame(&scene(), &Camera::default(), 400, 300).unwrap();
        assert_eq!(frame.len(), 400 * 300);
        assert!(frame.contains(&0x000000ff), "expected pure blue marker pixels");
        assert!(frame.contains(&0x00ffffff), "expected white background");
    }
}
