//! Display backends
//!
//! `Window` is the blocking, interactive view: arrow keys rotate the chart,
//! Escape or closing the window ends the run. `Png` writes the same figure
//! to a file.

use crate::config::{DisplayBackend, ViewConfig};
use crate::render::{draw_scene, render_frame, Camera, RenderError};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use plotters::prelude::*;
use std::path::Path;
use stockviz_core::tracing::prefix;
use stockviz_core::Scene;
use tracing::{debug, info};

/// Rotation per arrow-key press, in radians.
const ROTATE_STEP: f64 = 0.05;

const TARGET_FPS: usize = 30;

/// Show `scene` on the configured backend.
pub fn show(scene: &Scene, config: &ViewConfig) -> Result<(), RenderError> {
    match &config.display_backend {
        DisplayBackend::Window => show_window(scene, config.width, config.height),
        DisplayBackend::Png { path } => write_png(scene, path, config.width, config.height),
    }
}

/// Render `scene` to a PNG file at `path`.
pub fn write_png(scene: &Scene, path: &Path, width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::FrameSize { width, height });
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    draw_scene(scene, &root, &Camera::default())?;
    root.present()
        .map_err(|e| RenderError::Draw(format!("writing {}: {}", path.display(), e)))?;

    info!("{} wrote {}", prefix::RENDER, path.display());
    Ok(())
}

/// Camera change requested by a key, if any.
fn rotation_for(key: Key) -> Option<(f64, f64)> {
    match key {
        Key::Left => Some((-ROTATE_STEP, 0.0)),
        Key::Right => Some((ROTATE_STEP, 0.0)),
        Key::Up => Some((0.0, ROTATE_STEP)),
        Key::Down => Some((0.0, -ROTATE_STEP)),
        _ => None,
    }
}

/// Open a window and block until the user closes it.
pub fn show_window(scene: &Scene, width: u32, height: u32) -> Result<(), RenderError> {
    let mut camera = Camera::default();
    let mut frame = render_frame(scene, &camera, width, height)?;
    let (w, h) = (width as usize, height as usize);

    let mut window = Window::new(&scene.title, w, h, WindowOptions::default())?;
    window.set_target_fps(TARGET_FPS);

    info!(
        "{} showing {} points, close the window or press Esc to exit",
        prefix::RENDER,
        scene.markers.len()
    );

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut moved = false;
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            if let Some((d_yaw, d_pitch)) = rotation_for(key) {
                camera.rotate(d_yaw, d_pitch);
                moved = true;
            }
        }

        if moved {
            debug!("camera yaw={:.2} pitch={:.2}", camera.yaw, camera.pitch);
            frame = render_frame(scene, &camera, width, height)?;
        }

        window.update_with_buffer(&frame, w, h)?;
    }

    info!("{} window closed", prefix::RENDER);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_rotate() {
        assert_eq!(rotation_for(Key::Left), Some((-ROTATE_STEP, 0.0)));
        assert_eq!(rotation_for(Key::Up), Some((0.0, ROTATE_STEP)));
        assert_eq!(rotation_for(Key::A), None);
    }

    #[test]
    fn png_rejects_empty_frame() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_png(&Scene::from_points(&[]), &dir.path().join("x.png"), 100, 0)
            .unwrap_err();
        assert!(matches!(err, RenderError::FrameSize { height: 0, .. }));
    }
}
