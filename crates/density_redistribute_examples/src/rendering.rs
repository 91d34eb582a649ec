use std::path::Path;

use anyhow::Context;
use density_redistribute::position::Position;
use glam::DVec2;
use image::{ImageBuffer, Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Plane onto which positions are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Face-on view, looking down the z axis.
    Xy,
    /// Edge-on view, looking along the y axis.
    Xz,
}

impl Projection {
    fn project(self, position: Position) -> DVec2 {
        match self {
            Projection::Xy => DVec2::new(position.x(), position.y()),
            Projection::Xz => DVec2::new(position.x(), position.z()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Half the width of the rendered square, in model units.
    pub half_extent: f64,
    pub projection: Projection,
    pub background: [u8; 3],
    pub color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), half_extent: f64) -> Self {
        Self {
            image_size,
            half_extent,
            projection: Projection::Xy,
            background: [16, 16, 16],
            color: [255, 214, 140],
        }
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    fn pixel(&self, point: DVec2) -> Option<(u32, u32)> {
        let (w, h) = self.image_size;
        let u = (point.x / self.half_extent + 1.0) * 0.5;
        let v = 1.0 - (point.y / self.half_extent + 1.0) * 0.5;
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        Some(((u * w as f64) as u32, (v * h as f64) as u32))
    }
}

/// Renders a projected hit-count map of `positions`, brightness on a log scale.
pub fn render_positions_to_png(
    positions: &[Position],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut counts = vec![0u32; (w as usize) * (h as usize)];
    let mut visible = 0usize;
    for &p in positions {
        if let Some((x, y)) = config.pixel(config.projection.project(p)) {
            counts[(y * w + x) as usize] += 1;
            visible += 1;
        }
    }

    let peak = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    let image: RgbImage = ImageBuffer::from_fn(w, h, |x, y| {
        let count = counts[(y * w + x) as usize] as f64;
        let t = (1.0 + count).ln() / (1.0 + peak).ln();
        let mix = |bg: u8, fg: u8| (bg as f64 + (fg as f64 - bg as f64) * t).round() as u8;
        Rgb([
            mix(config.background[0], config.color[0]),
            mix(config.background[1], config.color[1]),
            mix(config.background[2], config.color[2]),
        ])
    });

    let path = path.as_ref();
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "Rendered {} of {} positions to {}.",
        visible,
        positions.len(),
        path.display()
    );
    Ok(())
}
