//! Thin map-generation host layer: samples a noise field per cell and marks
//! cells at or above a threshold solid.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use fastnoise_lite::{FastNoiseLite, NoiseType};
use thiserror::Error;
use voxcull_geom::Vec3;
use voxcull_grid::{GridError, VoxelGrid};

mod config;

pub use config::{MapGenConfig, OriginRange, load_config, parse_config};

#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid map config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("origin range {:?}..{:?} must have finite bounds", .0.min, .0.max)]
    InvalidOriginRange(OriginRange),
}

/// Occupancy density in `[0, 1]` per cell: the mean of two 2D Perlin samples
/// taken in the xy and zy planes.
pub struct DensitySampler {
    noise: FastNoiseLite,
    origin: Vec3,
    scale: Vec3,
}

impl DensitySampler {
    pub fn new(cfg: &MapGenConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(cfg.seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(cfg.frequency));
        Self {
            noise,
            origin: Vec3::from(cfg.origin),
            scale: Vec3::from(cfg.noise_scale),
        }
    }

    /// Sample position of a cell: `origin + cell * scale`, per axis.
    #[inline]
    pub fn sample_pos(&self, x: usize, y: usize, z: usize) -> Vec3 {
        self.origin
            + Vec3::new(
                x as f32 * self.scale.x,
                y as f32 * self.scale.y,
                z as f32 * self.scale.z,
            )
    }

    pub fn density(&self, x: usize, y: usize, z: usize) -> f32 {
        let p = self.sample_pos(x, y, z);
        let a = unit(self.noise.get_noise_2d(p.x, p.y));
        let b = unit(self.noise.get_noise_2d(p.z, p.y));
        (a + b) * 0.5
    }
}

#[inline]
fn unit(n: f32) -> f32 {
    ((n + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Builds a fresh grid from `cfg`. Deterministic for a given config.
pub fn generate(cfg: &MapGenConfig) -> Result<VoxelGrid, GenError> {
    let sampler = DensitySampler::new(cfg);
    let [sx, sy, sz] = cfg.size;
    let grid = VoxelGrid::from_fn(sx, sy, sz, |x, y, z| {
        (sampler.density(x, y, z) >= cfg.solid_threshold).then_some(())
    })?;
    log::debug!(
        "generated {} map seed={} origin={:?} solid={}",
        grid.size(),
        cfg.seed,
        cfg.origin,
        grid.solid_count()
    );
    Ok(grid)
}
