use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use crate::GenError;

/// Parameters for filling a grid from a noise field. Every field is optional
/// in TOML and falls back to the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MapGenConfig {
    #[serde(default = "default_size")]
    pub size: [usize; 3],
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,
    #[serde(default = "default_solid_threshold")]
    pub solid_threshold: f32,
    /// Per-axis multiplier applied to cell coordinates before sampling.
    #[serde(default = "default_noise_scale")]
    pub noise_scale: [f32; 3],
    /// Offset added to every sample position.
    #[serde(default)]
    pub origin: [f32; 3],
    /// When set, `origin` is redrawn from this box before each generation.
    #[serde(default)]
    pub origin_range: Option<OriginRange>,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_size() -> [usize; 3] {
    [20, 20, 20]
}
fn default_voxel_size() -> f32 {
    1.0
}
fn default_solid_threshold() -> f32 {
    0.5
}
fn default_noise_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}
fn default_seed() -> i32 {
    1337
}
fn default_frequency() -> f32 {
    0.1
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            voxel_size: default_voxel_size(),
            solid_threshold: default_solid_threshold(),
            noise_scale: default_noise_scale(),
            origin: [0.0; 3],
            origin_range: None,
            seed: default_seed(),
            frequency: default_frequency(),
        }
    }
}

impl MapGenConfig {
    /// Replaces `origin` with a draw from `origin_range`, if one is set, and
    /// returns the new origin.
    pub fn randomize_origin<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<[f32; 3]>, GenError> {
        let Some(range) = self.origin_range else {
            return Ok(None);
        };
        self.origin = range.sample(rng)?;
        Ok(Some(self.origin))
    }
}

/// Axis-aligned box of noise origins, inclusive of both corners.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct OriginRange {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl OriginRange {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Uniform draw per axis. Bounds may be given in either order; an axis
    /// whose bounds are equal always yields that value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<[f32; 3], GenError> {
        let mut out = [0.0; 3];
        for (axis, o) in out.iter_mut().enumerate() {
            let (a, b) = (self.min[axis], self.max[axis]);
            if !(a.is_finite() && b.is_finite() && (a - b).is_finite()) {
                return Err(GenError::InvalidOriginRange(*self));
            }
            let (lo, hi) = (a.min(b), a.max(b));
            *o = if lo == hi { lo } else { rng.gen_range(lo..=hi) };
        }
        Ok(out)
    }
}

pub fn parse_config(s: &str) -> Result<MapGenConfig, GenError> {
    Ok(toml::from_str(s)?)
}

pub fn load_config(path: &Path) -> Result<MapGenConfig, GenError> {
    let s = fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&s)
}
