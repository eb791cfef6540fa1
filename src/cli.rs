use std::path::{Path, PathBuf};

use clap::Parser;
use rand::Rng;
use voxcull_gen::{GenError, MapGenConfig, OriginRange, load_config};

use crate::error::AppError;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "voxcull", about = "Generate a noise voxel map and mesh its exposed faces")]
pub struct Args {
    /// TOML map config; built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Grid size as WxHxD
    #[arg(long, value_parser = parse_size)]
    pub size: Option<[usize; 3]>,
    #[arg(long)]
    pub voxel_size: Option<f32>,
    /// Density at or above which a cell is solid
    #[arg(long)]
    pub threshold: Option<f32>,
    #[arg(long)]
    pub seed: Option<i32>,
    /// Noise sample offset as x,y,z
    #[arg(long, value_parser = parse_origin, allow_hyphen_values = true)]
    pub origin: Option<[f32; 3]>,
    /// Draw a fresh origin from MINx,MINy,MINz:MAXx,MAXy,MAXz on every build
    #[arg(
        long,
        value_parser = parse_origin_range,
        allow_hyphen_values = true,
        conflicts_with = "origin"
    )]
    pub random_origin: Option<OriginRange>,
    /// Per-axis sample spacing as x,y,z
    #[arg(long, value_parser = parse_origin, allow_hyphen_values = true)]
    pub noise_scale: Option<[f32; 3]>,
    /// Write the mesh as Wavefront OBJ
    #[arg(long)]
    pub obj: Option<PathBuf>,
    /// Rebuild whenever the config file changes
    #[arg(long)]
    pub watch: bool,
}

impl Args {
    /// Config file to watch, if `--watch` was given.
    pub fn watch_path(&self) -> Result<Option<&Path>, AppError> {
        if !self.watch {
            return Ok(None);
        }
        self.config
            .as_deref()
            .map(Some)
            .ok_or(AppError::WatchWithoutConfig)
    }

    /// Config file (or defaults) with command-line overrides applied and a
    /// random origin drawn when a range is set.
    pub fn resolve_config(&self) -> Result<MapGenConfig, GenError> {
        self.resolve_config_with(&mut rand::thread_rng())
    }

    pub fn resolve_config_with<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<MapGenConfig, GenError> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => MapGenConfig::default(),
        };
        self.apply_overrides(&mut cfg);
        if let Some([x, y, z]) = cfg.randomize_origin(rng)? {
            log::info!("random origin {x},{y},{z} (rerun with --origin {x},{y},{z} to reproduce)");
        }
        Ok(cfg)
    }

    pub fn apply_overrides(&self, cfg: &mut MapGenConfig) {
        if let Some(size) = self.size {
            cfg.size = size;
        }
        if let Some(s) = self.voxel_size {
            cfg.voxel_size = s;
        }
        if let Some(t) = self.threshold {
            cfg.solid_threshold = t;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(scale) = self.noise_scale {
            cfg.noise_scale = scale;
        }
        if let Some(origin) = self.origin {
            cfg.origin = origin;
            cfg.origin_range = None;
        }
        if let Some(range) = self.random_origin {
            cfg.origin_range = Some(range);
        }
    }
}

fn parse_size(s: &str) -> Result<[usize; 3], String> {
    let parts: Vec<&str> = s.split(['x', 'X']).collect();
    let [w, h, d] = parts.as_slice() else {
        return Err(format!("expected WxHxD, got '{s}'"));
    };
    let axis = |v: &str| v.trim().parse::<usize>().map_err(|e| format!("bad size '{v}': {e}"));
    Ok([axis(*w)?, axis(*h)?, axis(*d)?])
}

fn parse_origin(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got '{s}'"));
    };
    let axis = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("bad coordinate '{v}': {e}"));
    Ok([axis(*x)?, axis(*y)?, axis(*z)?])
}

fn parse_origin_range(s: &str) -> Result<OriginRange, String> {
    let Some((min, max)) = s.split_once(':') else {
        return Err(format!("expected MINx,MINy,MINz:MAXx,MAXy,MAXz, got '{s}'"));
    };
    Ok(OriginRange::new(parse_origin(min)?, parse_origin(max)?))
}
