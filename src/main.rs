use std::process::ExitCode;

use clap::Parser;
use voxcull_gen::{MapGenConfig, generate};
use voxcull_mesh::{SurfaceMesh, build_surface_mesh};

mod cli;
mod error;
mod export;
mod watch;

use cli::Args;
use error::AppError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let watch_path = args.watch_path()?;
    let cfg = args.resolve_config()?;
    rebuild(&cfg, args)?;
    if let Some(path) = watch_path {
        watch::watch_config(path, || {
            let cfg = args.resolve_config()?;
            rebuild(&cfg, args).map(drop)
        })?;
    }
    Ok(())
}

/// One full generate → mesh → report (→ export) pass.
fn rebuild(cfg: &MapGenConfig, args: &Args) -> Result<SurfaceMesh, AppError> {
    let grid = generate(cfg)?;
    let mesh = build_surface_mesh(&grid, cfg.voxel_size)?;
    log::info!(
        "map {} solid={} verts={} (used {}) tris={} bounds=[{:?} .. {:?}]",
        grid.size(),
        grid.solid_count(),
        mesh.vertex_count(),
        mesh.referenced_vertex_count(),
        mesh.triangle_count(),
        mesh.bounds.min.to_array(),
        mesh.bounds.max.to_array()
    );
    if let Some(path) = &args.obj {
        export::save_obj(path, &mesh)?;
        log::info!("wrote {}", path.display());
    }
    Ok(mesh)
}
