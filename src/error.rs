use std::path::PathBuf;

use thiserror::Error;
use voxcull_gen::GenError;
use voxcull_mesh::MeshError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Gen(#[from] GenError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config watcher failed: {0}")]
    Watch(#[from] notify::Error),
    #[error("--watch needs a --config file to watch")]
    WatchWithoutConfig,
}
