//! Instance files on disk.

use rand::RngCore;
use rddlgen_core::GenError;
use rddlgen_domains::Domain;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from generating and writing one instance file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Configuration or literal validation failed; nothing was written.
    #[error(transparent)]
    Generate(#[from] GenError),
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The instance file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Write `text` to `<dir>/<instance_name>.rddl`, creating `dir` if needed.
pub fn write_instance(dir: &Path, instance_name: &str, text: &str) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("{instance_name}.rddl"));
    fs::write(&path, text).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Validate, generate, render and write one instance.
///
/// Validation runs before the output directory is touched, so an invalid
/// configuration leaves the filesystem unchanged.
pub fn emit_instance(
    domain: &dyn Domain,
    instance_name: &str,
    dir: &Path,
    rng: &mut dyn RngCore,
) -> Result<PathBuf, OutputError> {
    domain.validate()?;
    let generated = domain.generate(instance_name, rng)?;
    let text = rddlgen_rddl::render(&generated.document);
    let path = write_instance(dir, instance_name, &text)?;
    info!(
        instance = instance_name,
        domain = domain.domain_name(),
        path = %path.display(),
        "wrote instance"
    );
    Ok(path)
}
