mod command;

pub use command::{default_executable, engine_args, engine_major_version, run_engine};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::info;

use crate::error::{DecodeError, Result};
use crate::mesh::{Mesh, PostProcess};
use crate::options::MeshOptions;
use crate::script::Geometry;

/// Decodes a mesh file written by the engine.
pub trait MeshReader {
    /// Reads the mesh stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the file cannot be read or parsed.
    fn read(&self, path: &Path) -> std::result::Result<Mesh, DecodeError>;
}

impl<F> MeshReader for F
where
    F: Fn(&Path) -> std::result::Result<Mesh, DecodeError>,
{
    fn read(&self, path: &Path) -> std::result::Result<Mesh, DecodeError> {
        self(path)
    }
}

/// The script handed to the engine: either a temporary file removed on
/// drop, or a file the caller asked to keep.
enum ScriptFile {
    Temporary(TempPath),
    Kept(PathBuf),
}

impl ScriptFile {
    fn path(&self) -> &Path {
        match self {
            Self::Temporary(path) => &**path,
            Self::Kept(path) => path.as_path(),
        }
    }
}

/// Meshes `geometry` with the external engine and returns the
/// post-processed result.
///
/// The script and the engine's output are written to temporary files in
/// `options.work_dir`; both are removed whether meshing succeeds or fails.
/// A script written to `options.keep_script` is left in place.
///
/// # Errors
///
/// Returns an error if a file cannot be written, the engine cannot be
/// started or exits unsuccessfully, `reader` fails to decode the output, or
/// post-processing finds the decoded mesh inconsistent.
pub fn generate_mesh<R>(geometry: &Geometry, options: &MeshOptions, reader: &R) -> Result<Mesh>
where
    R: MeshReader + ?Sized,
{
    let work_dir = options.work_dir.clone().unwrap_or_else(std::env::temp_dir);
    let code = geometry.get_code();

    let script = if let Some(path) = &options.keep_script {
        fs::write(path, &code)?;
        ScriptFile::Kept(path.clone())
    } else {
        let mut file = tempfile::Builder::new()
            .prefix("geoscript-")
            .suffix(".geo")
            .tempfile_in(&work_dir)?;
        file.write_all(code.as_bytes())?;
        file.flush()?;
        ScriptFile::Temporary(file.into_temp_path())
    };

    let output = tempfile::Builder::new()
        .prefix("geoscript-")
        .suffix(&format!(".{}", options.output_format.extension()))
        .tempfile_in(&work_dir)?
        .into_temp_path();

    let executable = options
        .executable
        .clone()
        .unwrap_or_else(default_executable);
    let args = engine_args(script.path(), &output, options);
    run_engine(&executable, &args, options.verbose)?;

    let mesh = reader.read(&output)?;

    if let ScriptFile::Kept(path) = &script {
        info!(path = %path.display(), "kept script file");
    }

    Ok(PostProcess::new(options).execute(mesh)?)
}
