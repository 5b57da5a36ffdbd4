use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error type for geoscript.
#[derive(Debug, Error)]
pub enum GeoscriptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural precondition violations raised while constructing entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity} needs more than {min} points, got {got}")]
    TooFewPoints {
        entity: &'static str,
        min: usize,
        got: usize,
    },

    #[error("expected a {expected} entity, found a {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0} is not registered in this geometry")]
    UnknownEntity(&'static str),

    #[error("line starts and ends at {0}")]
    DegenerateLine(String),

    #[error("curve loop has no curves")]
    EmptyCurveLoop,

    #[error("curve loop is open: {end} does not meet {start}")]
    OpenCurveLoop { end: String, start: String },

    #[error("plane surface points are not coplanar")]
    NotPlanar,
}

/// Failures of the external meshing engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("engine exited with error ({status})\n{output}")]
    Failed { status: ExitStatus, output: String },

    #[error("cannot parse engine version from {0:?}")]
    Version(String),
}

/// Errors reported by a mesh-file decoder.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed mesh file {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Inconsistencies in a mesh record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("{cell_type} block has {len} indices, not a multiple of {nodes_per_cell}")]
    RaggedBlock {
        cell_type: String,
        len: usize,
        nodes_per_cell: usize,
    },

    #[error("{cell_type} block references vertex {index}, mesh has {num_points} points")]
    IndexOutOfRange {
        cell_type: String,
        index: usize,
        num_points: usize,
    },

    #[error("data array {name:?} has {got} rows, expected {expected}")]
    DataLength {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("row {row} requested from a data array with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("rotation axis must be unitary, |u|^2 = {0}")]
    NonUnitAxis(f64),
}

/// Convenience type alias for results using [`GeoscriptError`].
pub type Result<T> = std::result::Result<T, GeoscriptError>;
