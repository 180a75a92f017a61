//! Graph serialization and deserialization using `MessagePack`.
//!
//! A graph is stored as its node list and relation list; the lookup indices
//! are rebuilt on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use lexigraph_foundation::{Error, ErrorKind, Result};
use lexigraph_storage::SemanticGraph;

/// Serializes a graph to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(graph: &SemanticGraph) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(graph)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a graph from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SemanticGraph> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a graph to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(graph: &SemanticGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    let io = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!(
            "failed to {action} file '{}': {e}",
            path.display()
        )))
    };

    let bytes = to_bytes(graph)?;
    let file = File::create(path).map_err(|e| io("create", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| io("write", e))?;
    writer.flush().map_err(|e| io("flush", e))?;
    Ok(())
}

/// Loads a graph from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SemanticGraph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    from_bytes(&bytes)
}
