//! File load/save helpers for the command-line shell
//!
//! All filesystem concerns live here, outside the core: reading matrix
//! files, normalizing output names, and writing results.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use spmat_core::SparseMatrix;

/// Read and decode a matrix file
pub fn load_matrix(path: &Path) -> Result<SparseMatrix> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read matrix file {}", path.display()))?;
    let matrix = SparseMatrix::decode(&text)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    debug!(
        "loaded {}x{} matrix with {} non-zeros from {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Encode and write a matrix, creating the parent directory if needed
///
/// A `.txt` extension is appended when the path has none. Returns the
/// path actually written.
pub fn save_matrix(matrix: &SparseMatrix, path: &Path) -> Result<PathBuf> {
    let path = with_txt_extension(path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(&path, matrix.encode())
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "wrote {}x{} matrix with {} non-zeros to {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(path)
}

fn with_txt_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("txt")
    }
}
