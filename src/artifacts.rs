//! Vector-file persistence for the simulation harness.
//!
//! A run produces four text files in the output directory:
//!
//! - `matrix_north.txt`: operand A, one hex word per line, row-major
//! - `matrix_west.txt`: operand B, same layout
//! - `expected_output.txt`: a single hex word, the first element of the
//!   final pipeline output
//! - `intermediate_values.txt`: human-readable previews of every stage,
//!   for debugging a harness mismatch
//!
//! The hex files carry no headers, no comments, and no trailing blank
//! lines; testbench readers consume them with a dumb line loop.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{DoradoError, Result};
use crate::pipeline::{PipelineConfig, PipelineResult};
use crate::primitives::Matrix;

const NORTH_FILE: &str = "matrix_north.txt";
const WEST_FILE: &str = "matrix_west.txt";
const EXPECTED_FILE: &str = "expected_output.txt";
const INTERMEDIATE_FILE: &str = "intermediate_values.txt";

const BANNER: &str = "============================================================";

/// Paths of the files produced by [`write_vectors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorFiles {
    /// Operand A hex file
    pub north: PathBuf,
    /// Operand B hex file
    pub west: PathBuf,
    /// Single-line expected output hex file
    pub expected: PathBuf,
    /// Debug dump of every stage
    pub intermediates: PathBuf,
}

/// Writes the four vector files for one pipeline run.
///
/// The output directory (and any missing parents) is created first. File
/// names are fixed by the harness contract; only the directory varies.
///
/// # Errors
///
/// Returns [`DoradoError::Io`] if the directory can't be created or a file
/// can't be written, and [`DoradoError::DimensionMismatch`] if the result
/// carries an empty final output (impossible for results produced by
/// [`crate::pipeline::run`], which validates shapes up front).
pub fn write_vectors(
    config: &PipelineConfig,
    result: &PipelineResult,
    dir: &Path,
) -> Result<VectorFiles> {
    let first = result
        .final_output
        .as_slice()
        .first()
        .copied()
        .ok_or_else(|| DoradoError::DimensionMismatch {
            expected: "final output with at least one element".to_string(),
            actual: "empty matrix".to_string(),
        })?;

    fs::create_dir_all(dir)?;

    let files = VectorFiles {
        north: dir.join(NORTH_FILE),
        west: dir.join(WEST_FILE),
        expected: dir.join(EXPECTED_FILE),
        intermediates: dir.join(INTERMEDIATE_FILE),
    };

    write_hex_matrix(&files.north, &result.a)?;
    write_hex_matrix(&files.west, &result.b)?;

    let mut writer = BufWriter::new(File::create(&files.expected)?);
    writeln!(writer, "{}", codec::encode(first))?;
    writer.flush()?;

    write_debug_dump(&files.intermediates, config, result, first)?;

    Ok(files)
}

/// One hex word per element, row-major, newline-terminated.
fn write_hex_matrix(path: &Path, m: &Matrix<f32>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for &value in m.as_slice() {
        writeln!(writer, "{}", codec::encode(value))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_debug_dump(
    path: &Path,
    config: &PipelineConfig,
    result: &PipelineResult,
    first: f32,
) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    writeln!(w, "{BANNER}")?;
    writeln!(w, "INTERMEDIATE VALUES (for debugging)")?;
    writeln!(w, "{BANNER}")?;
    writeln!(w)?;

    writeln!(w, "Input Matrix A (first 3x3):")?;
    writeln!(w, "{}", preview(&result.a, 3, 3))?;
    writeln!(w)?;

    writeln!(w, "Input Matrix B (first 3x3):")?;
    writeln!(w, "{}", preview(&result.b, 3, 3))?;
    writeln!(w)?;

    writeln!(w, "After MatMul C = A x B (first 3x3):")?;
    writeln!(w, "{}", preview(&result.matmul, 3, 3))?;
    writeln!(w)?;

    writeln!(w, "After Activation ({}) (first 3x3):", config.activation.name())?;
    writeln!(w, "{}", preview(&result.activated, 3, 3))?;
    writeln!(w)?;

    let region = result.pool_input();
    let (region_h, region_w) = region.shape();
    writeln!(w, "MaxPool Input ({region_h}x{region_w} at top-left):")?;
    writeln!(w, "{}", preview(&region, region_h, region_w))?;
    writeln!(w)?;

    let (pooled_h, pooled_w) = result.pooled.shape();
    writeln!(w, "After MaxPool ({pooled_h}x{pooled_w}):")?;
    writeln!(w, "{}", preview(&result.pooled, pooled_h, pooled_w))?;
    writeln!(w)?;

    writeln!(
        w,
        "After Dropout (p = {}, inference passthrough):",
        config.dropout_p
    )?;
    let (final_h, final_w) = result.final_output.shape();
    writeln!(w, "{}", preview(&result.final_output, final_h, final_w))?;
    writeln!(w)?;

    writeln!(w, "Expected Final Output (first element): {first:.6}")?;
    writeln!(w, "Expected Final Output (hex): {}", codec::encode(first))?;

    w.flush()?;
    Ok(())
}

/// Fixed-width preview of the top-left corner of a matrix.
fn preview(m: &Matrix<f32>, max_rows: usize, max_cols: usize) -> String {
    let rows = m.n_rows().min(max_rows);
    let cols = m.n_cols().min(max_cols);
    let lines: Vec<String> = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| format!("{:>12.6}", m.get(i, j)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    lines.join("\n")
}
