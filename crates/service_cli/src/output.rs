//! CSV file writer for grids and sample sets.
//!
//! Every file holds one sequence as a single comma-separated record with no
//! header and no trailing separator, so it loads directly with
//! `numpy.genfromtxt(path, delimiter=",")`.

use effsim_mc::grid::Grid;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Result;

/// Record of a written file
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    /// File path
    pub path: PathBuf,
    /// Number of values written
    pub values: usize,
}

/// CSV writer rooted at an output directory
#[derive(Debug)]
pub struct CsvWriter {
    /// Output directory
    output_dir: PathBuf,
    /// Written files log
    written_files: Vec<WrittenFile>,
}

impl CsvWriter {
    /// Create a new writer. The directory is created on first write.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            written_files: Vec::new(),
        }
    }

    /// Write `values` to `<output_dir>/<file_name>`
    pub fn write_values(&mut self, file_name: &str, values: &[f64]) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);

        if values.is_empty() {
            // A zero-field record would be written as an empty quoted field
            fs::write(&path, "")?;
        } else {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&path)?;
            writer.write_record(values.iter().map(|v| v.to_string()))?;
            writer.flush()?;
        }

        info!(path = %path.display(), values = values.len(), "CSV file written");

        self.written_files.push(WrittenFile {
            path: path.clone(),
            values: values.len(),
        });
        Ok(path)
    }

    /// Write a grid as `domain_<name>.csv` and `vals_<name>.csv`
    pub fn write_grid(&mut self, name: &str, grid: &Grid) -> Result<()> {
        self.write_values(&format!("domain_{}.csv", name), grid.points())?;
        self.write_values(&format!("vals_{}.csv", name), grid.values())?;
        Ok(())
    }

    /// Get list of written files
    pub fn written_files(&self) -> &[WrittenFile] {
        &self.written_files
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
