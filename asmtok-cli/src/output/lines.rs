//! Line-per-input writer for batch output

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one tokenized line per input line
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> LineWriter<W> {
    /// Create a new line writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a single line
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.written += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.written
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl LineWriter<BufWriter<File>> {
    /// Create (or truncate) the destination file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|source| CliError::WriteFailed {
                path: path.display().to_string(),
                source,
            })
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines_to_buffer() {
        let mut buffer = Vec::new();
        {
            let mut writer = LineWriter::new(&mut buffer);
            writer.write_line("ক , খ").unwrap();
            writer.write_line("গ").unwrap();
            assert_eq!(writer.lines_written(), 2);
            writer.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "ক , খ\nগ\n");
    }

    #[test]
    fn test_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let mut writer = LineWriter::create(&path).unwrap();
        writer.write_line("৯:৩০").unwrap();
        writer.finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "৯:৩০\n");
    }

    #[test]
    fn test_create_in_missing_directory() {
        let err = LineWriter::create(Path::new("/nonexistent/dir/out.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::WriteFailed { .. })
        ));

        let io_kind = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<std::io::Error>())
            .map(std::io::Error::kind);
        assert_eq!(io_kind, Some(std::io::ErrorKind::NotFound));
    }
}
